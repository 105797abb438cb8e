//! Markup renderers for a finished matrix
//!
//! Module values are resolved once per render, then handed to either the
//! HTML grid renderer or the SVG path builder.

pub mod config;
pub mod document;
pub mod html;
pub mod svg;
pub mod values;

pub use config::{OptionsError, OutputMode, RenderOptions};
pub use document::{assemble, data_uri, Target};
pub use html::render_html;
pub use svg::{render_svg, SvgBuilder};
pub use values::ModuleValues;
