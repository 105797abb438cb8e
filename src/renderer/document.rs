//! Final output assembly: fragment vs. standalone document, data URIs

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::matrix::Matrix;

use super::html::{html_document, render_html};
use super::svg::render_svg;
use super::{ModuleValues, OutputMode, RenderOptions};

/// Where the rendered markup is headed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Returned to the caller as a string
    Inline,
    /// Written to a file
    File,
}

/// Render the matrix in the configured mode and finish it for the target
///
/// HTML written to a file is wrapped in a standalone document. SVG is
/// turned into a data URI only when returned inline with `base64` set.
pub fn assemble(matrix: &Matrix, options: &RenderOptions, target: Target) -> String {
    let values = ModuleValues::resolve(options);

    match options.mode {
        OutputMode::Html => {
            let html = render_html(matrix, options, &values);
            match target {
                Target::File => html_document(&html, options),
                Target::Inline => html,
            }
        }
        OutputMode::Svg => {
            let svg = render_svg(matrix, options, &values);
            if target == Target::Inline && options.base64 {
                data_uri(&svg, "image/svg+xml")
            } else {
                svg
            }
        }
    }
}

/// Encode data as a base64 `data:` URI with the given media type
pub fn data_uri(data: &str, mime: &str) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(data))
}
