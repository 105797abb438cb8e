//! QR Markup - render a finished QR symbol matrix as HTML or SVG
//!
//! The matrix comes from an encoder elsewhere; this library only turns it
//! into markup text.
//!
//! # Example
//!
//! ```rust
//! use qr_markup::{render, Category, Matrix, ModuleType, RenderOptions};
//!
//! let mut matrix = Matrix::new(3);
//! matrix.set(1, 1, ModuleType::dark(Category::Data));
//!
//! let svg = render(&matrix, &RenderOptions::default());
//! assert!(svg.contains("<svg"));
//! assert!(svg.contains("M1 1 h1 v1 h-1Z"));
//! ```

pub mod matrix;
pub mod renderer;

use std::path::Path;

pub use matrix::{Category, Matrix, MatrixError, ModuleType, IS_DARK};
pub use renderer::{
    assemble, data_uri, render_html, render_svg, ModuleValues, OptionsError, OutputMode,
    RenderOptions, SvgBuilder, Target,
};

use thiserror::Error;

/// Errors that can occur around a render: loading inputs and writing output
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error reading or parsing the matrix
    #[error("matrix error: {0}")]
    Matrix(#[from] MatrixError),

    /// Error loading render options
    #[error("options error: {0}")]
    Options(#[from] OptionsError),

    /// Error writing the output file
    #[error("failed to write '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Render the matrix to markup in the mode selected by the options
///
/// Rendering never fails: degenerate options produce well-formed but
/// degenerate markup.
///
/// # Example
///
/// ```rust
/// use qr_markup::{render, Matrix, RenderOptions};
///
/// let uri = render(&Matrix::new(2), &RenderOptions::default().with_base64(true));
/// assert!(uri.starts_with("data:image/svg+xml;base64,"));
/// ```
pub fn render(matrix: &Matrix, options: &RenderOptions) -> String {
    assemble(matrix, options, Target::Inline)
}

/// Render the matrix as a standalone document and write it to `path`
///
/// Returns the written markup. HTML is wrapped in a full document; SVG is
/// written raw, never as a data URI.
pub fn render_to_file(
    matrix: &Matrix,
    options: &RenderOptions,
    path: &Path,
) -> Result<String, RenderError> {
    let markup = assemble(matrix, options, Target::File);
    std::fs::write(path, &markup).map_err(|source| RenderError::Write {
        path: path.display().to_string(),
        source,
    })?;
    log::debug!("wrote {} bytes to {}", markup.len(), path.display());
    Ok(markup)
}
