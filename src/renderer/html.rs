//! HTML grid output: one `<span>` per module

use crate::matrix::Matrix;

use super::{ModuleValues, RenderOptions};

/// Render the matrix as nested `<div>` rows of styled `<span>` modules
pub fn render_html(matrix: &Matrix, options: &RenderOptions, values: &ModuleValues) -> String {
    let eol = options.eol.as_str();

    let mut html = if options.css_class.is_empty() {
        String::from("<div>")
    } else {
        format!(r#"<div class="{}">"#, options.css_class)
    };
    html.push_str(eol);

    for row in matrix.rows() {
        html.push_str("<div>");
        for &module in row {
            html.push_str(&format!(
                r#"<span style="background: {};"></span>"#,
                values.get(module)
            ));
        }
        html.push_str("</div>");
        html.push_str(eol);
    }

    html.push_str("</div>");
    html.push_str(eol);

    html
}

/// Wrap an HTML fragment in a minimal standalone document
pub fn html_document(fragment: &str, options: &RenderOptions) -> String {
    format!(
        r#"<!DOCTYPE html><head><meta charset="UTF-8"><title>QR Code</title></head><body>{}{}</body>"#,
        options.eol, fragment
    )
}
