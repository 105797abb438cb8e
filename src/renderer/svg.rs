//! SVG generation: one merged `<path>` per module type

use std::collections::BTreeMap;

use crate::matrix::{Category, Matrix, ModuleType};

use super::{ModuleValues, RenderOptions};

/// Collect module outlines per type and assemble them into an SVG document
pub struct SvgBuilder<'a> {
    options: &'a RenderOptions,
    values: &'a ModuleValues,
    /// Path segments per effective type, in scan order
    paths: BTreeMap<ModuleType, Vec<String>>,
}

impl<'a> SvgBuilder<'a> {
    /// Create a new SVG builder
    pub fn new(options: &'a RenderOptions, values: &'a ModuleValues) -> Self {
        Self {
            options,
            values,
            paths: BTreeMap::new(),
        }
    }

    /// Scan the matrix row by row and file each module under its effective type
    pub fn add_matrix(&mut self, matrix: &Matrix) {
        for (x, y, module) in matrix.iter() {
            let connect = self.options.connect_paths
                && !matrix.check_types(x, y, &self.options.exclude_from_connect);
            let key = effective_type(module, matrix.check(x, y), connect);
            let segment = self.module_segment(matrix, x, y);
            self.paths.entry(key).or_default().push(segment);
        }
        log::debug!(
            "collected {} path group(s) from a {}x{} matrix",
            self.paths.len(),
            matrix.size(),
            matrix.size()
        );
    }

    /// Outline for a single module, empty for light modules when transparent
    fn module_segment(&self, matrix: &Matrix, x: usize, y: usize) -> String {
        if self.options.transparent && !matrix.check(x, y) {
            return String::new();
        }

        if self.options.draw_circular_modules
            && !matrix.check_types(x, y, &self.options.keep_as_square)
        {
            circle_path(x, y, self.options.circle_radius)
        } else {
            square_path(x, y)
        }
    }

    fn header(&self, size: usize) -> String {
        let eol = &self.options.eol;
        let class = format!("qr-svg {}", self.options.css_class);
        let view = self
            .options
            .viewbox_size
            .map(|s| s.to_string())
            .unwrap_or_else(|| size.to_string());
        let width = self
            .options
            .width
            .as_ref()
            .map(|w| format!(r#" width="{}""#, w))
            .unwrap_or_default();
        let height = self
            .options
            .height
            .as_ref()
            .map(|h| format!(r#" height="{}""#, h))
            .unwrap_or_default();

        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>{eol}<svg xmlns="http://www.w3.org/2000/svg" class="{}" viewBox="0 0 {view} {view}" preserveAspectRatio="{}"{width}{height}>{eol}"#,
            class.trim_end(),
            self.options.preserve_aspect_ratio,
        )
    }

    /// One `<path>` element per non-empty group, in ascending type order
    fn path_elements(&self) -> Vec<String> {
        self.paths
            .iter()
            .filter_map(|(&module, segments)| {
                let d = segments
                    .iter()
                    .filter(|s| !s.is_empty())
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(" ");
                let d = d.trim();
                if d.is_empty() {
                    return None;
                }

                let class = [
                    format!("qr-{}", module.bits()),
                    (if module.dark { "dark" } else { "light" }).to_string(),
                    self.options.css_class.clone(),
                ]
                .into_iter()
                .filter(|c| !c.is_empty())
                .collect::<Vec<_>>()
                .join(" ");

                let fill = self.values.get(module);
                Some(if fill.is_empty() {
                    format!(r#"<path class="{}" d="{}"/>"#, class, d)
                } else {
                    format!(
                        r#"<path class="{}" fill="{}" fill-opacity="{}" d="{}"/>"#,
                        class,
                        fill,
                        self.options.opacity,
                        d
                    )
                })
            })
            .collect()
    }

    /// Build the final SVG string
    pub fn build(self, size: usize) -> String {
        let eol = self.options.eol.as_str();
        let mut svg = self.header(size);

        if !self.options.defs.is_empty() {
            svg.push_str(&format!("<defs>{}{eol}</defs>{eol}", self.options.defs));
        }

        svg.push_str(&self.path_elements().join(eol));

        svg.push_str(eol);
        svg.push_str("</svg>");
        svg.push_str(eol);

        svg
    }
}

/// Render a matrix to an SVG document string
pub fn render_svg(matrix: &Matrix, options: &RenderOptions, values: &ModuleValues) -> String {
    let mut builder = SvgBuilder::new(options, values);
    builder.add_matrix(matrix);
    builder.build(matrix.size())
}

/// The type a module is grouped under
///
/// A connected module collapses to data of its darkness; any other module
/// keeps its native type.
pub fn effective_type(module: ModuleType, dark: bool, connect: bool) -> ModuleType {
    if connect {
        ModuleType::new(Category::Data, dark)
    } else {
        module
    }
}

/// Closed unit square with its top-left corner at `(x, y)`
pub fn square_path(x: usize, y: usize) -> String {
    format!("M{} {} h1 v1 h-1Z", x, y)
}

/// Closed circle of radius `r` centered in the module at `(x, y)`
///
/// The radius prints as given; derived coordinates use its decimal count.
pub fn circle_path(x: usize, y: usize, r: f64) -> String {
    let radius = r.to_string();
    let precision = radius
        .split_once('.')
        .map_or(0, |(_, frac)| frac.len())
        .max(1);
    let d = fmt_num(r * 2.0, precision);
    format!(
        "M{} {} a{radius} {radius} 0 1 0 {d} 0 a{radius},{radius} 0 1 0 -{d} 0Z",
        fmt_num(x as f64 + 0.5 - r, precision),
        fmt_num(y as f64 + 0.5, precision),
    )
}

/// Format a derived coordinate, trimming trailing zeros
fn fmt_num(n: f64, precision: usize) -> String {
    let s = format!("{:.*}", precision, n);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}
