//! Integration tests for HTML and SVG markup output

use std::collections::HashSet;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use pretty_assertions::assert_eq;
use qr_markup::{
    assemble, render, render_to_file, Category, Matrix, ModuleType, OutputMode, RenderOptions,
    Target,
};

/// A 7x7 finder pattern in the top-left corner with data around it
fn finder_matrix() -> Matrix {
    let mut matrix = Matrix::new(9);
    for y in 0..9 {
        for x in 0..9 {
            let module = if x < 7 && y < 7 {
                let ring = x == 0 || y == 0 || x == 6 || y == 6;
                let core = (2..=4).contains(&x) && (2..=4).contains(&y);
                ModuleType::new(Category::Finder, ring || core)
            } else {
                ModuleType::new(Category::Data, (x + y) % 2 == 0)
            };
            matrix.set(x, y, module);
        }
    }
    matrix
}

fn path_lines(svg: &str) -> Vec<&str> {
    svg.lines().filter(|l| l.starts_with("<path")).collect()
}

fn path_class(line: &str) -> &str {
    line.split('"').nth(1).unwrap_or_default()
}

fn segment_count(line: &str) -> usize {
    line.matches('Z').count()
}

#[test]
fn test_html_one_span_per_module_in_order() {
    let mut matrix = Matrix::new(3);
    matrix.set(2, 0, ModuleType::dark(Category::Data));
    let options = RenderOptions::default()
        .with_mode(OutputMode::Html)
        .with_module_value(ModuleType::dark(Category::Data), "red");

    let html = render(&matrix, &options);
    let spans: Vec<_> = html.match_indices("<span").collect();
    assert_eq!(spans.len(), 9);

    let first_row = html.lines().nth(1).unwrap();
    assert_eq!(
        first_row,
        concat!(
            "<div>",
            "<span style=\"background: #fff;\"></span>",
            "<span style=\"background: #fff;\"></span>",
            "<span style=\"background: red;\"></span>",
            "</div>"
        )
    );
}

#[test]
fn test_all_light_3x3_without_connection() {
    let svg = render(&Matrix::new(3), &RenderOptions::default());
    let paths = path_lines(&svg);

    assert_eq!(paths.len(), 1);
    assert_eq!(path_class(paths[0]), "qr-0 light");
    assert_eq!(segment_count(paths[0]), 9);
}

#[test]
fn test_all_light_3x3_with_connection_is_light_data() {
    let options = RenderOptions::default().with_connect_paths(true);
    let svg = render(&Matrix::new(3), &options);
    let paths = path_lines(&svg);

    assert_eq!(paths.len(), 1);
    assert_eq!(path_class(paths[0]), "qr-2 light");
    assert_eq!(segment_count(paths[0]), 9);
    assert!(paths[0].contains(r#"d="M0 0 h1 v1 h-1Z M1 0 h1 v1 h-1Z M2 0 h1 v1 h-1Z M0 1 "#));
}

#[test]
fn test_one_path_per_effective_type() {
    let matrix = finder_matrix();

    let separate = render(&matrix, &RenderOptions::default());
    let classes: Vec<_> = path_lines(&separate).into_iter().map(path_class).collect();
    assert_eq!(
        classes,
        vec!["qr-2 light", "qr-4 light", "qr-2050 dark", "qr-2052 dark"]
    );

    let connected = render(&matrix, &RenderOptions::default().with_connect_paths(true));
    let classes: Vec<_> = path_lines(&connected).into_iter().map(path_class).collect();
    assert_eq!(classes, vec!["qr-2 light", "qr-2050 dark"]);
}

#[test]
fn test_connection_merges_adjacent_categories_by_darkness() {
    let mut matrix = Matrix::new(2);
    matrix.set(0, 0, ModuleType::dark(Category::Finder));
    matrix.set(1, 0, ModuleType::dark(Category::Timing));
    matrix.set(0, 1, ModuleType::dark(Category::Data));
    matrix.set(1, 1, ModuleType::light(Category::Alignment));

    let svg = render(&matrix, &RenderOptions::default().with_connect_paths(true));
    let paths = path_lines(&svg);

    assert_eq!(paths.len(), 2);
    assert_eq!(
        paths[0],
        r##"<path class="qr-2 light" fill="#fff" fill-opacity="1" d="M1 1 h1 v1 h-1Z"/>"##
    );
    assert_eq!(
        paths[1],
        r##"<path class="qr-2050 dark" fill="#000" fill-opacity="1" d="M0 0 h1 v1 h-1Z M1 0 h1 v1 h-1Z M0 1 h1 v1 h-1Z"/>"##
    );
}

#[test]
fn test_excluded_categories_keep_their_path() {
    let options = RenderOptions::default()
        .with_connect_paths(true)
        .with_exclude_from_connect([Category::Finder]);
    let svg = render(&finder_matrix(), &options);
    let classes: Vec<_> = path_lines(&svg).into_iter().map(path_class).collect();

    assert_eq!(
        classes,
        vec!["qr-2 light", "qr-4 light", "qr-2050 dark", "qr-2052 dark"]
    );
}

#[test]
fn test_circular_but_unconnected() {
    let options = RenderOptions::default()
        .with_circular_modules(0.45)
        .with_connect_paths(true)
        .with_exclude_from_connect([Category::Timing]);
    let mut matrix = Matrix::new(1);
    matrix.set(0, 0, ModuleType::dark(Category::Timing));

    let svg = render(&matrix, &options);
    let paths = path_lines(&svg);

    assert_eq!(paths.len(), 1);
    assert_eq!(path_class(paths[0]), "qr-2080 dark");
    assert!(paths[0].contains(" a0.45 0.45 "));
}

#[test]
fn test_square_but_connected() {
    let options = RenderOptions::default()
        .with_circular_modules(0.45)
        .with_keep_as_square([Category::Finder])
        .with_connect_paths(true);
    let mut matrix = Matrix::new(2);
    matrix.set(0, 0, ModuleType::dark(Category::Finder));
    matrix.set(1, 0, ModuleType::dark(Category::Data));

    let svg = render(&matrix, &options);
    let dark = path_lines(&svg)
        .into_iter()
        .find(|l| path_class(l) == "qr-2050 dark")
        .expect("merged dark path");

    assert!(dark.contains(r#"d="M0 0 h1 v1 h-1Z M1.05 0.5 a0.45 0.45"#));
}

#[test]
fn test_rendering_is_idempotent() {
    let options = RenderOptions::default()
        .with_connect_paths(true)
        .with_exclude_from_connect([Category::Finder, Category::Alignment])
        .with_circular_modules(0.4)
        .with_css_class("qr");
    let matrix = finder_matrix();

    assert_eq!(render(&matrix, &options), render(&matrix, &options));
}

#[test]
fn test_transparency_keeps_scan_order() {
    let mut matrix = Matrix::new(3);
    matrix.set(0, 0, ModuleType::dark(Category::Data));
    matrix.set(2, 1, ModuleType::dark(Category::Data));
    matrix.set(1, 2, ModuleType::dark(Category::Data));

    let svg = render(&matrix, &RenderOptions::default().with_transparent(true));
    let paths = path_lines(&svg);

    assert_eq!(paths.len(), 1);
    assert!(paths[0].ends_with(r#"d="M0 0 h1 v1 h-1Z M2 1 h1 v1 h-1Z M1 2 h1 v1 h-1Z"/>"#));
    assert!(!paths[0].contains("light"));
}

#[test]
fn test_base64_inline_and_raw_file() {
    let options = RenderOptions::default().with_base64(true);
    let matrix = finder_matrix();

    let uri = render(&matrix, &options);
    let payload = uri
        .strip_prefix("data:image/svg+xml;base64,")
        .expect("data URI prefix");
    let decoded = String::from_utf8(STANDARD.decode(payload).unwrap()).unwrap();
    assert_eq!(decoded, assemble(&matrix, &options, Target::File));

    let path = std::env::temp_dir().join(format!("qr-markup-{}.svg", std::process::id()));
    let written = render_to_file(&matrix, &options, &path).unwrap();
    let on_disk = std::fs::read_to_string(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert!(written.starts_with("<?xml"));
    assert!(!written.contains("data:image/svg+xml"));
    assert_eq!(on_disk, written);
}

#[test]
fn test_html_file_document() {
    let options = RenderOptions::default().with_mode(OutputMode::Html);
    let path = std::env::temp_dir().join(format!("qr-markup-{}.html", std::process::id()));

    let written = render_to_file(&Matrix::new(2), &options, &path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert!(written.starts_with("<!DOCTYPE html><head><meta charset=\"UTF-8\"><title>QR Code</title></head><body>\n<div>"));
    assert!(written.ends_with("</div>\n</body>"));
}

#[test]
fn test_options_from_toml_drive_rendering() {
    let options = RenderOptions::from_str(
        r##"
        css_class = "code"

        [module_values]
        data-dark = "<em>'navy'</em>"
        finder-dark = 7

        [svg]
        connect_paths = true
        exclude_from_connect = ["finder"]
        opacity = 0.5
        "##,
    )
    .unwrap();

    let svg = render(&finder_matrix(), &options);
    assert!(svg.contains(r#"<path class="qr-2050 dark code" fill="navy" fill-opacity="0.5""#));
    assert!(svg.contains(r##"<path class="qr-2052 dark code" fill="#000" fill-opacity="0.5""##));
    assert!(svg.contains(r#"class="qr-svg code""#));
}

#[test]
fn test_matrix_dump_roundtrips_through_render() {
    let matrix: Matrix = "2052 4\n2 2050\n".parse().unwrap();
    let svg = render(&matrix, &RenderOptions::default());

    let categories: HashSet<_> = matrix.iter().map(|(_, _, t)| t.category).collect();
    assert_eq!(categories.len(), 2);
    assert_eq!(path_lines(&svg).len(), 4);
}
