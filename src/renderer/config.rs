//! Configuration for markup rendering

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::matrix::{Category, ModuleType};

/// Errors that can occur when loading render options
#[derive(Error, Debug)]
pub enum OptionsError {
    #[error("Failed to read options file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse options TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Unknown module type '{0}' in module_values")]
    UnknownModuleType(String),
    #[error("Unknown module category '{0}'")]
    UnknownCategory(String),
}

/// Which markup the renderer produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Html,
    #[default]
    Svg,
}

/// Options consumed read-only by the renderers
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// HTML or SVG
    pub mode: OutputMode,

    /// Separator appended after rows and between path elements
    pub eol: String,

    /// CSS class added to the outer element and to every path
    pub css_class: String,

    /// Default value for dark modules without an override
    pub markup_dark: String,

    /// Default value for light modules without an override
    pub markup_light: String,

    /// Per-type overrides; anything that is not a string falls back to the default
    pub module_values: HashMap<ModuleType, toml::Value>,

    /// Draw nothing for light modules
    pub transparent: bool,

    /// Draw dark and light modules as circles
    pub draw_circular_modules: bool,

    /// Circle radius in module units
    pub circle_radius: f64,

    /// Categories that stay square when circles are drawn
    pub keep_as_square: HashSet<Category>,

    /// Merge modules of different categories into one path per darkness
    pub connect_paths: bool,

    /// Categories that keep their own path when paths are connected
    pub exclude_from_connect: HashSet<Category>,

    /// viewBox side length; the matrix size when unset
    pub viewbox_size: Option<u32>,

    pub width: Option<String>,

    pub height: Option<String>,

    pub preserve_aspect_ratio: String,

    /// fill-opacity for paths with an explicit fill
    pub opacity: f64,

    /// Raw markup placed inside `<defs>`
    pub defs: String,

    /// Return the SVG as a base64 data URI (not applied when writing a file)
    pub base64: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            mode: OutputMode::Svg,
            eol: "\n".to_string(),
            css_class: String::new(),
            markup_dark: "#000".to_string(),
            markup_light: "#fff".to_string(),
            module_values: HashMap::new(),
            transparent: false,
            draw_circular_modules: false,
            circle_radius: 0.45,
            keep_as_square: HashSet::new(),
            connect_paths: false,
            exclude_from_connect: HashSet::new(),
            viewbox_size: None,
            width: None,
            height: None,
            preserve_aspect_ratio: "xMidYMid".to_string(),
            opacity: 1.0,
            defs: String::new(),
            base64: false,
        }
    }
}

/// TOML structure for deserializing render options
#[derive(Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct TomlOptions {
    mode: Option<OutputMode>,
    eol: Option<String>,
    css_class: Option<String>,
    markup_dark: Option<String>,
    markup_light: Option<String>,
    module_values: BTreeMap<String, toml::Value>,
    transparent: Option<bool>,
    svg: TomlSvg,
}

#[derive(Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct TomlSvg {
    draw_circular_modules: Option<bool>,
    circle_radius: Option<f64>,
    keep_as_square: Vec<String>,
    connect_paths: Option<bool>,
    exclude_from_connect: Vec<String>,
    viewbox_size: Option<u32>,
    width: Option<String>,
    height: Option<String>,
    preserve_aspect_ratio: Option<String>,
    opacity: Option<f64>,
    defs: Option<String>,
    base64: Option<bool>,
}

impl RenderOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load options from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, OptionsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load options from a TOML string; unset keys keep their defaults
    ///
    /// ```toml
    /// mode = "svg"
    /// css_class = "qr"
    ///
    /// [module_values]
    /// finder-dark = "#a00"
    ///
    /// [svg]
    /// connect_paths = true
    /// exclude_from_connect = ["finder", "alignment"]
    /// ```
    pub fn from_str(content: &str) -> Result<Self, OptionsError> {
        let parsed: TomlOptions = toml::from_str(content)?;
        let mut options = Self::default();

        if let Some(mode) = parsed.mode {
            options.mode = mode;
        }
        if let Some(eol) = parsed.eol {
            options.eol = eol;
        }
        if let Some(class) = parsed.css_class {
            options.css_class = class;
        }
        if let Some(dark) = parsed.markup_dark {
            options.markup_dark = dark;
        }
        if let Some(light) = parsed.markup_light {
            options.markup_light = light;
        }
        for (name, value) in parsed.module_values {
            let module = name
                .parse()
                .map_err(|_| OptionsError::UnknownModuleType(name.clone()))?;
            options.module_values.insert(module, value);
        }
        if let Some(transparent) = parsed.transparent {
            options.transparent = transparent;
        }

        let svg = parsed.svg;
        if let Some(circles) = svg.draw_circular_modules {
            options.draw_circular_modules = circles;
        }
        if let Some(radius) = svg.circle_radius {
            options.circle_radius = radius;
        }
        options.keep_as_square = parse_categories(&svg.keep_as_square)?;
        if let Some(connect) = svg.connect_paths {
            options.connect_paths = connect;
        }
        options.exclude_from_connect = parse_categories(&svg.exclude_from_connect)?;
        options.viewbox_size = svg.viewbox_size;
        options.width = svg.width;
        options.height = svg.height;
        if let Some(ratio) = svg.preserve_aspect_ratio {
            options.preserve_aspect_ratio = ratio;
        }
        if let Some(opacity) = svg.opacity {
            options.opacity = opacity;
        }
        if let Some(defs) = svg.defs {
            options.defs = defs;
        }
        if let Some(base64) = svg.base64 {
            options.base64 = base64;
        }

        Ok(options)
    }

    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_eol(mut self, eol: impl Into<String>) -> Self {
        self.eol = eol.into();
        self
    }

    pub fn with_css_class(mut self, class: impl Into<String>) -> Self {
        self.css_class = class.into();
        self
    }

    /// Set the default dark and light values
    pub fn with_markup_colors(mut self, dark: impl Into<String>, light: impl Into<String>) -> Self {
        self.markup_dark = dark.into();
        self.markup_light = light.into();
        self
    }

    /// Override the value for one module type
    pub fn with_module_value(mut self, module: ModuleType, value: impl Into<toml::Value>) -> Self {
        self.module_values.insert(module, value.into());
        self
    }

    pub fn with_transparent(mut self, transparent: bool) -> Self {
        self.transparent = transparent;
        self
    }

    /// Draw circles of the given radius instead of squares
    pub fn with_circular_modules(mut self, radius: f64) -> Self {
        self.draw_circular_modules = true;
        self.circle_radius = radius;
        self
    }

    pub fn with_keep_as_square(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.keep_as_square = categories.into_iter().collect();
        self
    }

    pub fn with_connect_paths(mut self, connect: bool) -> Self {
        self.connect_paths = connect;
        self
    }

    pub fn with_exclude_from_connect(
        mut self,
        categories: impl IntoIterator<Item = Category>,
    ) -> Self {
        self.exclude_from_connect = categories.into_iter().collect();
        self
    }

    pub fn with_viewbox_size(mut self, size: u32) -> Self {
        self.viewbox_size = Some(size);
        self
    }

    /// Set explicit width and height attributes on the `<svg>` element
    pub fn with_dimensions(mut self, width: impl Into<String>, height: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self.height = Some(height.into());
        self
    }

    pub fn with_preserve_aspect_ratio(mut self, ratio: impl Into<String>) -> Self {
        self.preserve_aspect_ratio = ratio.into();
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_defs(mut self, defs: impl Into<String>) -> Self {
        self.defs = defs.into();
        self
    }

    pub fn with_base64(mut self, base64: bool) -> Self {
        self.base64 = base64;
        self
    }
}

fn parse_categories(names: &[String]) -> Result<HashSet<Category>, OptionsError> {
    names
        .iter()
        .map(|n| n.parse().map_err(|_| OptionsError::UnknownCategory(n.clone())))
        .collect()
}
