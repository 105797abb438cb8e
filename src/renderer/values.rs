//! Module value resolution: one rendering value per module type

use std::collections::BTreeMap;

use crate::matrix::ModuleType;

use super::RenderOptions;

/// Resolved rendering values (colors or style tokens) keyed by module type
///
/// Every module type has an entry. Built once per render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleValues {
    values: BTreeMap<ModuleType, String>,
}

impl ModuleValues {
    /// Resolve values for all module types from the options
    ///
    /// An override that is a string is sanitized; any other override, or no
    /// override at all, falls back to the dark or light default.
    pub fn resolve(options: &RenderOptions) -> Self {
        let values = ModuleType::all()
            .map(|module| {
                let value = match options.module_values.get(&module) {
                    Some(toml::Value::String(s)) => sanitize(s),
                    Some(other) => {
                        log::debug!(
                            "ignoring non-string value {} for module type {}",
                            other,
                            module
                        );
                        default_value(module, options)
                    }
                    None => default_value(module, options),
                };
                (module, value)
            })
            .collect();

        Self { values }
    }

    /// The value for a module type; empty if the override sanitized to nothing
    pub fn get(&self, module: ModuleType) -> &str {
        self.values.get(&module).map(String::as_str).unwrap_or_default()
    }
}

fn default_value(module: ModuleType, options: &RenderOptions) -> String {
    if module.dark {
        options.markup_dark.clone()
    } else {
        options.markup_light.clone()
    }
}

/// Strip markup tags, then trim quotes and whitespace
pub fn sanitize(value: &str) -> String {
    strip_tags(value)
        .trim_matches(|c| matches!(c, ' ' | '\'' | '"' | '\r' | '\n' | '\t'))
        .to_string()
}

/// Remove everything between `<` and `>`; an unclosed tag runs to the end
///
/// A `<` followed by whitespace or the end of input is plain text.
fn strip_tags(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_tag = false;
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '<' if !in_tag => match chars.peek() {
                Some(next) if !next.is_whitespace() => in_tag = true,
                _ => out.push(c),
            },
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}
