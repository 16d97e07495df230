//! Built-in base theme
//!
//! Declared overrides and extensions are layered over this theme.

use crate::error::{StyleError, StyleResult};
use crate::theme::{ThemeMap, ThemeValue};

const BASE_THEME_YAML: &str = include_str!("embedded/base_theme.yaml");

/// Get the base theme every declaration starts from
pub fn default_theme() -> StyleResult<ThemeMap> {
    let value: ThemeValue = serde_yaml::from_str(BASE_THEME_YAML)
        .map_err(|e| StyleError::Parse(format!("built-in base theme: {}", e)))?;

    match value {
        ThemeValue::Map(map) => Ok(map),
        _ => Err(StyleError::Parse(
            "built-in base theme must be a mapping".to_string(),
        )),
    }
}

/// Dark mode strategy used when a declaration does not name one
pub fn default_dark_mode() -> String {
    "media".to_string()
}
