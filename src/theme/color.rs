//! Color token validation
//!
//! Leaves of color categories must be CSS colors. The engine also accepts a
//! handful of CSS keywords that are not colors in the strict sense, and
//! values only the browser can evaluate (`var(...)`, `<alpha-value>`
//! placeholders, `color-mix(...)` and friends) are passed through unchecked.

use super::value::ThemeValue;
use crate::error::{StyleError, StyleResult};

/// Theme categories whose leaves are color tokens
pub const COLOR_CATEGORIES: &[&str] = &[
    "colors",
    "backgroundColor",
    "textColor",
    "borderColor",
    "ringColor",
    "divideColor",
];

/// Keywords accepted in place of a concrete color
const COLOR_KEYWORDS: &[&str] = &["transparent", "current", "currentcolor", "inherit"];

/// Markers of values resolved by the browser rather than at build time
const BROWSER_RESOLVED: &[&str] = &["var(", "<alpha-value>", "color-mix(", "light-dark(", "env("];

pub fn is_color_category(category: &str) -> bool {
    COLOR_CATEGORIES.contains(&category)
}

/// Check that a single token is a usable color
pub fn is_valid_color(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return false;
    }
    let lowered = value.to_lowercase();
    if COLOR_KEYWORDS.contains(&lowered.as_str()) {
        return true;
    }
    if is_browser_resolved(&lowered) {
        return true;
    }
    csscolorparser::parse(value).is_ok()
}

/// Check whether a value can only be evaluated by the browser
pub fn is_browser_resolved(value: &str) -> bool {
    BROWSER_RESOLVED.iter().any(|marker| value.contains(marker))
}

/// Validate every leaf of a color category
pub fn validate_color_category(category: &str, value: &ThemeValue) -> StyleResult<()> {
    let mut first_error = None;
    value.for_each_leaf(category, &mut |path, leaf| {
        if first_error.is_some() {
            return;
        }
        let valid = match leaf {
            ThemeValue::String(s) => is_valid_color(s),
            _ => false,
        };
        if !valid {
            first_error = Some(StyleError::validation(
                format!("theme.{}", path),
                format!("'{}' is not a valid color", leaf),
            ));
        }
    });

    match first_error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
