//! Dark-mode activation strategy

use crate::error::{StyleError, StyleResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How dark-mode variants are activated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DarkModeStrategy {
    /// Toggled by a `dark` marker class on an ancestor element
    Class,
    /// Follows `prefers-color-scheme`
    #[default]
    Media,
}

impl DarkModeStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DarkModeStrategy::Class => "class",
            DarkModeStrategy::Media => "media",
        }
    }

    /// Marker class that switches dark mode on, if any
    pub fn marker_class(&self) -> Option<&'static str> {
        match self {
            DarkModeStrategy::Class => Some("dark"),
            DarkModeStrategy::Media => None,
        }
    }

    /// Selector wrapper the engine emits for `dark:` variants
    pub fn variant_selector(&self) -> &'static str {
        match self {
            DarkModeStrategy::Class => ".dark &",
            DarkModeStrategy::Media => "@media (prefers-color-scheme: dark)",
        }
    }
}

impl FromStr for DarkModeStrategy {
    type Err = StyleError;

    fn from_str(s: &str) -> StyleResult<Self> {
        match s.trim() {
            "class" => Ok(DarkModeStrategy::Class),
            "media" => Ok(DarkModeStrategy::Media),
            other => Err(StyleError::validation(
                "darkMode",
                format!("'{}' is not a dark mode strategy, expected 'class' or 'media'", other),
            )),
        }
    }
}

impl fmt::Display for DarkModeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
