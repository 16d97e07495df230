//! Dotted-path access into a theme
//!
//! Deferred theme extensions receive a [`ThemeLookup`] instead of the theme
//! itself, so the only thing they can do is read tokens that already exist.

use super::value::{ThemeMap, ThemeValue};
use crate::error::{StyleError, StyleResult};

/// Read-only accessor over a (partially) merged theme
pub struct ThemeLookup<'a> {
    theme: &'a ThemeMap,
    category: &'a str,
}

impl<'a> ThemeLookup<'a> {
    /// Create an accessor used while resolving `category`
    pub fn new(theme: &'a ThemeMap, category: &'a str) -> Self {
        Self { theme, category }
    }

    /// Category currently being resolved
    pub fn category(&self) -> &str {
        self.category
    }

    /// Resolve a dotted path such as `colors.gray.200` or `colors.gray[200]`
    pub fn get(&self, path: &str) -> StyleResult<ThemeValue> {
        self.find(path).cloned().ok_or_else(|| StyleError::UnresolvedToken {
            category: self.category.to_string(),
            path: path.to_string(),
        })
    }

    /// Resolve a path, falling back to `default` when it does not exist
    pub fn get_or(&self, path: &str, default: impl Into<ThemeValue>) -> ThemeValue {
        self.find(path).cloned().unwrap_or_else(|| default.into())
    }

    pub fn contains(&self, path: &str) -> bool {
        self.find(path).is_some()
    }

    fn find(&self, path: &str) -> Option<&'a ThemeValue> {
        let segments = split_path(path);
        let (first, rest) = segments.split_first()?;
        let mut node = self.theme.get(first.as_str())?;
        for segment in rest {
            node = node.child(segment)?;
        }
        Some(node)
    }
}

/// Split a token path into segments, treating `[x]` like `.x`
pub fn split_path(path: &str) -> Vec<String> {
    path.replace('[', ".")
        .replace(']', "")
        .split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
