//! Plugin list validation
//!
//! Rejects identifiers the engine could never load and collapses duplicates.

use super::PluginId;
use crate::error::{StyleError, StyleResult};
use std::collections::HashSet;

/// Plugin list validator
pub struct PluginValidator;

impl PluginValidator {
    /// Validate declared plugin ids and deduplicate them
    ///
    /// The first occurrence of each id keeps its position.
    pub fn validate(declared: &[String]) -> StyleResult<Vec<PluginId>> {
        let mut seen = HashSet::new();
        let mut plugins = Vec::with_capacity(declared.len());

        for (i, raw) in declared.iter().enumerate() {
            Self::validate_id(raw, i)?;
            let id = raw.trim();
            if seen.insert(id) {
                plugins.push(PluginId::new(id));
            } else {
                tracing::debug!("Dropping duplicate plugin '{}'", id);
            }
        }

        Ok(plugins)
    }

    /// Validate a single plugin identifier
    fn validate_id(id: &str, index: usize) -> StyleResult<()> {
        let id = id.trim();
        if id.is_empty() {
            return Err(StyleError::validation(
                format!("plugins[{}]", index),
                "Plugin identifier cannot be empty",
            ));
        }

        if id.chars().any(char::is_whitespace) {
            return Err(StyleError::validation(
                format!("plugins[{}]", index),
                format!("Plugin identifier '{}' contains whitespace", id),
            ));
        }

        Ok(())
    }
}
