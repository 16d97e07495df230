//! Plugin registry
//!
//! Catalog of plugins the generation engine ships with and the features
//! (theme categories with variants) each one contributes.

use super::PluginId;
use std::collections::{BTreeSet, HashMap};

/// A plugin known to the generation engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnownPlugin {
    pub id: &'static str,
    /// Feature names this plugin adds, usable as `variants` keys
    pub features: &'static [&'static str],
    /// Theme categories this plugin reads, e.g. `typography`
    pub theme_categories: &'static [&'static str],
}

/// Plugins bundled with the generation engine
pub const BUILTIN_PLUGINS: &[KnownPlugin] = &[
    KnownPlugin {
        id: "@tailwindcss/typography",
        features: &["typography"],
        theme_categories: &["typography"],
    },
    KnownPlugin {
        id: "@tailwindcss/forms",
        features: &[],
        theme_categories: &[],
    },
    KnownPlugin {
        id: "@tailwindcss/aspect-ratio",
        features: &["aspectRatio"],
        theme_categories: &["aspectRatio"],
    },
    KnownPlugin {
        id: "@tailwindcss/container-queries",
        features: &["containerQueries"],
        theme_categories: &["containers"],
    },
];

/// Plugin registry holds all known plugins
#[derive(Debug)]
pub struct PluginRegistry {
    plugins: HashMap<&'static str, KnownPlugin>,
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PluginRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            plugins: HashMap::new(),
        }
    }

    /// Create a registry holding the engine's bundled plugins
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for plugin in BUILTIN_PLUGINS {
            registry.register(plugin.clone());
        }
        registry
    }

    /// Register a plugin
    pub fn register(&mut self, plugin: KnownPlugin) {
        self.plugins.insert(plugin.id, plugin);
    }

    /// Get a plugin by id
    pub fn get(&self, id: &str) -> Option<&KnownPlugin> {
        self.plugins.get(id)
    }

    /// Check if a plugin is registered
    pub fn contains(&self, id: &str) -> bool {
        self.plugins.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Features contributed by the given plugins
    ///
    /// Unknown plugins contribute nothing.
    pub fn features_for(&self, plugins: &[PluginId]) -> BTreeSet<&'static str> {
        plugins
            .iter()
            .filter_map(|id| self.get(id.as_str()))
            .flat_map(|plugin| plugin.features.iter().copied())
            .collect()
    }

    /// Ids of the given plugins this registry does not know
    pub fn unknown<'a>(&self, plugins: &'a [PluginId]) -> Vec<&'a PluginId> {
        plugins
            .iter()
            .filter(|id| !self.contains(id.as_str()))
            .collect()
    }
}
