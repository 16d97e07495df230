// Plugin identifiers for the generation engine
//
// Plugins extend the set of utility and typography rules the engine knows.
// This crate only records which plugins to load and which features they
// contribute, so variant registration can tell known features from typos.

pub mod registry;
pub mod validator;

pub use registry::{KnownPlugin, PluginRegistry};
pub use validator::PluginValidator;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a plugin to load, e.g. `@tailwindcss/typography`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PluginId(String);

impl PluginId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PluginId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PluginId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
