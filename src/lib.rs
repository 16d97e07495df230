//! sitestyle library
//!
//! Typed style configuration for a static-site styling pipeline: content
//! patterns, safelist, dark-mode strategy, theme extensions, variants and
//! plugins, resolved once per build and handed to the CSS generation engine.

pub mod config;
pub mod error;
pub mod plugins;
pub mod provider;
pub mod session;
pub mod site;
pub mod theme;
pub mod variants;

// Re-export commonly used types for convenience
pub use config::{ConfigLoader, ContentPattern, DarkModeStrategy, DeclarationSource};
pub use error::{StyleError, StyleResult};
pub use plugins::{PluginId, PluginRegistry};
pub use provider::{StyleConfig, StyleConfigProvider, StyleDeclaration};
pub use session::{BuildSession, Revalidation};
pub use theme::{ThemeExtension, ThemeLookup, ThemeMap, ThemeValue};
