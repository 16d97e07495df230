//! Declaration loading
//!
//! Reads declarations from YAML files, strings or embedded presets, and
//! locates the declaration file for a site.

use super::embedded_presets;
use super::schema::DeclarationFile;
use crate::error::{StyleError, StyleResult};
use crate::provider::StyleDeclaration;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit declaration file
pub const CONFIG_ENV_VAR: &str = "SITESTYLE_CONFIG";

/// File names searched for in the site root
pub const CONFIG_FILE_NAMES: &[&str] = &["sitestyle.yaml", "sitestyle.yml"];

/// Preset used when no declaration file exists
pub const DEFAULT_PRESET: &str = "site";

/// Where a declaration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclarationSource {
    File(PathBuf),
    Preset(String),
}

impl std::fmt::Display for DeclarationSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeclarationSource::File(path) => write!(f, "{}", path.display()),
            DeclarationSource::Preset(name) => write!(f, "preset '{}'", name),
        }
    }
}

/// Declaration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Pick the declaration source
    ///
    /// Precedence order (highest to lowest):
    /// 1. Explicit file
    /// 2. Explicit preset
    /// 3. `SITESTYLE_CONFIG` environment variable
    /// 4. `sitestyle.yaml` / `sitestyle.yml` in `root`
    /// 5. The `site` preset
    pub fn discover(file: Option<&Path>, preset: Option<&str>, root: &Path) -> DeclarationSource {
        if let Some(path) = file {
            return DeclarationSource::File(path.to_path_buf());
        }
        if let Some(name) = preset {
            return DeclarationSource::Preset(name.to_string());
        }
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            if !path.is_empty() {
                return DeclarationSource::File(PathBuf::from(path));
            }
        }
        for name in CONFIG_FILE_NAMES {
            let candidate = root.join(name);
            if candidate.is_file() {
                return DeclarationSource::File(candidate);
            }
        }
        DeclarationSource::Preset(DEFAULT_PRESET.to_string())
    }

    /// Load a declaration from a discovered source
    pub fn load(source: &DeclarationSource) -> Result<StyleDeclaration> {
        tracing::debug!("Loading style declaration from {}", source);
        match source {
            DeclarationSource::File(path) => Self::load_file(path),
            DeclarationSource::Preset(name) => embedded_presets::load_embedded_preset(name),
        }
    }

    /// Load a declaration from a YAML file
    pub fn load_file(path: &Path) -> Result<StyleDeclaration> {
        if !path.exists() {
            return Err(anyhow::anyhow!(
                "Style declaration not found: {}",
                path.display()
            ));
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read style declaration: {}", path.display()))?;

        let declaration = Self::load_from_yaml(&contents)
            .with_context(|| format!("Failed to parse style declaration: {}", path.display()))?;

        Ok(declaration)
    }

    /// Load a declaration from YAML text
    pub fn load_from_yaml(yaml: &str) -> StyleResult<StyleDeclaration> {
        let file: DeclarationFile =
            serde_yaml::from_str(yaml).map_err(|e| StyleError::Parse(e.to_string()))?;
        file.into_declaration()
    }
}
