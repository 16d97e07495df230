//! Embedded declaration presets
//!
//! Declarations compiled into the binary, usable without a config file.

use super::loader::ConfigLoader;
use crate::provider::StyleDeclaration;
use anyhow::{Context, Result};

/// List of embedded preset names
pub const EMBEDDED_PRESETS: &[&str] = &["site", "minimal"];

/// Get embedded preset YAML content by name
pub fn get_embedded_preset(name: &str) -> Option<&'static str> {
    match name {
        "site" => Some(include_str!("embedded/site.yaml")),
        "minimal" => Some(include_str!("embedded/minimal.yaml")),
        _ => None,
    }
}

/// Load an embedded preset by name
pub fn load_embedded_preset(name: &str) -> Result<StyleDeclaration> {
    let yaml_content = get_embedded_preset(name)
        .ok_or_else(|| anyhow::anyhow!("Embedded preset '{}' not found", name))?;

    ConfigLoader::load_from_yaml(yaml_content)
        .with_context(|| format!("Failed to load embedded preset '{}'", name))
}

/// Check if a name is an embedded preset
pub fn is_embedded_preset(name: &str) -> bool {
    EMBEDDED_PRESETS.contains(&name)
}

/// Get all embedded preset names
pub fn list_embedded_presets() -> Vec<String> {
    EMBEDDED_PRESETS.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::StyleConfigProvider;

    #[test]
    fn test_list_embedded_presets() {
        let presets = list_embedded_presets();
        assert_eq!(presets.len(), EMBEDDED_PRESETS.len());
        assert!(presets.contains(&"site".to_string()));
    }

    #[test]
    fn test_is_embedded_preset() {
        assert!(is_embedded_preset("site"));
        assert!(is_embedded_preset("minimal"));
        assert!(!is_embedded_preset("nonexistent"));
        assert!(!is_embedded_preset(""));
    }

    #[test]
    fn test_load_embedded_preset_nonexistent() {
        let result = load_embedded_preset("nonexistent");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    #[test]
    fn test_all_embedded_presets_resolve() {
        for name in EMBEDDED_PRESETS {
            let declaration = load_embedded_preset(name)
                .unwrap_or_else(|e| panic!("Failed to load preset '{}': {:?}", name, e));
            let result = declaration.resolve();
            assert!(
                result.is_ok(),
                "Preset '{}' failed to resolve: {:?}",
                name,
                result.err()
            );
        }
    }
}
