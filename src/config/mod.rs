//! Configuration system for sitestyle
//!
//! This module reads style declarations (YAML files or embedded presets),
//! validates declared values and supplies the built-in base theme.

pub mod content;
pub mod dark_mode;
pub mod defaults;
pub mod embedded_presets;
pub mod loader;
pub mod schema;

pub use content::ContentPattern;
pub use dark_mode::DarkModeStrategy;
pub use loader::{ConfigLoader, DeclarationSource};
pub use schema::DeclarationFile;

use crate::provider::StyleConfig;

/// Get a resolved configuration value by key (dot notation)
///
/// Scalars print as-is; lists and maps print as YAML.
pub fn get_config_value(config: &StyleConfig, key: &str) -> anyhow::Result<String> {
    match key {
        "important" => Ok(config.important.to_string()),
        "darkMode" => Ok(config.dark_mode.to_string()),
        "content" => to_yaml(&config.content_paths, key),
        "safelist" => to_yaml(&config.safelist, key),
        "plugins" => to_yaml(&config.plugins, key),
        "variants" => to_yaml(&config.variants, key),
        "extend" => to_yaml(&config.theme_extensions, key),
        "theme" => to_yaml(&config.theme, key),
        _ => {
            if let Some(path) = key.strip_prefix("theme.") {
                let value = config.token(path)?;
                if value.is_map() {
                    return to_yaml(&value, key);
                }
                return Ok(value.to_string());
            }
            if let Some(feature) = key.strip_prefix("variants.") {
                let names = config
                    .variants
                    .get(feature)
                    .ok_or_else(|| anyhow::anyhow!("No variants enabled for '{}'", feature))?;
                return to_yaml(names, key);
            }
            Err(anyhow::anyhow!("Unknown configuration key: {}", key))
        }
    }
}

fn to_yaml<T: serde::Serialize>(value: &T, key: &str) -> anyhow::Result<String> {
    serde_yaml::to_string(value).map_err(|e| anyhow::anyhow!("Failed to serialize {}: {}", key, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{StyleConfigProvider, StyleDeclaration};

    fn config() -> StyleConfig {
        StyleDeclaration::new()
            .content(["layouts/**/*.html"])
            .dark_mode("class")
            .plugin("@tailwindcss/typography")
            .variants("typography", ["invert"])
            .resolve()
            .unwrap()
    }

    #[test]
    fn test_get_scalar_values() {
        let config = config();
        assert_eq!(get_config_value(&config, "darkMode").unwrap(), "class");
        assert_eq!(get_config_value(&config, "important").unwrap(), "false");
    }

    #[test]
    fn test_get_theme_token() {
        let config = config();
        assert_eq!(
            get_config_value(&config, "theme.colors.stone.900").unwrap(),
            "#1c1917"
        );
        let stone = get_config_value(&config, "theme.colors.stone").unwrap();
        assert!(stone.contains("900"));
        assert!(stone.contains("#1c1917"));
    }

    #[test]
    fn test_get_list_values() {
        let config = config();
        let plugins = get_config_value(&config, "plugins").unwrap();
        assert!(plugins.contains("@tailwindcss/typography"));
        let variants = get_config_value(&config, "variants.typography").unwrap();
        assert!(variants.contains("invert"));
    }

    #[test]
    fn test_unknown_key() {
        let config = config();
        assert!(get_config_value(&config, "prefix").is_err());
        assert!(get_config_value(&config, "theme.colors.nope").is_err());
        assert!(get_config_value(&config, "variants.nope").is_err());
    }
}
