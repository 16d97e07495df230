//! Declaration file schema
//!
//! Defines the YAML form of a style declaration. Values are kept as declared;
//! validation happens when the declaration is resolved.

use super::defaults::default_dark_mode;
use crate::error::{StyleError, StyleResult};
use crate::provider::StyleDeclaration;
use crate::theme::{ThemeExtension, ThemeValue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root of a declaration file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeclarationFile {
    /// Escalate specificity of generated rules
    #[serde(default)]
    pub important: bool,

    /// Glob patterns of files scanned for class usage
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<String>,

    /// Class names kept regardless of usage
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub safelist: Vec<String>,

    /// `class` or `media`
    #[serde(default = "default_dark_mode")]
    pub dark_mode: String,

    /// Theme overrides and extensions
    #[serde(default)]
    pub theme: ThemeSection,

    /// Enabled variants per feature
    #[serde(default)]
    pub variants: VariantsSection,

    /// Plugin identifiers, in load order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<String>,

    /// Keys this version does not understand
    #[serde(flatten)]
    pub unknown: BTreeMap<String, serde_yaml::Value>,
}

/// `theme:` section
///
/// `extend` is kept as a YAML mapping so categories resolve in the order
/// they were written. Every other key replaces a base category outright.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ThemeSection {
    #[serde(default)]
    pub extend: serde_yaml::Mapping,

    #[serde(flatten)]
    pub overrides: BTreeMap<String, serde_yaml::Value>,
}

/// `variants:` section
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct VariantsSection {
    #[serde(default)]
    pub extend: BTreeMap<String, Vec<String>>,

    #[serde(flatten)]
    pub features: BTreeMap<String, Vec<String>>,
}

impl Default for DeclarationFile {
    fn default() -> Self {
        Self {
            important: false,
            content: Vec::new(),
            safelist: Vec::new(),
            dark_mode: default_dark_mode(),
            theme: ThemeSection::default(),
            variants: VariantsSection::default(),
            plugins: Vec::new(),
            unknown: BTreeMap::new(),
        }
    }
}

impl DeclarationFile {
    /// Convert the file form into a declaration
    ///
    /// Fails only when a theme category is not a usable value (e.g. `null`)
    /// or an `extend` key is not a string.
    pub fn into_declaration(self) -> StyleResult<StyleDeclaration> {
        let mut declaration = StyleDeclaration::new()
            .important(self.important)
            .content(self.content)
            .safelist(self.safelist)
            .dark_mode(self.dark_mode);

        for (category, value) in self.theme.overrides {
            let value = category_value(&category, value)?;
            declaration = declaration.override_category(category, ThemeExtension::from_value(value));
        }

        for (key, value) in self.theme.extend {
            let category = match key {
                serde_yaml::Value::String(s) => s,
                other => {
                    return Err(StyleError::Parse(format!(
                        "theme.extend keys must be strings, got {:?}",
                        other
                    )));
                }
            };
            let value = category_value(&category, value)?;
            declaration = declaration.extend(category, ThemeExtension::from_value(value));
        }

        for (feature, names) in self.variants.features {
            declaration = declaration.variants(feature, names);
        }
        for (feature, names) in self.variants.extend {
            declaration = declaration.extend_variants(feature, names);
        }

        declaration = declaration.plugins(self.plugins);
        declaration.unknown_keys = self.unknown.into_keys().collect();

        Ok(declaration)
    }
}

fn category_value(category: &str, value: serde_yaml::Value) -> StyleResult<ThemeValue> {
    ThemeValue::try_from(value)
        .map_err(|e| StyleError::Parse(format!("theme category '{}': {}", category, e)))
}
