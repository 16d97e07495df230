//! Style configuration provider
//!
//! A [`StyleDeclaration`] holds values exactly as declared. Resolving it
//! validates every field, layers the theme over the built-in defaults and
//! produces an immutable [`StyleConfig`] for the generation engine.

use crate::config::content::{ContentPattern, parse_patterns};
use crate::config::dark_mode::DarkModeStrategy;
use crate::config::defaults;
use crate::error::{StyleError, StyleResult};
use crate::plugins::{PluginId, PluginRegistry, PluginValidator};
use crate::theme::{
    ThemeExtension, ThemeLookup, ThemeMap, ThemeValue, is_color_category, merge_category,
    validate_color_category,
};
use crate::variants::{VariantMap, register_variants};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write as _;
use std::path::Path;

/// Anything that can produce a resolved style configuration
#[cfg_attr(test, mockall::automock)]
pub trait StyleConfigProvider {
    /// Produce the resolved configuration
    ///
    /// Must be deterministic: repeated calls yield equal results.
    fn resolve(&self) -> StyleResult<StyleConfig>;
}

/// A style configuration as declared
#[derive(Debug, Clone)]
pub struct StyleDeclaration {
    pub important: bool,
    pub content: Vec<String>,
    pub safelist: Vec<String>,
    pub dark_mode: String,
    /// Categories replacing base categories outright
    pub theme_overrides: Vec<(String, ThemeExtension)>,
    /// Categories merged over the theme, in declaration order
    pub theme_extensions: Vec<(String, ThemeExtension)>,
    pub variants: BTreeMap<String, Vec<String>>,
    pub variants_extend: BTreeMap<String, Vec<String>>,
    pub plugins: Vec<String>,
    /// Top-level keys that were declared but are not understood
    pub unknown_keys: Vec<String>,
}

impl Default for StyleDeclaration {
    fn default() -> Self {
        Self {
            important: false,
            content: Vec::new(),
            safelist: Vec::new(),
            dark_mode: defaults::default_dark_mode(),
            theme_overrides: Vec::new(),
            theme_extensions: Vec::new(),
            variants: BTreeMap::new(),
            variants_extend: BTreeMap::new(),
            plugins: Vec::new(),
            unknown_keys: Vec::new(),
        }
    }
}

impl StyleDeclaration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn important(mut self, important: bool) -> Self {
        self.important = important;
        self
    }

    pub fn content<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.content.extend(patterns.into_iter().map(Into::into));
        self
    }

    pub fn safelist<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.safelist.extend(classes.into_iter().map(Into::into));
        self
    }

    pub fn dark_mode(mut self, strategy: impl Into<String>) -> Self {
        self.dark_mode = strategy.into();
        self
    }

    /// Replace a base category
    pub fn override_category(
        mut self,
        category: impl Into<String>,
        value: impl Into<ThemeExtension>,
    ) -> Self {
        self.theme_overrides.push((category.into(), value.into()));
        self
    }

    /// Merge a category over the theme
    pub fn extend(mut self, category: impl Into<String>, value: impl Into<ThemeExtension>) -> Self {
        self.theme_extensions.push((category.into(), value.into()));
        self
    }

    /// Merge a category computed from the theme resolved so far
    pub fn extend_with<F>(self, category: impl Into<String>, f: F) -> Self
    where
        F: Fn(&ThemeLookup<'_>) -> StyleResult<ThemeValue> + Send + Sync + 'static,
    {
        self.extend(category, ThemeExtension::deferred(f))
    }

    /// Enable variants for a feature
    pub fn variants<I, S>(mut self, feature: impl Into<String>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variants
            .entry(feature.into())
            .or_default()
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// Enable additional variants on top of the declared ones
    pub fn extend_variants<I, S>(mut self, feature: impl Into<String>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variants_extend
            .entry(feature.into())
            .or_default()
            .extend(names.into_iter().map(Into::into));
        self
    }

    pub fn plugin(mut self, id: impl Into<String>) -> Self {
        self.plugins.push(id.into());
        self
    }

    pub fn plugins<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.plugins.extend(ids.into_iter().map(Into::into));
        self
    }

    fn resolve_safelist(&self) -> StyleResult<BTreeSet<String>> {
        let mut safelist = BTreeSet::new();
        for (i, class) in self.safelist.iter().enumerate() {
            let class = class.trim();
            if class.is_empty() {
                return Err(StyleError::validation(
                    format!("safelist[{}]", i),
                    "Safelisted class name cannot be empty",
                ));
            }
            if class.chars().any(char::is_whitespace) {
                return Err(StyleError::validation(
                    format!("safelist[{}]", i),
                    format!("Safelisted class name '{}' contains whitespace", class),
                ));
            }
            safelist.insert(class.to_string());
        }
        Ok(safelist)
    }

    /// Layer overrides then extensions over the base theme
    ///
    /// Returns the merged theme and the evaluated extension values.
    fn resolve_theme(&self) -> StyleResult<(ThemeMap, ThemeMap)> {
        let mut theme = defaults::default_theme()?;

        for (category, extension) in &self.theme_overrides {
            let value = extension.evaluate(&ThemeLookup::new(&theme, category))?;
            tracing::debug!("Replacing theme category '{}'", category);
            theme.insert(category.clone(), value);
        }

        let mut extensions = ThemeMap::new();
        for (category, extension) in &self.theme_extensions {
            let value = extension.evaluate(&ThemeLookup::new(&theme, category))?;
            tracing::debug!(
                "Extending theme category '{}'{}",
                category,
                if extension.is_deferred() { " (deferred)" } else { "" }
            );
            merge_category(&mut extensions, category, value.clone());
            merge_category(&mut theme, category, value);
        }

        for (category, value) in &theme {
            if is_color_category(category) {
                validate_color_category(category, value)?;
            }
        }

        Ok((theme, extensions))
    }
}

impl StyleConfigProvider for StyleDeclaration {
    fn resolve(&self) -> StyleResult<StyleConfig> {
        let dark_mode: DarkModeStrategy = self.dark_mode.parse()?;
        let content_paths = parse_patterns(&self.content)?;
        if content_paths.is_empty() {
            tracing::warn!("No content patterns declared; every utility class will be pruned");
        }

        let safelist = self.resolve_safelist()?;
        let plugins = PluginValidator::validate(&self.plugins)?;

        let registry = PluginRegistry::builtin();
        for id in registry.unknown(&plugins) {
            tracing::warn!("Plugin '{}' is not bundled with the engine", id);
        }

        let (theme, theme_extensions) = self.resolve_theme()?;
        let variants = register_variants(
            &self.variants,
            &self.variants_extend,
            &plugins,
            &registry,
        );

        for key in &self.unknown_keys {
            tracing::warn!("Ignoring unknown configuration key '{}'", key);
        }

        tracing::debug!(
            "Resolved style configuration: {} content patterns, {} safelisted, {} plugins",
            content_paths.len(),
            safelist.len(),
            plugins.len()
        );

        Ok(StyleConfig {
            important: self.important,
            content_paths,
            safelist,
            dark_mode,
            theme_extensions,
            variants,
            plugins,
            theme,
        })
    }
}

/// A resolved, validated style configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleConfig {
    pub important: bool,
    pub content_paths: Vec<ContentPattern>,
    pub safelist: BTreeSet<String>,
    pub dark_mode: DarkModeStrategy,
    /// Evaluated extension values per category
    pub theme_extensions: ThemeMap,
    pub variants: VariantMap,
    pub plugins: Vec<PluginId>,
    /// Base theme with overrides and extensions applied
    pub theme: ThemeMap,
}

impl StyleConfig {
    /// Look up a token in the merged theme by dotted path
    pub fn token(&self, path: &str) -> StyleResult<ThemeValue> {
        ThemeLookup::new(&self.theme, "theme").get(path)
    }

    pub fn is_safelisted(&self, class: &str) -> bool {
        self.safelist.contains(class)
    }

    /// Classes the engine keeps given the classes found while scanning
    pub fn retained_classes<'a, I>(&self, used: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        used.into_iter()
            .map(str::to_string)
            .chain(self.safelist.iter().cloned())
            .collect()
    }

    /// Whether `class` survives pruning given the classes found while scanning
    pub fn retains(&self, class: &str, used: &BTreeSet<String>) -> bool {
        self.is_safelisted(class) || used.contains(class)
    }

    /// Whether any content pattern covers `path`
    pub fn scans(&self, path: &Path) -> bool {
        self.content_paths.iter().any(|p| p.matches_path(path))
    }

    pub fn variant_enabled(&self, feature: &str, variant: &str) -> bool {
        self.variants
            .get(feature)
            .is_some_and(|names| names.contains(variant))
    }

    /// A typography modifier block such as `DEFAULT` or `invert`
    pub fn typography_modifier(&self, modifier: &str) -> Option<&ThemeValue> {
        self.theme.get("typography")?.child(modifier)
    }

    /// Short human-readable overview
    pub fn summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "important: {}", self.important);
        let _ = writeln!(out, "darkMode: {}", self.dark_mode);
        let _ = writeln!(out, "content: {} patterns", self.content_paths.len());
        let safelist: Vec<&str> = self.safelist.iter().map(String::as_str).collect();
        let _ = writeln!(out, "safelist: {}", safelist.join(", "));
        let extensions: Vec<&str> = self.theme_extensions.keys().map(String::as_str).collect();
        let _ = writeln!(out, "extends: {}", extensions.join(", "));
        for (feature, names) in &self.variants {
            let names: Vec<&str> = names.iter().map(String::as_str).collect();
            let _ = writeln!(out, "variants.{}: {}", feature, names.join(", "));
        }
        let plugins: Vec<&str> = self.plugins.iter().map(PluginId::as_str).collect();
        let _ = write!(out, "plugins: {}", plugins.join(", "));
        out
    }
}
