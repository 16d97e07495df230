//! Variant registration
//!
//! Each feature maps to the set of variant blocks the engine should emit
//! selectors for. Features the engine would not recognize are dropped with a
//! warning; the engine validates feature names on its own.

use crate::plugins::{PluginId, PluginRegistry};
use std::collections::{BTreeMap, BTreeSet};

/// Enabled variants per feature
pub type VariantMap = BTreeMap<String, BTreeSet<String>>;

/// Core features that accept variants without any plugin
pub const CORE_FEATURES: &[&str] = &[
    "accentColor",
    "backgroundColor",
    "backgroundOpacity",
    "borderColor",
    "borderRadius",
    "boxShadow",
    "display",
    "divideColor",
    "fill",
    "fontFamily",
    "fontSize",
    "fontWeight",
    "gradientColorStops",
    "letterSpacing",
    "opacity",
    "outlineColor",
    "placeholderColor",
    "ringColor",
    "stroke",
    "textColor",
    "textDecoration",
    "textDecorationColor",
    "textOpacity",
    "visibility",
];

/// Build the resolved variant map from declared feature variants
///
/// `extend` entries are unioned into the base entries before filtering.
pub fn register_variants(
    declared: &BTreeMap<String, Vec<String>>,
    extend: &BTreeMap<String, Vec<String>>,
    plugins: &[PluginId],
    registry: &PluginRegistry,
) -> VariantMap {
    let plugin_features = registry.features_for(plugins);

    let mut variants = VariantMap::new();
    for (feature, names) in merge_features(declared, extend) {
        let known = CORE_FEATURES.contains(&feature) || plugin_features.contains(feature);
        if !known {
            tracing::warn!(
                "Ignoring variants for unknown feature '{}' (no core feature or loaded plugin provides it)",
                feature
            );
            continue;
        }

        let entry = variants.entry(feature.to_string()).or_default();
        for name in names {
            let name = name.trim();
            if name.is_empty() {
                tracing::warn!("Ignoring empty variant name for feature '{}'", feature);
                continue;
            }
            entry.insert(name.to_string());
        }
    }

    variants
}

/// Union declared and extended variant names per feature, one entry per feature
fn merge_features<'a>(
    declared: &'a BTreeMap<String, Vec<String>>,
    extend: &'a BTreeMap<String, Vec<String>>,
) -> BTreeMap<&'a str, Vec<&'a str>> {
    let mut merged: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for (feature, names) in declared.iter().chain(extend.iter()) {
        merged
            .entry(feature.as_str())
            .or_default()
            .extend(names.iter().map(String::as_str));
    }
    merged
}
