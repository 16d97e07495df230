//! Deep merge of theme trees
//!
//! Maps merge key by key; any other pair of nodes is replaced by the
//! incoming value. Later layers therefore win on identical keys while
//! non-colliding keys are unioned.

use super::value::{ThemeMap, ThemeValue};

/// Merge `incoming` into `base` in place
pub fn deep_merge(base: &mut ThemeValue, incoming: ThemeValue) {
    match (base, incoming) {
        (ThemeValue::Map(base_map), ThemeValue::Map(incoming_map)) => {
            merge_maps(base_map, incoming_map);
        }
        (slot, incoming) => *slot = incoming,
    }
}

/// Merge every entry of `incoming` into `base`
pub fn merge_maps(base: &mut ThemeMap, incoming: ThemeMap) {
    for (key, value) in incoming {
        match base.get_mut(&key) {
            Some(existing) => deep_merge(existing, value),
            None => {
                base.insert(key, value);
            }
        }
    }
}

/// Merge a single category into a theme
pub fn merge_category(theme: &mut ThemeMap, category: &str, value: ThemeValue) {
    match theme.get_mut(category) {
        Some(existing) => deep_merge(existing, value),
        None => {
            theme.insert(category.to_string(), value);
        }
    }
}
