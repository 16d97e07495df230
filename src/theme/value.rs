//! Theme value tree
//!
//! Theme tokens are plain data: strings, numbers, boolean switches (used by
//! typography rules such as `"code::before": false`), lists and nested maps.
//! Map keys are always strings; unquoted YAML scale keys such as `500:` are
//! read as their textual form.

use crate::error::{StyleError, StyleResult};
use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Ordered map of token names to values
pub type ThemeMap = BTreeMap<String, ThemeValue>;

/// A single node in a theme tree
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ThemeValue {
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    List(Vec<ThemeValue>),
    Map(ThemeMap),
}

impl ThemeValue {
    /// Create an empty map node
    pub fn empty_map() -> Self {
        ThemeValue::Map(ThemeMap::new())
    }

    /// Build a map node from key/value pairs
    pub fn map<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<ThemeValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        ThemeValue::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ThemeValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&ThemeMap> {
        match self {
            ThemeValue::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_map_mut(&mut self) -> Option<&mut ThemeMap> {
        match self {
            ThemeValue::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn is_map(&self) -> bool {
        matches!(self, ThemeValue::Map(_))
    }

    /// Get a direct child by key (maps) or index (lists)
    pub fn child(&self, segment: &str) -> Option<&ThemeValue> {
        match self {
            ThemeValue::Map(m) => m.get(segment),
            ThemeValue::List(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        }
    }

    /// Visit every leaf with its dotted path relative to this node
    pub fn for_each_leaf<F>(&self, prefix: &str, f: &mut F)
    where
        F: FnMut(&str, &ThemeValue),
    {
        match self {
            ThemeValue::Map(m) => {
                for (key, value) in m {
                    let path = join_path(prefix, key);
                    value.for_each_leaf(&path, f);
                }
            }
            ThemeValue::List(items) => {
                for (i, value) in items.iter().enumerate() {
                    let path = join_path(prefix, &i.to_string());
                    value.for_each_leaf(&path, f);
                }
            }
            leaf => f(prefix, leaf),
        }
    }
}

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

impl<'de> Deserialize<'de> for ThemeValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ThemeValueVisitor)
    }
}

struct ThemeValueVisitor;

impl<'de> Visitor<'de> for ThemeValueVisitor {
    type Value = ThemeValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a theme value (string, number, boolean, list or map)")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<ThemeValue, E> {
        Ok(ThemeValue::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<ThemeValue, E> {
        Ok(ThemeValue::Number(v.into()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<ThemeValue, E> {
        Ok(ThemeValue::Number(v.into()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<ThemeValue, E> {
        serde_json::Number::from_f64(v)
            .map(ThemeValue::Number)
            .ok_or_else(|| E::custom(format!("{} is not a finite number", v)))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<ThemeValue, E> {
        Ok(ThemeValue::String(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<ThemeValue, E> {
        Ok(ThemeValue::String(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<ThemeValue, E> {
        Err(E::custom("null is not a valid theme value"))
    }

    fn visit_none<E: de::Error>(self) -> Result<ThemeValue, E> {
        self.visit_unit()
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<ThemeValue, A::Error> {
        let mut items = Vec::new();
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(ThemeValue::List(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<ThemeValue, A::Error> {
        let mut entries = ThemeMap::new();
        while let Some((ThemeKey(key), value)) = map.next_entry::<ThemeKey, ThemeValue>()? {
            entries.insert(key, value);
        }
        Ok(ThemeValue::Map(entries))
    }
}

/// Map key accepting any scalar, stored as text
struct ThemeKey(String);

impl<'de> Deserialize<'de> for ThemeKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct KeyVisitor;

        impl Visitor<'_> for KeyVisitor {
            type Value = ThemeKey;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string, number or boolean key")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<ThemeKey, E> {
                Ok(ThemeKey(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<ThemeKey, E> {
                Ok(ThemeKey(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<ThemeKey, E> {
                Ok(ThemeKey(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<ThemeKey, E> {
                Ok(ThemeKey(v.to_string()))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<ThemeKey, E> {
                Ok(ThemeKey(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<ThemeKey, E> {
                Ok(ThemeKey(v))
            }
        }

        deserializer.deserialize_any(KeyVisitor)
    }
}

impl fmt::Display for ThemeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeValue::Bool(b) => write!(f, "{}", b),
            ThemeValue::Number(n) => write!(f, "{}", n),
            ThemeValue::String(s) => write!(f, "{}", s),
            // Structured values print as compact JSON
            other => match serde_json::to_string(other) {
                Ok(json) => write!(f, "{}", json),
                Err(_) => Err(fmt::Error),
            },
        }
    }
}

impl From<&str> for ThemeValue {
    fn from(value: &str) -> Self {
        ThemeValue::String(value.to_string())
    }
}

impl From<String> for ThemeValue {
    fn from(value: String) -> Self {
        ThemeValue::String(value)
    }
}

impl From<bool> for ThemeValue {
    fn from(value: bool) -> Self {
        ThemeValue::Bool(value)
    }
}

impl From<ThemeMap> for ThemeValue {
    fn from(value: ThemeMap) -> Self {
        ThemeValue::Map(value)
    }
}

impl TryFrom<serde_json::Value> for ThemeValue {
    type Error = StyleError;

    fn try_from(value: serde_json::Value) -> StyleResult<Self> {
        use serde_json::Value;
        Ok(match value {
            Value::Null => {
                return Err(StyleError::Parse(
                    "null is not a valid theme value".to_string(),
                ));
            }
            Value::Bool(b) => ThemeValue::Bool(b),
            Value::Number(n) => ThemeValue::Number(n),
            Value::String(s) => ThemeValue::String(s),
            Value::Array(items) => ThemeValue::List(
                items
                    .into_iter()
                    .map(ThemeValue::try_from)
                    .collect::<StyleResult<Vec<_>>>()?,
            ),
            Value::Object(entries) => ThemeValue::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| Ok((k, ThemeValue::try_from(v)?)))
                    .collect::<StyleResult<ThemeMap>>()?,
            ),
        })
    }
}

impl TryFrom<serde_yaml::Value> for ThemeValue {
    type Error = StyleError;

    fn try_from(value: serde_yaml::Value) -> StyleResult<Self> {
        serde_yaml::from_value(value).map_err(|e| StyleError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_object() {
        let value = ThemeValue::try_from(json!({
            "a": { "color": "#123458" },
            "code::before": false,
            "lineHeight": 1.5,
        }))
        .unwrap();

        let map = value.as_map().unwrap();
        assert_eq!(map.len(), 3);
        assert_eq!(map["code::before"], ThemeValue::Bool(false));
        assert_eq!(
            value.child("a").and_then(|a| a.child("color")),
            Some(&ThemeValue::from("#123458"))
        );
    }

    #[test]
    fn test_null_rejected() {
        let result = ThemeValue::try_from(json!({ "color": null }));
        assert!(matches!(result, Err(StyleError::Parse(_))));
    }

    #[test]
    fn test_yaml_untagged_deserialization() {
        let yaml = r#"
fontWeight: "600"
enabled: false
sans: [ui-sans-serif, system-ui]
nested:
  deep: value
"#;
        let value: ThemeValue = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(value.child("fontWeight"), Some(&ThemeValue::from("600")));
        assert_eq!(value.child("enabled"), Some(&ThemeValue::Bool(false)));
        assert_eq!(
            value.child("sans").and_then(|s| s.child("1")),
            Some(&ThemeValue::from("system-ui"))
        );
    }

    #[test]
    fn test_yaml_numeric_keys_become_strings() {
        let yaml = r##"
brand:
  50: "#f0f4f8"
  500: "#123458"
flags:
  true: on
"##;
        let value: ThemeValue = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            value.child("brand").and_then(|b| b.child("500")),
            Some(&ThemeValue::from("#123458"))
        );
        assert_eq!(
            value.child("brand").and_then(|b| b.child("50")),
            Some(&ThemeValue::from("#f0f4f8"))
        );
        assert!(value.child("flags").and_then(|f| f.child("true")).is_some());
    }

    #[test]
    fn test_yaml_value_with_numeric_keys_converts() {
        let raw: serde_yaml::Value =
            serde_yaml::from_str("gray:\n  200: \"#e5e7eb\"\n").unwrap();
        let value = ThemeValue::try_from(raw).unwrap();
        assert_eq!(
            value.child("gray").and_then(|g| g.child("200")),
            Some(&ThemeValue::from("#e5e7eb"))
        );
    }

    #[test]
    fn test_yaml_null_rejected() {
        let result = serde_yaml::from_str::<ThemeValue>("color: ~\n");
        assert!(result.unwrap_err().to_string().contains("null"));
    }

    #[test]
    fn test_for_each_leaf_paths() {
        let value = ThemeValue::map([
            ("gray", ThemeValue::map([("200", "#e5e7eb"), ("800", "#1f2937")])),
            ("white", ThemeValue::from("#fff")),
        ]);

        let mut paths = Vec::new();
        value.for_each_leaf("colors", &mut |path, _| paths.push(path.to_string()));
        assert_eq!(
            paths,
            vec!["colors.gray.200", "colors.gray.800", "colors.white"]
        );
    }

    #[test]
    fn test_display_scalar_and_map() {
        assert_eq!(ThemeValue::from("#fff").to_string(), "#fff");
        assert_eq!(ThemeValue::Bool(false).to_string(), "false");
        let map = ThemeValue::map([("a", "b")]);
        assert_eq!(map.to_string(), r#"{"a":"b"}"#);
    }
}
