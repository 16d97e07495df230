//! Theme extensions
//!
//! An extension is either a static value or a deferred computation over the
//! theme resolved so far. Deferred extensions must be pure: they may run any
//! number of times and must only read through the [`ThemeLookup`] they get.
//!
//! A string that is exactly one `theme(path)` reference takes the referenced
//! value as is, maps included. References embedded in a longer string, such
//! as `1px solid theme(colors.gray.200)`, are replaced by their text form.

use super::lookup::ThemeLookup;
use super::value::ThemeValue;
use crate::error::StyleResult;
use std::fmt;
use std::ops::Range;
use std::sync::Arc;

/// Function producing a category value from the theme resolved so far
pub type DeferredFn = Arc<dyn Fn(&ThemeLookup<'_>) -> StyleResult<ThemeValue> + Send + Sync>;

/// A declared value for one theme category
#[derive(Clone)]
pub enum ThemeExtension {
    Static(ThemeValue),
    Deferred(DeferredFn),
}

impl ThemeExtension {
    /// Wrap a closure as a deferred extension
    pub fn deferred<F>(f: F) -> Self
    where
        F: Fn(&ThemeLookup<'_>) -> StyleResult<ThemeValue> + Send + Sync + 'static,
    {
        ThemeExtension::Deferred(Arc::new(f))
    }

    /// Turn a declared value into an extension
    ///
    /// Values containing `theme(path)` reference strings become deferred
    /// extensions that substitute each reference at resolve time.
    pub fn from_value(value: ThemeValue) -> Self {
        if contains_reference(&value) {
            ThemeExtension::deferred(move |theme| substitute_references(&value, theme))
        } else {
            ThemeExtension::Static(value)
        }
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, ThemeExtension::Deferred(_))
    }

    /// Produce the value of this extension against `theme`
    pub fn evaluate(&self, theme: &ThemeLookup<'_>) -> StyleResult<ThemeValue> {
        match self {
            ThemeExtension::Static(value) => Ok(value.clone()),
            ThemeExtension::Deferred(f) => f(theme),
        }
    }
}

impl fmt::Debug for ThemeExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeExtension::Static(value) => f.debug_tuple("Static").field(value).finish(),
            ThemeExtension::Deferred(_) => f.write_str("Deferred(<fn>)"),
        }
    }
}

impl From<ThemeValue> for ThemeExtension {
    fn from(value: ThemeValue) -> Self {
        ThemeExtension::from_value(value)
    }
}

/// A parsed `theme(path)` or `theme(path, fallback)` reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenReference {
    pub path: String,
    pub fallback: Option<String>,
}

/// Parse a reference string, returning `None` for ordinary values
pub fn parse_reference(raw: &str) -> Option<TokenReference> {
    let inner = raw.trim().strip_prefix("theme(")?.strip_suffix(')')?;
    if !balanced(inner) {
        return None;
    }
    let (path, fallback) = match inner.split_once(',') {
        Some((path, fallback)) => (path, Some(unquote(fallback).to_string())),
        None => (inner, None),
    };
    let path = unquote(path);
    if path.is_empty() {
        return None;
    }
    Some(TokenReference {
        path: path.to_string(),
        fallback,
    })
}

fn balanced(s: &str) -> bool {
    let mut depth = 0i32;
    for c in s.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}

/// Locate every `theme(...)` reference inside a string
fn embedded_references(raw: &str) -> Vec<(Range<usize>, TokenReference)> {
    const OPEN: &str = "theme(";
    let mut found = Vec::new();
    let mut from = 0;

    while let Some(offset) = raw[from..].find(OPEN) {
        let start = from + offset;
        from = start + OPEN.len();
        let part_of_word = raw[..start]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_alphanumeric() || c == '-' || c == '_');
        if part_of_word {
            continue;
        }

        let mut depth = 1;
        let mut end = None;
        for (i, c) in raw[from..].char_indices() {
            match c {
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        end = Some(from + i + 1);
                        break;
                    }
                }
                _ => {}
            }
        }
        let Some(end) = end else { break };
        if let Some(reference) = parse_reference(&raw[start..end]) {
            found.push((start..end, reference));
        }
        from = end;
    }

    found
}

fn resolve_reference(
    reference: TokenReference,
    theme: &ThemeLookup<'_>,
) -> StyleResult<ThemeValue> {
    match reference.fallback {
        Some(fallback) => Ok(theme.get_or(&reference.path, fallback)),
        None => theme.get(&reference.path),
    }
}

fn unquote(s: &str) -> &str {
    s.trim().trim_matches(|c| c == '\'' || c == '"' || c == '`')
}

fn contains_reference(value: &ThemeValue) -> bool {
    match value {
        ThemeValue::String(s) => !embedded_references(s).is_empty(),
        ThemeValue::List(items) => items.iter().any(contains_reference),
        ThemeValue::Map(map) => map.values().any(contains_reference),
        _ => false,
    }
}

fn substitute_references(value: &ThemeValue, theme: &ThemeLookup<'_>) -> StyleResult<ThemeValue> {
    match value {
        ThemeValue::String(s) => {
            if let Some(reference) = parse_reference(s) {
                return resolve_reference(reference, theme);
            }
            let references = embedded_references(s);
            if references.is_empty() {
                return Ok(value.clone());
            }
            let mut out = String::with_capacity(s.len());
            let mut last = 0;
            for (range, reference) in references {
                out.push_str(&s[last..range.start]);
                out.push_str(&resolve_reference(reference, theme)?.to_string());
                last = range.end;
            }
            out.push_str(&s[last..]);
            Ok(ThemeValue::String(out))
        }
        ThemeValue::List(items) => Ok(ThemeValue::List(
            items
                .iter()
                .map(|item| substitute_references(item, theme))
                .collect::<StyleResult<_>>()?,
        )),
        ThemeValue::Map(map) => Ok(ThemeValue::Map(
            map.iter()
                .map(|(k, v)| Ok((k.clone(), substitute_references(v, theme)?)))
                .collect::<StyleResult<_>>()?,
        )),
        other => Ok(other.clone()),
    }
}
