//! Content glob patterns
//!
//! Patterns are compiled when the configuration is resolved so that a typo
//! fails the build instead of silently scanning zero files. Brace groups such
//! as `*.{html,md}` are expanded into one compiled glob per alternative.

use crate::error::{StyleError, StyleResult};
use glob::{MatchOptions, Pattern};
use serde::{Serialize, Serializer};
use std::path::Path;

/// A validated content pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentPattern {
    raw: String,
    patterns: Vec<Pattern>,
}

impl ContentPattern {
    /// Compile a pattern as declared
    ///
    /// A leading `./` is accepted and ignored for matching.
    pub fn parse(raw: &str) -> StyleResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(StyleError::validation(
                "content",
                "Content pattern cannot be empty",
            ));
        }

        let normalized = trimmed.strip_prefix("./").unwrap_or(trimmed);
        let alternatives = expand_braces(normalized).map_err(|msg| {
            StyleError::validation(
                "content",
                format!("Invalid glob pattern '{}': {}", raw, msg),
            )
        })?;

        let patterns = alternatives
            .iter()
            .map(|alternative| {
                Pattern::new(alternative).map_err(|e| {
                    StyleError::validation(
                        "content",
                        format!(
                            "Invalid glob pattern '{}' at position {} of '{}': {}",
                            raw, e.pos, alternative, e.msg
                        ),
                    )
                })
            })
            .collect::<StyleResult<Vec<_>>>()?;

        Ok(Self {
            raw: raw.to_string(),
            patterns,
        })
    }

    /// The pattern exactly as declared
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Check whether a path relative to the site root is covered
    pub fn matches_path(&self, path: &Path) -> bool {
        let options = MatchOptions {
            case_sensitive: true,
            require_literal_separator: true,
            require_literal_leading_dot: false,
        };
        let path = path.strip_prefix("./").unwrap_or(path);
        self.patterns
            .iter()
            .any(|pattern| pattern.matches_path_with(path, options))
    }
}

/// Expand `{a,b}` groups, including nested ones, into plain glob patterns
///
/// Braces inside `[...]` character classes are literal.
fn expand_braces(pattern: &str) -> Result<Vec<String>, String> {
    let mut depth = 0usize;
    let mut open_at = 0;
    let mut in_class = false;
    let mut commas = Vec::new();

    for (i, c) in pattern.char_indices() {
        if in_class {
            if c == ']' {
                in_class = false;
            }
            continue;
        }
        match c {
            '[' => in_class = true,
            '{' => {
                if depth == 0 {
                    open_at = i;
                }
                depth += 1;
            }
            ',' if depth == 1 => commas.push(i),
            '}' => {
                if depth == 0 {
                    return Err(format!("unmatched '}}' at position {}", i));
                }
                depth -= 1;
                if depth == 0 {
                    let prefix = &pattern[..open_at];
                    let suffix = &pattern[i + 1..];
                    let mut start = open_at + 1;
                    let mut expanded = Vec::new();
                    for end in commas.iter().copied().chain(std::iter::once(i)) {
                        let candidate = format!("{}{}{}", prefix, &pattern[start..end], suffix);
                        expanded.extend(expand_braces(&candidate)?);
                        start = end + 1;
                    }
                    return Ok(expanded);
                }
            }
            _ => {}
        }
    }

    if depth > 0 {
        return Err(format!("unterminated '{{' at position {}", open_at));
    }
    Ok(vec![pattern.to_string()])
}

impl Serialize for ContentPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

/// Compile every declared pattern, reporting the first failure with its index
pub fn parse_patterns(raw: &[String]) -> StyleResult<Vec<ContentPattern>> {
    raw.iter()
        .enumerate()
        .map(|(i, pattern)| {
            ContentPattern::parse(pattern).map_err(|e| match e {
                StyleError::ConfigValidation { message, .. } => {
                    StyleError::validation(format!("content[{}]", i), message)
                }
                other => other,
            })
        })
        .collect()
}
