//! Error taxonomy for style configuration resolution
//!
//! Every error here is fatal to a build: a malformed style configuration
//! cannot produce partial output.

/// Style configuration errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StyleError {
    #[error("Invalid configuration for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Unresolved theme token '{path}' while resolving '{category}'")]
    UnresolvedToken { category: String, path: String },

    #[error("Failed to parse style declaration: {0}")]
    Parse(String),
}

impl StyleError {
    /// Shorthand for a validation error on a named field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ConfigValidation { .. })
    }

    pub fn is_unresolved_token(&self) -> bool {
        matches!(self, Self::UnresolvedToken { .. })
    }
}

/// Result type for style configuration operations
pub type StyleResult<T> = Result<T, StyleError>;
