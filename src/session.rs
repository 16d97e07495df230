//! Build session
//!
//! Holds the configuration resolved at build start. Incremental rebuilds call
//! [`BuildSession::revalidate`], which resolves again and reports whether the
//! result differs. Nothing accumulates between calls apart from the last good
//! configuration.

use crate::error::StyleResult;
use crate::provider::{StyleConfig, StyleConfigProvider};

/// Outcome of a re-validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Revalidation {
    Unchanged,
    Changed,
}

/// Configuration state for one build process
pub struct BuildSession<P> {
    provider: P,
    current: StyleConfig,
}

impl<P: StyleConfigProvider> BuildSession<P> {
    /// Resolve the configuration once at build start
    pub fn start(provider: P) -> StyleResult<Self> {
        let current = provider.resolve()?;
        tracing::debug!("Build session started");
        Ok(Self { provider, current })
    }

    /// Configuration the build is currently using
    pub fn config(&self) -> &StyleConfig {
        &self.current
    }

    /// Resolve again and swap in the result if it differs
    ///
    /// On error the previous configuration stays in place.
    pub fn revalidate(&mut self) -> StyleResult<Revalidation> {
        let resolved = self.provider.resolve()?;
        if resolved == self.current {
            return Ok(Revalidation::Unchanged);
        }
        tracing::info!("Style configuration changed; generated CSS must be rebuilt");
        self.current = resolved;
        Ok(Revalidation::Changed)
    }

    /// Finish the session, handing out the final configuration
    pub fn into_config(self) -> StyleConfig {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StyleError;
    use crate::provider::{MockStyleConfigProvider, StyleDeclaration};

    fn resolved(dark_mode: &str) -> StyleConfig {
        StyleDeclaration::new()
            .content(["layouts/**/*.html"])
            .dark_mode(dark_mode)
            .resolve()
            .unwrap()
    }

    #[test]
    fn test_revalidate_unchanged() {
        let config = resolved("class");
        let mut provider = MockStyleConfigProvider::new();
        provider
            .expect_resolve()
            .times(3)
            .returning(move || Ok(config.clone()));

        let mut session = BuildSession::start(provider).unwrap();
        assert_eq!(session.revalidate().unwrap(), Revalidation::Unchanged);
        assert_eq!(session.revalidate().unwrap(), Revalidation::Unchanged);
    }

    #[test]
    fn test_revalidate_changed() {
        let first = resolved("class");
        let second = resolved("media");
        let mut calls = 0;
        let mut provider = MockStyleConfigProvider::new();
        provider.expect_resolve().times(2).returning(move || {
            calls += 1;
            if calls == 1 {
                Ok(first.clone())
            } else {
                Ok(second.clone())
            }
        });

        let mut session = BuildSession::start(provider).unwrap();
        assert_eq!(session.revalidate().unwrap(), Revalidation::Changed);
        assert_eq!(
            session.into_config().dark_mode,
            crate::config::DarkModeStrategy::Media
        );
    }

    #[test]
    fn test_failed_revalidation_keeps_previous() {
        let config = resolved("class");
        let mut calls = 0;
        let mut provider = MockStyleConfigProvider::new();
        provider.expect_resolve().times(2).returning(move || {
            calls += 1;
            if calls == 1 {
                Ok(config.clone())
            } else {
                Err(StyleError::validation("darkMode", "broken"))
            }
        });

        let mut session = BuildSession::start(provider).unwrap();
        assert!(session.revalidate().is_err());
        assert_eq!(
            session.config().dark_mode,
            crate::config::DarkModeStrategy::Class
        );
    }

    #[test]
    fn test_start_fails_on_invalid_declaration() {
        let declaration = StyleDeclaration::new().dark_mode("sometimes");
        assert!(BuildSession::start(declaration).is_err());
    }

    #[test]
    fn test_declaration_revalidates_unchanged() {
        let mut session = BuildSession::start(crate::site::declaration()).unwrap();
        assert_eq!(session.revalidate().unwrap(), Revalidation::Unchanged);
    }
}
