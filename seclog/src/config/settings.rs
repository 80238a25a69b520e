//! Logging settings and environment overrides.

use super::defaults::*;
use super::file::ConfigError;
use crate::backend::{SeverityFilter, Threshold};

/// Resolved logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    /// Identifier the provider registry resolves
    pub provider: String,
    /// Thresholds for the built-in tracing provider
    pub filter: SeverityFilter,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            provider: DEFAULT_PROVIDER.to_string(),
            filter: SeverityFilter::new(DEFAULT_THRESHOLD),
        }
    }
}

impl LoggingSettings {
    /// Builds settings from defaults plus values returned by `lookup`.
    ///
    /// `lookup` is queried for [`PROVIDER_ENV_VAR`] and [`FILTER_ENV_VAR`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::default().with_overrides_from(lookup)
    }

    /// Builds settings from defaults plus the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Applies overrides returned by `lookup` on top of these settings.
    ///
    /// The provider value is trimmed and otherwise kept as written, since
    /// identifiers are matched exactly; a blank value is ignored. A filter
    /// value replaces the whole filter, so its directives start again from
    /// [`DEFAULT_THRESHOLD`].
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(provider) = lookup(PROVIDER_ENV_VAR) {
            let provider = provider.trim();
            if !provider.is_empty() {
                tracing::debug!(provider, "Provider overridden from environment");
                self.provider = provider.to_string();
            }
        }

        if let Some(directives) = lookup(FILTER_ENV_VAR) {
            self.filter = directives
                .parse::<SeverityFilter>()
                .map_err(|e| ConfigError::InvalidValue {
                    section: "env".to_string(),
                    key: FILTER_ENV_VAR.to_string(),
                    value: directives.clone(),
                    reason: e.reason,
                })?;
            tracing::debug!(filter = %self.filter, "Filter overridden from environment");
        }

        Ok(self)
    }

    /// Effective threshold for origins without an override.
    pub fn default_threshold(&self) -> Threshold {
        self.filter.default_threshold()
    }
}
