//! INI file handling for logging settings.
//!
//! Settings structs live in [`super::settings`], constants in
//! [`super::defaults`] and INI parsing in [`super::parser`].

use ini::Ini;
use std::path::Path;
use thiserror::Error;

use super::defaults::*;
use super::settings::LoggingSettings;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read or parse the config file
    #[error("Failed to read config file: {0}")]
    Read(#[from] ini::Error),

    /// Failed to write the config file
    #[error("Failed to write config file: {0}")]
    Write(#[source] std::io::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },
}

impl LoggingSettings {
    /// Load settings from a specific path.
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        super::parser::parse_ini(&ini)
    }

    /// Save settings to a specific path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Write)?;
        }
        self.to_ini().write_to_file(path).map_err(ConfigError::Write)
    }

    fn to_ini(&self) -> Ini {
        let mut ini = Ini::new();
        ini.with_section(Some(PROVIDER_SECTION))
            .set(PROVIDER_TYPE_KEY, self.provider.as_str());
        ini.with_section(Some(FILTER_SECTION))
            .set(FILTER_DEFAULT_KEY, self.filter.default_threshold().to_string());
        let origins: Vec<String> = self
            .filter
            .overrides()
            .map(|(origin, threshold)| format!("{}={}", origin, threshold))
            .collect();
        if !origins.is_empty() {
            ini.with_section(Some(FILTER_SECTION))
                .set(FILTER_ORIGINS_KEY, origins.join(","));
        }
        ini
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::Threshold;
    use crate::severity::Severity;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let settings = LoggingSettings::load_from(&temp_dir.path().join("absent.ini")).unwrap();
        assert_eq!(settings, LoggingSettings::default());
    }

    #[test]
    fn test_load_full_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("logging.ini");

        std::fs::write(
            &config_path,
            r#"
[provider]
type = noop

[filter]
default = warning
origins = billing::ledger=debug, chatty=off
"#,
        )
        .unwrap();

        let settings = LoggingSettings::load_from(&config_path).unwrap();
        assert_eq!(settings.provider, "noop");
        assert_eq!(
            settings.filter.default_threshold(),
            Threshold::AtLeast(Severity::Warning)
        );
        assert!(settings.filter.is_enabled("billing::ledger::Entry", Severity::Debug));
        assert!(!settings.filter.is_enabled("chatty", Severity::Security));
    }

    #[test]
    fn test_unreadable_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("logging.ini");
        std::fs::write(&config_path, "[provider").unwrap();

        let err = LoggingSettings::load_from(&config_path).unwrap_err();
        assert!(matches!(err, ConfigError::Read(_)));
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("logging.ini");
        let settings = LoggingSettings {
            provider: "noop".to_string(),
            filter: "failure,audit=security,billing=debug".parse().unwrap(),
        };

        settings.save_to(&config_path).unwrap();
        assert_eq!(LoggingSettings::load_from(&config_path).unwrap(), settings);
    }
}
