//! INI parsing logic for converting `Ini` → `LoggingSettings`.
//!
//! This is the single place where INI key names are mapped to struct fields.

use ini::Ini;

use super::defaults::*;
use super::file::ConfigError;
use super::settings::LoggingSettings;
use crate::backend::Threshold;

/// Parse an `Ini` object into `LoggingSettings`.
///
/// Starts from `LoggingSettings::default()` and overlays any values found in
/// the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<LoggingSettings, ConfigError> {
    let mut settings = LoggingSettings::default();

    // [provider] section
    if let Some(section) = ini.section(Some(PROVIDER_SECTION)) {
        if let Some(v) = section.get(PROVIDER_TYPE_KEY) {
            let v = v.trim();
            if !v.is_empty() {
                settings.provider = v.to_string();
            }
        }
    }

    // [filter] section
    if let Some(section) = ini.section(Some(FILTER_SECTION)) {
        if let Some(v) = section.get(FILTER_DEFAULT_KEY) {
            let threshold = parse_threshold(FILTER_DEFAULT_KEY, v)?;
            settings.filter.set_default(threshold);
        }
        if let Some(v) = section.get(FILTER_ORIGINS_KEY) {
            for pair in v.split(',').map(str::trim).filter(|p| !p.is_empty()) {
                let (origin, threshold) = pair
                    .split_once('=')
                    .map(|(o, t)| (o.trim(), t))
                    .filter(|(o, _)| !o.is_empty())
                    .ok_or_else(|| invalid(FILTER_ORIGINS_KEY, pair, "expected prefix=threshold"))?;
                let threshold = parse_threshold(FILTER_ORIGINS_KEY, threshold)?;
                settings.filter.set_origin(origin, threshold);
            }
        }
    }

    Ok(settings)
}

fn parse_threshold(key: &str, value: &str) -> Result<Threshold, ConfigError> {
    value
        .parse::<Threshold>()
        .map_err(|e| invalid(key, value, &e.reason))
}

fn invalid(key: &str, value: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        section: FILTER_SECTION.to_string(),
        key: key.to_string(),
        value: value.trim().to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::severity::Severity;

    fn parse(content: &str) -> Result<LoggingSettings, ConfigError> {
        let ini = Ini::load_from_str(content).unwrap();
        parse_ini(&ini)
    }

    #[test]
    fn test_empty_ini_is_default() {
        assert_eq!(parse("").unwrap(), LoggingSettings::default());
    }

    #[test]
    fn test_partial_config() {
        let settings = parse("[filter]\ndefault = failure\n").unwrap();
        assert_eq!(settings.provider, DEFAULT_PROVIDER);
        assert_eq!(
            settings.filter.default_threshold(),
            Threshold::AtLeast(Severity::Failure)
        );
        assert_eq!(settings.filter.override_count(), 0);
    }

    #[test]
    fn test_blank_provider_keeps_default() {
        let settings = parse("[provider]\ntype =\n").unwrap();
        assert_eq!(settings.provider, DEFAULT_PROVIDER);
    }

    #[test]
    fn test_provider_kept_as_written() {
        // Registered identifiers are only known to the registry
        let settings = parse("[provider]\ntype =  Syslog \n").unwrap();
        assert_eq!(settings.provider, "Syslog");
    }

    #[test]
    fn test_invalid_default_threshold() {
        let err = parse("[filter]\ndefault = loud\n").unwrap_err();
        assert!(err.to_string().contains("filter.default"));
        assert!(err.to_string().contains("loud"));
    }

    #[test]
    fn test_invalid_origin_pair() {
        let err = parse("[filter]\norigins = billing=debug, audit\n").unwrap_err();
        match err {
            ConfigError::InvalidValue { key, value, .. } => {
                assert_eq!(key, "origins");
                assert_eq!(value, "audit");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(parse("[filter]\norigins = =debug\n").is_err());
        assert!(parse("[filter]\norigins = billing=sometimes\n").is_err());
    }

    #[test]
    fn test_origins_accept_security_and_off() {
        let settings = parse("[filter]\norigins = audit=security, chatty=none\n").unwrap();
        assert_eq!(
            settings.filter.threshold_for("audit::Trail"),
            Threshold::AtLeast(Severity::Security)
        );
        assert_eq!(settings.filter.threshold_for("chatty"), Threshold::Off);
    }
}
