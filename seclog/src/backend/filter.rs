//! Per-origin severity thresholds.
//!
//! A [`SeverityFilter`] holds a default [`Threshold`] and optional overrides
//! keyed by origin prefix. Directives use the familiar `RUST_LOG` shape:
//!
//! ```text
//! warning,billing::ledger=debug,billing::ledger::audit=security,chatty=off
//! ```
//!
//! A prefix matches an origin when it equals the origin or is followed in the
//! origin by `::`. The longest matching prefix wins.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::severity::Severity;

/// Minimum severity a backend emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Threshold {
    /// Nothing is emitted
    Off,
    /// Severities ranked at or above the given one are emitted
    AtLeast(Severity),
}

impl Threshold {
    /// Whether `severity` passes this threshold.
    pub fn admits(self, severity: Severity) -> bool {
        match self {
            Threshold::Off => false,
            Threshold::AtLeast(threshold) => severity.is_at_least(threshold),
        }
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Threshold::AtLeast(Severity::Message)
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Threshold::Off => f.write_str("off"),
            Threshold::AtLeast(severity) => f.write_str(&severity.name().to_lowercase()),
        }
    }
}

/// Errors produced while parsing filter directives.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid filter directive '{directive}': {reason}")]
pub struct ParseFilterError {
    pub directive: String,
    pub reason: String,
}

impl FromStr for Threshold {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("off") || s.eq_ignore_ascii_case("none") {
            return Ok(Threshold::Off);
        }
        s.parse::<Severity>()
            .map(Threshold::AtLeast)
            .map_err(|e| ParseFilterError {
                directive: s.to_string(),
                reason: e.to_string(),
            })
    }
}

/// Default threshold plus per-origin overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeverityFilter {
    default: Threshold,
    overrides: Vec<(String, Threshold)>,
}

impl SeverityFilter {
    /// Creates a filter with no overrides.
    pub fn new(default: Threshold) -> Self {
        Self {
            default,
            overrides: Vec::new(),
        }
    }

    /// Creates a filter that admits `severity` and above everywhere.
    pub fn at_least(severity: Severity) -> Self {
        Self::new(Threshold::AtLeast(severity))
    }

    /// Sets the threshold for an origin prefix, replacing an earlier one.
    pub fn with_origin(mut self, prefix: impl Into<String>, threshold: Threshold) -> Self {
        self.set_origin(prefix, threshold);
        self
    }

    /// Sets the threshold for an origin prefix in place.
    pub fn set_origin(&mut self, prefix: impl Into<String>, threshold: Threshold) {
        let prefix = prefix.into();
        match self.overrides.iter_mut().find(|(p, _)| *p == prefix) {
            Some(entry) => entry.1 = threshold,
            None => self.overrides.push((prefix, threshold)),
        }
    }

    /// Replaces the default threshold.
    pub fn set_default(&mut self, threshold: Threshold) {
        self.default = threshold;
    }

    /// Threshold applied to origins without a matching override.
    pub fn default_threshold(&self) -> Threshold {
        self.default
    }

    /// Number of origin overrides.
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }

    /// Origin overrides in insertion order.
    pub fn overrides(&self) -> impl Iterator<Item = (&str, Threshold)> + '_ {
        self.overrides
            .iter()
            .map(|(prefix, threshold)| (prefix.as_str(), *threshold))
    }

    /// Effective threshold for `origin`.
    pub fn threshold_for(&self, origin: &str) -> Threshold {
        self.overrides
            .iter()
            .filter(|(prefix, _)| prefix_matches(prefix, origin))
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(_, threshold)| *threshold)
            .unwrap_or(self.default)
    }

    /// Whether `severity` is enabled for `origin`.
    pub fn is_enabled(&self, origin: &str, severity: Severity) -> bool {
        self.threshold_for(origin).admits(severity)
    }
}

fn prefix_matches(prefix: &str, origin: &str) -> bool {
    match origin.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with("::"),
        None => false,
    }
}

impl FromStr for SeverityFilter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut filter = SeverityFilter::default();
        for directive in s.split(',').map(str::trim).filter(|d| !d.is_empty()) {
            match directive.split_once('=') {
                Some((origin, threshold)) => {
                    let origin = origin.trim();
                    if origin.is_empty() {
                        return Err(ParseFilterError {
                            directive: directive.to_string(),
                            reason: "missing origin before '='".to_string(),
                        });
                    }
                    filter.set_origin(origin, threshold.parse()?);
                }
                None => filter.set_default(directive.parse()?),
            }
        }
        Ok(filter)
    }
}

impl fmt::Display for SeverityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.default)?;
        for (prefix, threshold) in &self.overrides {
            write!(f, ",{}={}", prefix, threshold)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_admits_message_and_above() {
        let filter = SeverityFilter::default();
        assert!(!filter.is_enabled("app", Severity::Debug));
        assert!(!filter.is_enabled("app", Severity::Configuration));
        assert!(filter.is_enabled("app", Severity::Message));
        assert!(filter.is_enabled("app", Severity::Security));
    }

    #[test]
    fn test_off_admits_nothing() {
        let filter = SeverityFilter::new(Threshold::Off);
        for severity in Severity::ALL {
            assert!(!filter.is_enabled("app", severity));
        }
    }

    #[test]
    fn test_longest_prefix_wins() {
        let filter = SeverityFilter::at_least(Severity::Warning)
            .with_origin("billing", Threshold::AtLeast(Severity::Debug))
            .with_origin("billing::audit", Threshold::AtLeast(Severity::Security));

        assert_eq!(
            filter.threshold_for("billing::ledger"),
            Threshold::AtLeast(Severity::Debug)
        );
        assert_eq!(
            filter.threshold_for("billing::audit::Trail"),
            Threshold::AtLeast(Severity::Security)
        );
        assert_eq!(
            filter.threshold_for("shipping"),
            Threshold::AtLeast(Severity::Warning)
        );
    }

    #[test]
    fn test_prefix_requires_segment_boundary() {
        let filter = SeverityFilter::at_least(Severity::Failure)
            .with_origin("bill", Threshold::AtLeast(Severity::Debug));
        assert!(filter.is_enabled("bill", Severity::Debug));
        assert!(filter.is_enabled("bill::Item", Severity::Debug));
        assert!(!filter.is_enabled("billing", Severity::Debug));
    }

    #[test]
    fn test_set_origin_replaces() {
        let filter = SeverityFilter::default()
            .with_origin("app", Threshold::Off)
            .with_origin("app", Threshold::AtLeast(Severity::Debug));
        assert_eq!(filter.override_count(), 1);
        assert!(filter.is_enabled("app", Severity::Debug));
    }

    #[test]
    fn test_parse_directives() {
        let filter: SeverityFilter = "warning, billing=debug ,chatty=off".parse().unwrap();
        assert_eq!(
            filter.default_threshold(),
            Threshold::AtLeast(Severity::Warning)
        );
        assert!(filter.is_enabled("billing::Ledger", Severity::Debug));
        assert!(!filter.is_enabled("chatty", Severity::Security));
        assert!(!filter.is_enabled("other", Severity::Message));
    }

    #[test]
    fn test_parse_empty_is_default() {
        assert_eq!("".parse::<SeverityFilter>(), Ok(SeverityFilter::default()));
    }

    #[test]
    fn test_parse_errors() {
        let err = "loud".parse::<SeverityFilter>().unwrap_err();
        assert_eq!(err.directive, "loud");

        let err = "=debug".parse::<SeverityFilter>().unwrap_err();
        assert!(err.reason.contains("missing origin"));

        assert!("app=sometimes".parse::<SeverityFilter>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        let filter = SeverityFilter::at_least(Severity::Failure)
            .with_origin("a::b", Threshold::Off)
            .with_origin("c", Threshold::AtLeast(Severity::Configuration));
        assert_eq!(filter.to_string(), "failure,a::b=off,c=configuration");
        assert_eq!(filter.to_string().parse::<SeverityFilter>(), Ok(filter));
    }
}
