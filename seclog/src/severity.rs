//! Severity ladder for facade log calls.
//!
//! The ladder is owned by this crate rather than borrowed from a backend, so
//! the `Security` level can sit strictly above every standard level instead of
//! being squeezed into a backend's closed set.
//!
//! ```text
//! Security (2000) > Failure (1000) > Warning (900) > Message (800)
//!                 > Configuration (700) > Debug (300)
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Rank of the highest standard severity.
pub const STANDARD_MAX_RANK: u32 = 1000;

/// Distance between the highest standard rank and `Security`.
pub const SECURITY_RANK_OFFSET: u32 = 1000;

/// Ranked importance of a log record.
///
/// Ordering follows [`Severity::rank`], so `Severity::Security` compares
/// greater than every other variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Fine-grained diagnostics
    Debug,
    /// Configuration details
    Configuration,
    /// Informational messages
    Message,
    /// Recoverable problems
    Warning,
    /// Failures; the highest standard level
    Failure,
    /// Security relevant events, ranked above all standard levels
    Security,
}

impl Severity {
    /// All severities, lowest rank first.
    pub const ALL: [Severity; 6] = [
        Severity::Debug,
        Severity::Configuration,
        Severity::Message,
        Severity::Warning,
        Severity::Failure,
        Severity::Security,
    ];

    /// Numeric rank; a higher rank is more important.
    pub const fn rank(self) -> u32 {
        match self {
            Severity::Debug => 300,
            Severity::Configuration => 700,
            Severity::Message => 800,
            Severity::Warning => 900,
            Severity::Failure => STANDARD_MAX_RANK,
            Severity::Security => STANDARD_MAX_RANK + SECURITY_RANK_OFFSET,
        }
    }

    /// Display name carried into backend records.
    pub const fn name(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Configuration => "CONFIGURATION",
            Severity::Message => "MESSAGE",
            Severity::Warning => "WARNING",
            Severity::Failure => "FAILURE",
            Severity::Security => "SECURITY",
        }
    }

    /// Whether this level exists on a conventional backend ladder.
    pub const fn is_standard(self) -> bool {
        !matches!(self, Severity::Security)
    }

    /// Returns true when `self` is enabled under `threshold`.
    pub fn is_at_least(self, threshold: Severity) -> bool {
        is_at_least(self, threshold)
    }
}

/// Returns true when `requested` ranks at or above `threshold`.
pub fn is_at_least(requested: Severity, threshold: Severity) -> bool {
    requested.rank() >= threshold.rank()
}

impl PartialOrd for Severity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Severity {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a severity name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown severity '{0}'")]
pub struct ParseSeverityError(pub String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "debug" | "trace" => Ok(Severity::Debug),
            "configuration" | "config" => Ok(Severity::Configuration),
            "message" | "info" => Ok(Severity::Message),
            "warning" | "warn" => Ok(Severity::Warning),
            "failure" | "error" | "severe" | "fatal" => Ok(Severity::Failure),
            "security" => Ok(Severity::Security),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ladder_ordering() {
        assert!(Severity::Debug < Severity::Configuration);
        assert!(Severity::Configuration < Severity::Message);
        assert!(Severity::Message < Severity::Warning);
        assert!(Severity::Warning < Severity::Failure);
        assert!(Severity::Failure < Severity::Security);
    }

    #[test]
    fn test_security_above_every_standard_level() {
        for severity in Severity::ALL.iter().filter(|s| s.is_standard()) {
            assert!(Severity::Security > *severity);
            assert!(Severity::Security.rank() > STANDARD_MAX_RANK);
            assert!(!is_at_least(*severity, Severity::Security));
        }
        assert_eq!(
            Severity::Security.rank(),
            Severity::Failure.rank() + SECURITY_RANK_OFFSET
        );
    }

    #[test]
    fn test_is_at_least() {
        assert!(is_at_least(Severity::Warning, Severity::Warning));
        assert!(is_at_least(Severity::Failure, Severity::Warning));
        assert!(!is_at_least(Severity::Message, Severity::Warning));
        assert!(Severity::Security.is_at_least(Severity::Debug));
    }

    #[test]
    fn test_all_is_sorted_by_rank() {
        let mut sorted = Severity::ALL;
        sorted.sort();
        assert_eq!(sorted, Severity::ALL);
    }

    #[test]
    fn test_only_security_is_non_standard() {
        let custom: Vec<_> = Severity::ALL
            .iter()
            .filter(|s| !s.is_standard())
            .collect();
        assert_eq!(custom, vec![&Severity::Security]);
    }

    #[test]
    fn test_parse_names_and_aliases() {
        assert_eq!("SECURITY".parse::<Severity>(), Ok(Severity::Security));
        assert_eq!("info".parse::<Severity>(), Ok(Severity::Message));
        assert_eq!("Config".parse::<Severity>(), Ok(Severity::Configuration));
        assert_eq!(" warn ".parse::<Severity>(), Ok(Severity::Warning));
        assert_eq!("severe".parse::<Severity>(), Ok(Severity::Failure));
        assert!("loud".parse::<Severity>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for severity in Severity::ALL {
            assert_eq!(severity.to_string().parse::<Severity>(), Ok(severity));
        }
    }
}
