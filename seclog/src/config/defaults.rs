//! Default values and constants for logging configuration.

use crate::backend::Threshold;
use crate::provider::DEFAULT_PROVIDER_ID;
use crate::severity::Severity;

/// Environment variable selecting the provider identifier.
pub const PROVIDER_ENV_VAR: &str = "SECLOG_PROVIDER";

/// Environment variable holding severity filter directives.
pub const FILTER_ENV_VAR: &str = "SECLOG_FILTER";

/// Provider resolved when nothing is configured.
pub const DEFAULT_PROVIDER: &str = DEFAULT_PROVIDER_ID;

/// Threshold applied to origins without an override.
pub const DEFAULT_THRESHOLD: Threshold = Threshold::AtLeast(Severity::Message);

// INI layout
pub const PROVIDER_SECTION: &str = "provider";
pub const PROVIDER_TYPE_KEY: &str = "type";
pub const FILTER_SECTION: &str = "filter";
pub const FILTER_DEFAULT_KEY: &str = "default";
/// Comma-separated `prefix=threshold` pairs; origin paths contain `:`, which
/// the INI parser reads as a key delimiter.
pub const FILTER_ORIGINS_KEY: &str = "origins";
