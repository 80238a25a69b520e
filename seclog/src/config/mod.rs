//! Configuration for the logging facade.
//!
//! Settings come from three layers, later ones winning:
//!
//! 1. Built-in defaults ([`defaults`])
//! 2. An INI file ([`LoggingSettings::load_from`])
//! 3. Environment variables ([`LoggingSettings::with_overrides_from`])
//!
//! ```ini
//! [provider]
//! type = tracing
//!
//! [filter]
//! default = message
//! origins = billing::ledger=debug, chatty=off
//! ```
//!
//! # Example
//!
//! ```
//! use seclog::config::LoggingSettings;
//! use seclog::Severity;
//!
//! let settings = LoggingSettings::from_lookup(|key| match key {
//!     "SECLOG_PROVIDER" => Some("noop".to_string()),
//!     "SECLOG_FILTER" => Some("warning,billing=debug".to_string()),
//!     _ => None,
//! })?;
//!
//! assert_eq!(settings.provider, "noop");
//! assert!(settings.filter.is_enabled("billing::Ledger", Severity::Debug));
//! # Ok::<(), seclog::config::ConfigError>(())
//! ```

pub mod defaults;
mod file;
mod parser;
mod settings;

pub use file::ConfigError;
pub use settings::LoggingSettings;
