//! seclog - a security-aware logging facade
//!
//! Application code logs through a [`LogService`] obtained from a
//! [`ProviderRegistry`]. Every call is validated, gated on severity,
//! sanitized and dispatched to a pluggable backend. On top of the usual
//! severities the facade carries a [`Severity::Security`] level ranked above
//! every standard one, so security events pass any threshold short of `off`.
//!
//! # High-Level API
//!
//! ```
//! use seclog::config::LoggingSettings;
//! use seclog::sanitize::ControlCharSanitizer;
//! use seclog::{log_security, origin_of, ProviderRegistry};
//! use std::sync::Arc;
//!
//! struct LoginHandler;
//!
//! let registry = ProviderRegistry::from_settings(&LoggingSettings::from_env()?);
//! let log = registry.get_service()?;
//! log.set_sanitizer(Arc::new(ControlCharSanitizer));
//!
//! let user = "mallory\nroot logged in";
//! log_security!(log, origin_of::<LoginHandler>(), "login", "rejected user {}", user)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod backend;
pub mod config;
pub mod error;
pub mod logging;
pub mod provider;
pub mod record;
pub mod sanitize;
pub mod service;
pub mod severity;
pub mod validation;

pub use error::{BoxError, Field, ProviderError, ValidationError};
pub use provider::{LogProvider, ProviderRegistry};
pub use record::{origin_of, ErrorRef, LogRecord};
pub use sanitize::Sanitizer;
pub use service::LogService;
pub use severity::Severity;
pub use validation::Cause;

/// Version of the seclog library.
///
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
