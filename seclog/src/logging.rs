//! Subscriber setup for the built-in tracing provider.
//!
//! Applications that resolve the `tracing` provider need a subscriber to see
//! anything. [`init_logging`] installs one that:
//! - Prints to stdout in the compact fmt format
//! - Is configurable via the RUST_LOG environment variable
//! - Admits every facade record by default, leaving severity gating to the
//!   provider's [`SeverityFilter`](crate::backend::SeverityFilter)

use std::io;
use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::EnvFilter;

/// Directives used when RUST_LOG is not set.
pub const DEFAULT_DIRECTIVES: &str = "info,seclog=trace";

/// Errors raised while installing the global subscriber.
#[derive(Debug, Error)]
pub enum LoggingInitError {
    /// Fallback directives could not be parsed
    #[error("Invalid log directives: {0}")]
    InvalidDirectives(#[from] ParseError),

    /// A global subscriber is already installed
    #[error("Logging already initialized: {0}")]
    AlreadyInitialized(#[from] TryInitError),
}

/// Initialize the global subscriber.
///
/// RUST_LOG takes precedence; `directives` is used when it is unset or
/// invalid.
///
/// # Errors
///
/// Returns an error if `directives` is needed and cannot be parsed, or if a
/// global subscriber has already been installed.
pub fn init_logging(directives: &str) -> Result<(), LoggingInitError> {
    install(directives, io::stdout)
}

fn install<W>(directives: &str, writer: W) -> Result<(), LoggingInitError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => env_filter(directives)?,
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_target(true)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Initialize the global subscriber with [`DEFAULT_DIRECTIVES`].
pub fn init_default_logging() -> Result<(), LoggingInitError> {
    init_logging(DEFAULT_DIRECTIVES)
}

fn env_filter(directives: &str) -> Result<EnvFilter, LoggingInitError> {
    Ok(EnvFilter::try_new(directives)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_parse() {
        assert!(env_filter(DEFAULT_DIRECTIVES).is_ok());
    }

    #[test]
    fn test_invalid_directives() {
        let err = env_filter("seclog=loud").unwrap_err();
        assert!(matches!(err, LoggingInitError::InvalidDirectives(_)));
        assert!(err.to_string().starts_with("Invalid log directives"));
    }

    #[test]
    fn test_second_init_fails() {
        // The subscriber is global to this test binary, so it writes nowhere.
        // The first call may lose to another test.
        let _ = install(DEFAULT_DIRECTIVES, io::sink);
        assert!(matches!(
            install(DEFAULT_DIRECTIVES, io::sink),
            Err(LoggingInitError::AlreadyInitialized(_))
        ));
    }
}
