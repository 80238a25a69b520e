//! Tracing library adapter implementation.

use crate::backend::{Backend, SeverityFilter};
use crate::record::LogRecord;
use crate::severity::Severity;
use tracing::Level;

/// Target of every event emitted by [`TracingBackend`].
pub const RECORD_TARGET: &str = "seclog";

/// Backend that delegates to the `tracing` crate.
///
/// This adapter bridges facade records to the `tracing` ecosystem, so
/// subscribers, layers and file output come from `tracing-subscriber` while
/// application code stays decoupled. A severity is enabled only when the
/// backend's [`SeverityFilter`] admits it for the origin and the current
/// subscriber would record the mapped level for the [`RECORD_TARGET`] target.
///
/// Each event carries `origin`, `operation` and `severity` fields, plus
/// `error` when a cause is attached. The message is the event message.
///
/// # Example
///
/// ```
/// use seclog::backend::{Backend, SeverityFilter, TracingBackend};
/// use seclog::Severity;
///
/// let backend = TracingBackend::new(SeverityFilter::at_least(Severity::Warning));
///
/// // Nothing is recorded without a subscriber
/// assert!(!backend.is_enabled("billing::Ledger", Severity::Security));
/// assert!(backend.filter().is_enabled("billing::Ledger", Severity::Security));
/// assert!(!backend.filter().is_enabled("billing::Ledger", Severity::Message));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TracingBackend {
    filter: SeverityFilter,
}

impl TracingBackend {
    /// Create a new tracing backend with the given thresholds.
    pub fn new(filter: SeverityFilter) -> Self {
        Self { filter }
    }

    /// Thresholds applied by this backend.
    pub fn filter(&self) -> &SeverityFilter {
        &self.filter
    }
}

/// Maps a facade severity onto the `tracing` ladder.
///
/// `tracing` has nothing above `ERROR`, so `Security` shares that level and is
/// told apart by the `severity` field.
pub fn tracing_level(severity: Severity) -> Level {
    match severity {
        Severity::Debug => Level::TRACE,
        Severity::Configuration => Level::DEBUG,
        Severity::Message => Level::INFO,
        Severity::Warning => Level::WARN,
        Severity::Failure | Severity::Security => Level::ERROR,
    }
}

// Callsite metadata must be static, so each level gets its own expansion.
macro_rules! emit_at {
    ($level:expr, $record:expr) => {
        match $record.error {
            Some(error) => tracing::event!(
                target: RECORD_TARGET,
                $level,
                origin = $record.origin,
                operation = $record.operation,
                severity = $record.severity.name(),
                error = %error,
                "{}",
                $record.message
            ),
            None => tracing::event!(
                target: RECORD_TARGET,
                $level,
                origin = $record.origin,
                operation = $record.operation,
                severity = $record.severity.name(),
                "{}",
                $record.message
            ),
        }
    };
}

/// Whether the current subscriber records `severity` for [`RECORD_TARGET`].
fn subscriber_enabled(severity: Severity) -> bool {
    match severity {
        Severity::Debug => tracing::enabled!(target: RECORD_TARGET, Level::TRACE),
        Severity::Configuration => tracing::enabled!(target: RECORD_TARGET, Level::DEBUG),
        Severity::Message => tracing::enabled!(target: RECORD_TARGET, Level::INFO),
        Severity::Warning => tracing::enabled!(target: RECORD_TARGET, Level::WARN),
        Severity::Failure | Severity::Security => {
            tracing::enabled!(target: RECORD_TARGET, Level::ERROR)
        }
    }
}

impl Backend for TracingBackend {
    fn is_enabled(&self, origin: &str, severity: Severity) -> bool {
        self.filter.is_enabled(origin, severity) && subscriber_enabled(severity)
    }

    fn emit(&self, record: &LogRecord<'_>) {
        match record.severity {
            Severity::Debug => emit_at!(Level::TRACE, record),
            Severity::Configuration => emit_at!(Level::DEBUG, record),
            Severity::Message => emit_at!(Level::INFO, record),
            Severity::Warning => emit_at!(Level::WARN, record),
            Severity::Failure | Severity::Security => emit_at!(Level::ERROR, record),
        }
    }
}
