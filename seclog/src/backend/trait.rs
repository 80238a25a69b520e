//! Backend trait definition.

use crate::record::LogRecord;
use crate::severity::Severity;

/// Logging sink consumed by the log service.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; one backend is shared by every
/// thread routed through its provider.
///
/// # Example
///
/// ```
/// use seclog::backend::Backend;
/// use seclog::{LogRecord, Severity};
///
/// struct Stderr;
///
/// impl Backend for Stderr {
///     fn is_enabled(&self, _origin: &str, severity: Severity) -> bool {
///         severity >= Severity::Warning
///     }
///
///     fn emit(&self, record: &LogRecord<'_>) {
///         eprintln!("{} {}::{} {}", record.severity, record.origin, record.operation, record.message);
///     }
/// }
/// ```
pub trait Backend: Send + Sync {
    /// Whether records at `severity` from `origin` would be emitted.
    fn is_enabled(&self, origin: &str, severity: Severity) -> bool;

    /// Emits one record.
    ///
    /// Only called after [`is_enabled`](Backend::is_enabled) returned true for
    /// the record's origin and severity.
    fn emit(&self, record: &LogRecord<'_>);
}
