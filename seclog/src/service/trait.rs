//! Log service trait and formatting macros.

use std::sync::Arc;

use crate::error::ValidationError;
use crate::record::ErrorRef;
use crate::sanitize::Sanitizer;
use crate::severity::Severity;
use crate::validation::Cause;

/// Entry point for application logging.
///
/// Implementors provide [`log`](LogService::log) and
/// [`set_sanitizer`](LogService::set_sanitizer); the per-severity methods
/// delegate to `log`.
///
/// Every method returns `Ok(())` for valid arguments, whether or not the
/// severity is enabled, and a [`ValidationError`] otherwise. A failed call
/// never reaches the backend.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; one instance is shared by every
/// caller routed through its provider.
pub trait LogService: Send + Sync {
    /// Validates, filters, sanitizes and dispatches one call.
    fn log(
        &self,
        severity: Severity,
        origin: &str,
        operation: &str,
        message: &str,
        cause: Cause<'_>,
    ) -> Result<(), ValidationError>;

    /// Replaces the sanitizer used by all subsequent calls.
    fn set_sanitizer(&self, sanitizer: Arc<dyn Sanitizer>);

    /// Log at [`Severity::Debug`].
    fn log_debug(&self, origin: &str, operation: &str, message: &str) -> Result<(), ValidationError> {
        self.log(Severity::Debug, origin, operation, message, Cause::Omitted)
    }

    /// Log at [`Severity::Configuration`].
    fn log_configuration(
        &self,
        origin: &str,
        operation: &str,
        message: &str,
    ) -> Result<(), ValidationError> {
        self.log(Severity::Configuration, origin, operation, message, Cause::Omitted)
    }

    /// Log at [`Severity::Message`].
    fn log_message(&self, origin: &str, operation: &str, message: &str) -> Result<(), ValidationError> {
        self.log(Severity::Message, origin, operation, message, Cause::Omitted)
    }

    /// Log at [`Severity::Warning`].
    fn log_warning(&self, origin: &str, operation: &str, message: &str) -> Result<(), ValidationError> {
        self.log(Severity::Warning, origin, operation, message, Cause::Omitted)
    }

    /// Log at [`Severity::Warning`] with an attached error.
    ///
    /// `None` fails with [`ValidationError::MissingError`].
    fn log_warning_with_error(
        &self,
        origin: &str,
        operation: &str,
        message: &str,
        error: Option<ErrorRef<'_>>,
    ) -> Result<(), ValidationError> {
        self.log(Severity::Warning, origin, operation, message, Cause::Given(error))
    }

    /// Log at [`Severity::Failure`].
    fn log_failure(&self, origin: &str, operation: &str, message: &str) -> Result<(), ValidationError> {
        self.log(Severity::Failure, origin, operation, message, Cause::Omitted)
    }

    /// Log at [`Severity::Failure`] with an attached error.
    ///
    /// `None` fails with [`ValidationError::MissingError`].
    fn log_failure_with_error(
        &self,
        origin: &str,
        operation: &str,
        message: &str,
        error: Option<ErrorRef<'_>>,
    ) -> Result<(), ValidationError> {
        self.log(Severity::Failure, origin, operation, message, Cause::Given(error))
    }

    /// Log at [`Severity::Security`].
    fn log_security(&self, origin: &str, operation: &str, message: &str) -> Result<(), ValidationError> {
        self.log(Severity::Security, origin, operation, message, Cause::Omitted)
    }

    /// Log at [`Severity::Security`] with an attached error.
    ///
    /// `None` fails with [`ValidationError::MissingError`].
    fn log_security_with_error(
        &self,
        origin: &str,
        operation: &str,
        message: &str,
        error: Option<ErrorRef<'_>>,
    ) -> Result<(), ValidationError> {
        self.log(Severity::Security, origin, operation, message, Cause::Given(error))
    }
}

/// Convenience macros for logging with format strings.
///
/// Each takes the service, the origin and the operation name, followed by
/// `format!` arguments for the message, and returns the call's `Result`.
///
/// ```
/// use seclog::service::StandardLogService;
/// use seclog::backend::NoOpBackend;
/// use seclog::log_failure;
/// use std::sync::Arc;
///
/// let service = StandardLogService::new(Arc::new(NoOpBackend));
/// let attempts = 3;
/// log_failure!(service, "auth::Login", "verify", "rejected after {} attempts", attempts)?;
/// # Ok::<(), seclog::ValidationError>(())
/// ```
#[macro_export]
macro_rules! log_debug {
    ($service:expr, $origin:expr, $operation:expr, $($arg:tt)*) => {{
        use $crate::service::LogService as _;
        $service.log_debug($origin, $operation, &format!($($arg)*))
    }};
}

#[macro_export]
macro_rules! log_configuration {
    ($service:expr, $origin:expr, $operation:expr, $($arg:tt)*) => {{
        use $crate::service::LogService as _;
        $service.log_configuration($origin, $operation, &format!($($arg)*))
    }};
}

#[macro_export]
macro_rules! log_message {
    ($service:expr, $origin:expr, $operation:expr, $($arg:tt)*) => {{
        use $crate::service::LogService as _;
        $service.log_message($origin, $operation, &format!($($arg)*))
    }};
}

#[macro_export]
macro_rules! log_warning {
    ($service:expr, $origin:expr, $operation:expr, $($arg:tt)*) => {{
        use $crate::service::LogService as _;
        $service.log_warning($origin, $operation, &format!($($arg)*))
    }};
}

#[macro_export]
macro_rules! log_failure {
    ($service:expr, $origin:expr, $operation:expr, $($arg:tt)*) => {{
        use $crate::service::LogService as _;
        $service.log_failure($origin, $operation, &format!($($arg)*))
    }};
}

#[macro_export]
macro_rules! log_security {
    ($service:expr, $origin:expr, $operation:expr, $($arg:tt)*) => {{
        use $crate::service::LogService as _;
        $service.log_security($origin, $operation, &format!($($arg)*))
    }};
}
