//! Backend-backed log service.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use crate::backend::Backend;
use crate::error::ValidationError;
use crate::record::LogRecord;
use crate::sanitize::{PassThroughSanitizer, Sanitizer};
use crate::severity::Severity;
use crate::service::LogService;
use crate::validation::{validate_call, Cause};

/// The log service every built-in provider hands out.
///
/// Holds one shared [`Backend`] and exactly one [`Sanitizer`], starting with
/// [`PassThroughSanitizer`]. Replacing the sanitizer is visible to every
/// subsequent call on any thread; a call already in flight keeps the sanitizer
/// it started with.
pub struct StandardLogService {
    backend: Arc<dyn Backend>,
    sanitizer: RwLock<Arc<dyn Sanitizer>>,
}

impl StandardLogService {
    /// Creates a service over `backend` with the pass-through sanitizer.
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self::with_sanitizer(backend, Arc::new(PassThroughSanitizer))
    }

    /// Creates a service over `backend` with the given sanitizer.
    pub fn with_sanitizer(backend: Arc<dyn Backend>, sanitizer: Arc<dyn Sanitizer>) -> Self {
        Self {
            backend,
            sanitizer: RwLock::new(sanitizer),
        }
    }

    /// The backend records are dispatched to.
    pub fn backend(&self) -> &Arc<dyn Backend> {
        &self.backend
    }

    /// The sanitizer currently applied to calls.
    pub fn sanitizer(&self) -> Arc<dyn Sanitizer> {
        // The guarded value is always a complete Arc, so a poisoned lock is safe to reuse
        let guard = self.sanitizer.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }
}

impl LogService for StandardLogService {
    fn log(
        &self,
        severity: Severity,
        origin: &str,
        operation: &str,
        message: &str,
        cause: Cause<'_>,
    ) -> Result<(), ValidationError> {
        validate_call(origin, operation, message, &cause)?;

        if !self.backend.is_enabled(origin, severity) {
            return Ok(());
        }

        let sanitizer = self.sanitizer();
        let operation = sanitizer.sanitize(operation);
        let message = sanitizer.sanitize(message);

        self.backend.emit(&LogRecord {
            origin,
            operation: &operation,
            message: &message,
            severity,
            error: cause.error(),
        });
        Ok(())
    }

    fn set_sanitizer(&self, sanitizer: Arc<dyn Sanitizer>) {
        let mut guard = self.sanitizer.write().unwrap_or_else(PoisonError::into_inner);
        *guard = sanitizer;
    }
}

impl fmt::Debug for StandardLogService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StandardLogService").finish_non_exhaustive()
    }
}
