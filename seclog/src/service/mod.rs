//! Log service facade.
//!
//! A [`LogService`] is what application code logs through. Every call is
//! validated, gated on the backend's threshold for the caller's origin,
//! sanitized and finally dispatched to the backend.
//!
//! # Example
//!
//! ```
//! use seclog::backend::{SeverityFilter, TracingBackend};
//! use seclog::sanitize::ControlCharSanitizer;
//! use seclog::service::{LogService, StandardLogService};
//! use seclog::Severity;
//! use std::sync::Arc;
//!
//! let backend = TracingBackend::new(SeverityFilter::at_least(Severity::Warning));
//! let service = StandardLogService::new(Arc::new(backend));
//! service.set_sanitizer(Arc::new(ControlCharSanitizer));
//!
//! service.log_warning("billing::Ledger", "save", "disk full")?;
//! assert!(service.log_message("billing::Ledger", "", "no operation").is_err());
//! # Ok::<(), seclog::ValidationError>(())
//! ```

mod standard;
mod r#trait;

pub use r#trait::LogService;
pub use standard::StandardLogService;
