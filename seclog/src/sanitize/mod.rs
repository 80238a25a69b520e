//! Sanitization of free-text log fields.
//!
//! A [`Sanitizer`] rewrites the operation name and message of a log call
//! before they reach the backend. The origin is caller metadata and is never
//! sanitized.
//!
//! - [`PassThroughSanitizer`]: identity transform, the default
//! - [`ControlCharSanitizer`]: escapes line breaks and other control
//!   characters so a message cannot forge additional log lines
//!
//! Closures of the form `Fn(&str) -> String` are sanitizers too.

mod control;
mod passthrough;
mod r#trait;

pub use control::ControlCharSanitizer;
pub use passthrough::PassThroughSanitizer;
pub use r#trait::Sanitizer;
