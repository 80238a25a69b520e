//! Ephemeral log record handed to a backend.

use crate::severity::Severity;

/// Borrowed reference to an error attached to a log call.
pub type ErrorRef<'a> = &'a (dyn std::error::Error + 'static);

/// A single log record.
///
/// Records borrow everything they carry and are consumed by the backend during
/// [`Backend::emit`](crate::backend::Backend::emit); nothing is retained.
#[derive(Debug, Clone, Copy)]
pub struct LogRecord<'a> {
    /// Identifier of the calling unit, never sanitized
    pub origin: &'a str,
    /// Call-site label, already sanitized
    pub operation: &'a str,
    /// Message text, already sanitized
    pub message: &'a str,
    /// Severity of the record
    pub severity: Severity,
    /// Optional attached failure cause
    pub error: Option<ErrorRef<'a>>,
}

/// Returns the type name of `T` for use as a log origin.
///
/// ```
/// use seclog::origin_of;
///
/// struct Vault;
/// assert!(origin_of::<Vault>().ends_with("Vault"));
/// ```
pub fn origin_of<T: ?Sized>() -> &'static str {
    std::any::type_name::<T>()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ledger;

    #[test]
    fn test_origin_of_uses_type_path() {
        assert_eq!(origin_of::<Ledger>(), "seclog::record::tests::Ledger");
        assert_eq!(origin_of::<str>(), "str");
    }

    #[test]
    fn test_record_debug_includes_error() {
        let cause = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
        let record = LogRecord {
            origin: "Ledger",
            operation: "save",
            message: "write failed",
            severity: Severity::Failure,
            error: Some(&cause),
        };
        let debug = format!("{:?}", record);
        assert!(debug.contains("Failure"));
        assert!(debug.contains("disk gone"));
    }
}
