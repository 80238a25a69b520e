//! Sanitizer trait definition.

use std::borrow::Cow;

/// Transforms untrusted text into text that is safe to hand to a backend.
///
/// Implementations must be total: every input that passed validation yields
/// an output. The log service applies a sanitizer exactly once per field, so
/// an implementation need not be idempotent, but applying it to its own
/// output must never reintroduce unsafe text.
///
/// # Example
///
/// ```
/// use seclog::sanitize::Sanitizer;
/// use std::borrow::Cow;
///
/// struct Upper;
///
/// impl Sanitizer for Upper {
///     fn sanitize<'a>(&self, untrusted: &'a str) -> Cow<'a, str> {
///         Cow::Owned(untrusted.to_uppercase())
///     }
/// }
///
/// assert_eq!(Upper.sanitize("disk full"), "DISK FULL");
/// ```
pub trait Sanitizer: Send + Sync {
    /// Returns the sanitized form of `untrusted`.
    fn sanitize<'a>(&self, untrusted: &'a str) -> Cow<'a, str>;
}

impl<F> Sanitizer for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn sanitize<'a>(&self, untrusted: &'a str) -> Cow<'a, str> {
        Cow::Owned(self(untrusted))
    }
}
