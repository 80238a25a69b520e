//! Identity sanitizer.

use super::Sanitizer;
use std::borrow::Cow;

/// A sanitizer that returns its input unchanged.
///
/// This is the sanitizer every log service starts with.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThroughSanitizer;

impl Sanitizer for PassThroughSanitizer {
    #[inline]
    fn sanitize<'a>(&self, untrusted: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(untrusted)
    }
}
