//! Control character escaping.

use super::Sanitizer;
use std::borrow::Cow;
use std::fmt::Write;

/// Escapes control characters so untrusted text stays on one log line.
///
/// `\n`, `\r` and `\t` become two-character escapes, a literal backslash is
/// doubled, and every other control character becomes `\u{XX}`. Text without
/// control characters or backslashes is returned borrowed.
///
/// Escaping is not idempotent: reapplying it doubles the backslashes of
/// earlier escapes (`\n` becomes `\\n`). The output stays on one line
/// either way.
///
/// ```
/// use seclog::sanitize::{ControlCharSanitizer, Sanitizer};
///
/// let forged = "login ok\n[SECURITY] admin granted";
/// assert_eq!(
///     ControlCharSanitizer.sanitize(forged),
///     "login ok\\n[SECURITY] admin granted"
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ControlCharSanitizer;

impl Sanitizer for ControlCharSanitizer {
    fn sanitize<'a>(&self, untrusted: &'a str) -> Cow<'a, str> {
        if !untrusted.chars().any(needs_escape) {
            return Cow::Borrowed(untrusted);
        }

        let mut out = String::with_capacity(untrusted.len() + 8);
        for c in untrusted.chars() {
            match c {
                '\\' => out.push_str("\\\\"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                c if c.is_control() => {
                    // Writing to a String cannot fail
                    let _ = write!(out, "\\u{{{:02x}}}", c as u32);
                }
                c => out.push(c),
            }
        }
        Cow::Owned(out)
    }
}

fn needs_escape(c: char) -> bool {
    c == '\\' || c.is_control()
}
