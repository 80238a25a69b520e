//! No-operation backend implementation.

use crate::backend::Backend;
use crate::record::LogRecord;
use crate::severity::Severity;

/// A backend that has every severity disabled.
///
/// Because nothing is ever enabled, log services built on it skip
/// sanitization and dispatch entirely. Useful for:
/// - Unit tests where log output would be noise
/// - Benchmarks where logging overhead should be eliminated
/// - Silent operation modes
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpBackend;

impl Backend for NoOpBackend {
    #[inline]
    fn is_enabled(&self, _origin: &str, _severity: Severity) -> bool {
        false
    }

    #[inline]
    fn emit(&self, _record: &LogRecord<'_>) {}
}
