//! Backend abstraction layer.
//!
//! The facade never writes log output itself. A [`Backend`] answers whether a
//! severity is enabled for an origin and emits finished [`LogRecord`]s; storage,
//! formatting and transport stay with the backend.
//!
//! # Architecture
//!
//! - `Backend` trait: the only interface the log service talks to
//! - `TracingBackend`: production adapter that emits `tracing` events
//! - `NoOpBackend`: reports every severity disabled and discards records
//! - `SeverityFilter`: per-origin thresholds used by `TracingBackend`
//!
//! [`LogRecord`]: crate::record::LogRecord

mod filter;
mod noop;
mod tracing_adapter;
mod r#trait;

pub use filter::{ParseFilterError, SeverityFilter, Threshold};
pub use noop::NoOpBackend;
pub use r#trait::Backend;
pub use tracing_adapter::{tracing_level, TracingBackend, RECORD_TARGET};
