//! Diagnostic channel for best-effort failures
//!
//! Logger writes, directory bootstrap and file reads never return errors to
//! the caller. When one of them fails the failure is reported here instead.

mod traits;
mod noop;
mod tracing_sink;
mod memory;

pub use traits::{DiagnosticSink, SharedSink};
pub use noop::NoOpSink;
pub use tracing_sink::TracingSink;
pub use memory::{MemorySink, Diagnostic, Severity};
