//! Diagnostic sink trait definition

use std::sync::Arc;

/// Receiver for failures that must not interrupt the caller
///
/// Implementations:
/// - `NoOpSink`: Drops everything
/// - `TracingSink`: Forwards to the `tracing` ecosystem
/// - `MemorySink`: Collects messages, mostly for tests
pub trait DiagnosticSink: Send + Sync {
    /// Report a recoverable problem
    fn warn(&self, message: &str);

    /// Report a failure that lost data (e.g. an entry that was never written)
    fn error(&self, message: &str);
}

/// Type alias for an Arc-wrapped sink
pub type SharedSink = Arc<dyn DiagnosticSink>;
