//! No-op diagnostic sink

use super::traits::DiagnosticSink;

/// A sink that discards every diagnostic
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSink;

impl NoOpSink {
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticSink for NoOpSink {
    fn warn(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}
