//! Diagnostic sink backed by `tracing`

use super::traits::DiagnosticSink;

/// Forwards diagnostics to `tracing` events under a fixed target
///
/// Nothing is printed unless the host application installs a subscriber.
#[derive(Debug, Clone)]
pub struct TracingSink {
    prefix: String,
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl TracingSink {
    pub fn new() -> Self {
        Self {
            prefix: "[pluglog]".to_string(),
        }
    }

    /// Create a sink with a custom message prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl DiagnosticSink for TracingSink {
    fn warn(&self, message: &str) {
        tracing::warn!(target: "pluglog", "{} {}", self.prefix, message);
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "pluglog", "{} {}", self.prefix, message);
    }
}
