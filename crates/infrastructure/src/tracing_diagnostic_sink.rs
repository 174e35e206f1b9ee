//! Diagnostic sink that forwards builder failures to `tracing`.

use mcamp_application::DiagnosticSink;
use tracing::error;

/// Diagnostic sink emitting error-level `tracing` events.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingDiagnosticSink;

impl TracingDiagnosticSink {
    /// Creates a new tracing diagnostic sink.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticSink for TracingDiagnosticSink {
    fn error(&self, tag: &str, message: &str) {
        error!(tag = %tag, "{message}");
    }
}
