//! Structured diagnostics
//!
//! Paint resolution degrades instead of failing when a pattern is
//! malformed. The resolver reports what it recovered from through an
//! injected sink, so embedders can log, count, or collect the events
//! without this crate owning a logger.

use std::fmt;

/// A recovered anomaly observed during paint resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Shading pattern without a usable shading entry
    MissingShading { pattern: String },
    /// Uncolored tiling pattern resolved in a space with no base color space
    MissingTintSpace { pattern: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingShading { pattern } => {
                write!(f, "shading of pattern '{}' is missing, will be filled with transparency", pattern)
            }
            Diagnostic::MissingTintSpace { pattern } => {
                write!(f, "uncolored pattern '{}' has no base color space, will be filled with transparency", pattern)
            }
        }
    }
}

/// Observer for recovered anomalies
pub trait DiagnosticSink: Send + Sync {
    /// Called once per recovered anomaly
    fn report(&self, diagnostic: Diagnostic);
}

/// Default sink: forwards diagnostics to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TraceSink;

impl DiagnosticSink for TraceSink {
    fn report(&self, diagnostic: Diagnostic) {
        tracing::warn!("{}", diagnostic);
    }
}
