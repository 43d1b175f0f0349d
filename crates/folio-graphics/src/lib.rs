//! folio Graphics - Color Spaces & Patterns
//!
//! Color resolution for the folio renderer.
//!
//! This crate provides:
//! - The `ColorSpace` trait and device color spaces
//! - Pattern definitions (tiling and shading)
//! - The pattern registry and pattern color space resolver
//! - Structured diagnostics for recovered pattern anomalies

pub mod color_space;
pub mod diagnostics;
pub mod pattern;

pub use color_space::{ColorSpace, ColorValue, DeviceGray, DeviceRgb};
pub use diagnostics::{Diagnostic, DiagnosticSink, TraceSink};
pub use pattern::registry::PatternRegistry;
pub use pattern::space::{
    PaintBackends, PatternColorSpace, ShadingPaintBuilder, TileRenderer, Tint,
};
pub use pattern::{
    PaintMode, PatternDefinition, ShadingDescriptor, ShadingKind, ShadingPattern, TileStream,
    TilingPattern,
};

/// Color space error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorSpaceError {
    /// Referenced pattern is absent from the registry
    #[error("pattern '{name}' was not found")]
    PatternNotFound { name: String },

    /// Entry point that has no meaning for a pattern color space
    #[error("{operation} is not applicable to a pattern color space")]
    Unsupported { operation: &'static str },

    /// Component slice of the wrong arity for the color space
    #[error("expected {expected} color components, got {actual}")]
    InvalidComponents { expected: usize, actual: usize },

    /// Failure inside a delegated tile or shading backend
    #[error("pattern rendering failed: {message}")]
    Render { message: String },
}
