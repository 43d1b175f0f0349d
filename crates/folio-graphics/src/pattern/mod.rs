//! Pattern definitions
//!
//! Tiling and shading patterns as they arrive from the document model,
//! the registry that names them, and the pattern color space that
//! resolves them into paints.

pub mod registry;
pub mod space;

use std::sync::Arc;

use folio_render::Transform2D;
use tiny_skia::{Point, Rect};

/// Opaque handle to a tiling pattern's content stream
///
/// The content bytes are executed by a tile renderer, never by this crate.
#[derive(Debug, Clone)]
pub struct TileStream {
    data: Arc<[u8]>,
    /// Tile cell bounds in pattern space
    pub bbox: Rect,
    /// Horizontal advance between tile cells
    pub x_step: f32,
    /// Vertical advance between tile cells
    pub y_step: f32,
}

impl TileStream {
    pub fn new(data: impl Into<Arc<[u8]>>, bbox: Rect, x_step: f32, y_step: f32) -> Self {
        Self {
            data: data.into(),
            bbox,
            x_step,
            y_step,
        }
    }

    /// Raw content stream bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// Whether tile content carries its own colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintMode {
    /// Tile content specifies its own colors
    Colored,
    /// Tile content is colorless; every mark is tinted at fill time
    Uncolored,
}

/// A tiling pattern: a small cell drawn repeatedly across the fill area
#[derive(Debug, Clone)]
pub struct TilingPattern {
    /// Maps pattern space to the space the pattern was declared in
    pub matrix: Option<Transform2D>,
    pub paint_mode: PaintMode,
    pub tile: TileStream,
}

/// Shading geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShadingKind {
    /// Color varies along the start-to-end axis
    Axial { start: Point, end: Point },
    /// Color varies between two circles
    Radial {
        start: Point,
        start_radius: f32,
        end: Point,
        end_radius: f32,
    },
    /// Color computed by a function over a 2D domain
    FunctionBased { domain: [f32; 4] },
}

/// Data describing a shading
///
/// Evaluation of the shading function happens in the shading backend;
/// this crate only routes the descriptor there.
#[derive(Debug, Clone)]
pub struct ShadingDescriptor {
    pub kind: ShadingKind,
    /// Shading function stream, evaluated by the shading backend
    pub function: Arc<[u8]>,
    /// Extend beyond the start and end of the shading geometry
    pub extend: (bool, bool),
}

/// A shading pattern: fill computed by a shading function
#[derive(Debug, Clone)]
pub struct ShadingPattern {
    /// Maps pattern space to the space the pattern was declared in
    pub matrix: Option<Transform2D>,
    /// Absent when the document's shading entry is missing or malformed
    pub shading: Option<ShadingDescriptor>,
}

/// A pattern definition from the document's resources
#[derive(Debug, Clone)]
pub enum PatternDefinition {
    Tiling(TilingPattern),
    Shading(ShadingPattern),
}

impl PatternDefinition {
    /// The pattern's own transform, when it declares one
    pub fn matrix(&self) -> Option<Transform2D> {
        match self {
            PatternDefinition::Tiling(tiling) => tiling.matrix,
            PatternDefinition::Shading(shading) => shading.matrix,
        }
    }
}
