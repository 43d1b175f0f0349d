//! Paint descriptors
//!
//! A `Paint` is the fill-ready output of color resolution, consumed by the
//! rasterizer when filling or stroking shapes. The representation is kept
//! private so consumers dispatch through [`Paint::kind`] and never assume
//! a solid color.

use std::fmt;
use std::sync::Arc;

use tiny_skia::Pixmap;

use crate::{Color, GradientPaint, Transform2D};

/// A repeating tile produced by a tile renderer
#[derive(Clone)]
pub struct TilePaint {
    /// Rendered tile cell
    pub pixmap: Arc<Pixmap>,
    /// Placement of tile space on the device
    pub transform: Transform2D,
}

impl TilePaint {
    pub fn new(pixmap: Arc<Pixmap>, transform: Transform2D) -> Self {
        Self { pixmap, transform }
    }
}

impl fmt::Debug for TilePaint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TilePaint")
            .field("width", &self.pixmap.width())
            .field("height", &self.pixmap.height())
            .field("transform", &self.transform)
            .finish()
    }
}

/// Paint variants
///
/// Non-exhaustive: rasterizers must keep a fallback arm.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum PaintKind {
    /// Single color
    Solid(Color),
    /// Repeating tile
    Tile(TilePaint),
    /// Gradient
    Gradient(GradientPaint),
}

/// Fill-ready paint for shape rasterization
#[derive(Debug, Clone)]
pub struct Paint {
    kind: PaintKind,
}

impl Paint {
    /// Solid color paint
    pub fn solid(color: Color) -> Self {
        Self { kind: PaintKind::Solid(color) }
    }

    /// Zero-coverage fill: covers nothing when rasterized
    pub fn transparent() -> Self {
        Self::solid(Color::TRANSPARENT)
    }

    /// Repeating tile paint
    pub fn tile(tile: TilePaint) -> Self {
        Self { kind: PaintKind::Tile(tile) }
    }

    /// Gradient paint
    pub fn gradient(gradient: GradientPaint) -> Self {
        Self { kind: PaintKind::Gradient(gradient) }
    }

    /// Variant for rasterizer dispatch
    pub fn kind(&self) -> &PaintKind {
        &self.kind
    }

    /// Covers nothing at all?
    pub fn is_transparent(&self) -> bool {
        matches!(self.kind, PaintKind::Solid(color) if color.a == 0)
    }

    /// Guaranteed to cover every pixel it touches?
    pub fn is_opaque(&self) -> bool {
        match &self.kind {
            PaintKind::Solid(color) => color.is_opaque(),
            // Tile cells may leave gaps between marks
            PaintKind::Tile(_) => false,
            PaintKind::Gradient(gradient) => {
                gradient.stops.iter().all(|stop| stop.color.is_opaque())
            }
        }
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Paint::solid(color)
    }
}
