//! Gradient paint data
//!
//! Geometry, stops, and spread behavior for gradient paints. These types
//! only describe a finished paint; evaluating a shading function into
//! stops is the job of the shading backend that builds the paint.

use tiny_skia::Point;

use crate::{Color, Transform2D};

/// A color stop in a gradient
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    /// Position in gradient (0.0 - 1.0)
    pub position: f32,
    /// Color at this position
    pub color: Color,
}

impl ColorStop {
    /// Create a new color stop
    pub fn new(position: f32, color: Color) -> Self {
        Self { position, color }
    }
}

/// Gradient behavior outside the [0, 1] stop range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpreadMode {
    /// Clamp to edge stops
    #[default]
    Pad,
    /// Repeat the gradient
    Repeat,
    /// Mirror-repeat the gradient
    Reflect,
}

/// Gradient geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GradientKind {
    /// Color varies along the start-to-end axis
    Linear { start: Point, end: Point },
    /// Color varies between two circles
    Radial {
        start: Point,
        start_radius: f32,
        end: Point,
        end_radius: f32,
    },
}

/// A fill-ready gradient paint
#[derive(Debug, Clone, PartialEq)]
pub struct GradientPaint {
    pub kind: GradientKind,
    pub stops: Vec<ColorStop>,
    pub spread: SpreadMode,
    /// Gradient-space-to-device transform
    pub transform: Transform2D,
}

impl GradientPaint {
    pub fn new(
        kind: GradientKind,
        stops: Vec<ColorStop>,
        spread: SpreadMode,
        transform: Transform2D,
    ) -> Self {
        Self { kind, stops, spread, transform }
    }

    /// Returns true when the gradient has enough stops to paint
    pub fn is_valid(&self) -> bool {
        self.stops.len() >= 2
    }
}
