//! 2D affine transforms
//!
//! Coordinate transforms between pattern, content, and device space.

use std::f32::consts::PI;

/// 2D transformation matrix (3x3 homogeneous)
///
/// | a c e |
/// | b d f |
/// | 0 0 1 |
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    pub a: f32,  // scale-x
    pub b: f32,  // skew-y
    pub c: f32,  // skew-x
    pub d: f32,  // scale-y
    pub e: f32,  // translate-x
    pub f: f32,  // translate-y
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform2D {
    /// Identity transform (no transformation)
    pub const fn identity() -> Self {
        Self {
            a: 1.0, b: 0.0,
            c: 0.0, d: 1.0,
            e: 0.0, f: 0.0,
        }
    }

    /// Translation transform
    pub fn translate(tx: f32, ty: f32) -> Self {
        Self {
            a: 1.0, b: 0.0,
            c: 0.0, d: 1.0,
            e: tx, f: ty,
        }
    }

    /// Scale transform
    pub fn scale(sx: f32, sy: f32) -> Self {
        Self {
            a: sx, b: 0.0,
            c: 0.0, d: sy,
            e: 0.0, f: 0.0,
        }
    }

    /// Uniform scale
    pub fn scale_uniform(s: f32) -> Self {
        Self::scale(s, s)
    }

    /// Rotation transform (angle in radians)
    pub fn rotate(angle: f32) -> Self {
        let cos = angle.cos();
        let sin = angle.sin();
        Self {
            a: cos, b: sin,
            c: -sin, d: cos,
            e: 0.0, f: 0.0,
        }
    }

    /// Rotation in degrees
    pub fn rotate_deg(degrees: f32) -> Self {
        Self::rotate(degrees * PI / 180.0)
    }

    /// Matrix multiplication (combine transforms)
    /// Returns self * other (self applied after other)
    pub fn multiply(&self, other: &Transform2D) -> Self {
        Self {
            a: self.a * other.a + self.c * other.b,
            b: self.b * other.a + self.d * other.b,
            c: self.a * other.c + self.c * other.d,
            d: self.b * other.c + self.d * other.d,
            e: self.a * other.e + self.c * other.f + self.e,
            f: self.b * other.e + self.d * other.f + self.f,
        }
    }

    /// Chain another transform: self applied first, then other
    pub fn then(self, other: Transform2D) -> Self {
        other.multiply(&self)
    }

    /// Apply transform to a point
    pub fn transform_point(&self, x: f32, y: f32) -> (f32, f32) {
        (
            self.a * x + self.c * y + self.e,
            self.b * x + self.d * y + self.f,
        )
    }

    /// Determinant of the 2x2 linear part
    pub fn determinant(&self) -> f32 {
        self.a * self.d - self.b * self.c
    }

    /// Get the inverse transform (if possible)
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det.abs() < 1e-10 {
            return None; // Singular matrix
        }
        let inv_det = 1.0 / det;
        Some(Self {
            a: self.d * inv_det,
            b: -self.b * inv_det,
            c: -self.c * inv_det,
            d: self.a * inv_det,
            e: (self.c * self.f - self.d * self.e) * inv_det,
            f: (self.b * self.e - self.a * self.f) * inv_det,
        })
    }

    /// Check if this is the identity transform
    pub fn is_identity(&self) -> bool {
        (self.a - 1.0).abs() < 1e-6 &&
        self.b.abs() < 1e-6 &&
        self.c.abs() < 1e-6 &&
        (self.d - 1.0).abs() < 1e-6 &&
        self.e.abs() < 1e-6 &&
        self.f.abs() < 1e-6
    }

    /// Check if transform is only translation
    pub fn is_translation_only(&self) -> bool {
        (self.a - 1.0).abs() < 1e-6 &&
        self.b.abs() < 1e-6 &&
        self.c.abs() < 1e-6 &&
        (self.d - 1.0).abs() < 1e-6
    }

    /// Convert to tiny-skia Transform
    pub fn to_tiny_skia(&self) -> tiny_skia::Transform {
        tiny_skia::Transform::from_row(self.a, self.b, self.c, self.d, self.e, self.f)
    }
}
