//! Pattern color space
//!
//! Resolves a pattern-named color into a fill-ready paint: look the
//! pattern up, compose its matrix with the content transform, and hand
//! off to the tile renderer or the shading backend.

use std::fmt;
use std::sync::Arc;

use folio_render::{Paint, Transform2D};

use crate::ColorSpaceError;
use crate::color_space::{ColorSpace, ColorValue};
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::pattern::registry::PatternRegistry;
use crate::pattern::{PaintMode, PatternDefinition, ShadingDescriptor, TilingPattern};

/// Tint for an uncolored tiling pattern
///
/// Every mark of the tile is drawn with the single color obtained by
/// interpreting `components` in `color_space`.
#[derive(Clone, Copy)]
pub struct Tint<'a> {
    /// Space the tint components are expressed in
    pub color_space: &'a Arc<dyn ColorSpace>,
    /// Tint component values from the pattern-typed color
    pub components: &'a [f32],
}

/// Renders a tiling pattern's content stream into a tileable paint
pub trait TileRenderer: Send + Sync {
    /// Render one tile cell.
    ///
    /// `pattern_to_device` places pattern space on the page;
    /// `device_transform` maps page space to the raster. `tint` is present
    /// for uncolored patterns.
    fn render_tile(
        &self,
        pattern: &TilingPattern,
        pattern_to_device: Transform2D,
        device_transform: Transform2D,
        tint: Option<&Tint<'_>>,
    ) -> Result<Paint, ColorSpaceError>;
}

/// Builds a gradient paint from a shading descriptor
pub trait ShadingPaintBuilder: Send + Sync {
    fn build_paint(
        &self,
        shading: &ShadingDescriptor,
        transform: Transform2D,
    ) -> Result<Paint, ColorSpaceError>;
}

/// External capabilities a resolve call delegates to
#[derive(Clone, Copy)]
pub struct PaintBackends<'a> {
    pub tile_renderer: &'a dyn TileRenderer,
    pub shading_builder: &'a dyn ShadingPaintBuilder,
    pub diagnostics: &'a dyn DiagnosticSink,
}

/// A pattern color space: a named set of pattern definitions
///
/// Values of this space carry a pattern name instead of numeric
/// components; the numeric entry points of [`ColorSpace`] are rejected.
/// The space is immutable after construction and may be shared across
/// rendering threads.
#[derive(Clone)]
pub struct PatternColorSpace {
    registry: PatternRegistry,
    base: Option<Arc<dyn ColorSpace>>,
}

impl PatternColorSpace {
    /// Color space for colored patterns
    pub fn new(registry: PatternRegistry) -> Self {
        Self { registry, base: None }
    }

    /// Color space for uncolored tiling patterns
    ///
    /// `base` interprets the tint components carried by color values.
    pub fn with_base(registry: PatternRegistry, base: Arc<dyn ColorSpace>) -> Self {
        Self { registry, base: Some(base) }
    }

    pub fn registry(&self) -> &PatternRegistry {
        &self.registry
    }

    /// Base color space, present for uncolored tiling pattern spaces
    pub fn base(&self) -> Option<&Arc<dyn ColorSpace>> {
        self.base.as_ref()
    }

    /// Definition referenced by a pattern-typed color
    pub fn pattern(&self, color: &ColorValue) -> Result<&PatternDefinition, ColorSpaceError> {
        self.registry.lookup(color.pattern_name().unwrap_or(""))
    }

    /// Resolve a pattern-typed color into a fill-ready paint.
    ///
    /// `content_transform` is the transform in effect at the point the
    /// content stream references the pattern; `device_transform` maps page
    /// space to the raster. Malformed patterns degrade to a transparent
    /// paint and a diagnostic; only an unknown pattern name is a hard
    /// error. Never mutates the registry, so concurrent calls against a
    /// shared space are safe.
    pub fn resolve_paint(
        &self,
        color: &ColorValue,
        content_transform: Transform2D,
        device_transform: Transform2D,
        backends: &PaintBackends<'_>,
    ) -> Result<Paint, ColorSpaceError> {
        let name = color.pattern_name().unwrap_or("");
        let definition = self.registry.lookup(name)?;

        match definition {
            PatternDefinition::Tiling(tiling) => {
                let matrix = effective_transform(tiling.matrix, content_transform);
                match tiling.paint_mode {
                    PaintMode::Colored => {
                        // Tile content specifies its own colors; no tint.
                        backends
                            .tile_renderer
                            .render_tile(tiling, matrix, device_transform, None)
                    }
                    PaintMode::Uncolored => {
                        let Some(base) = &self.base else {
                            backends.diagnostics.report(Diagnostic::MissingTintSpace {
                                pattern: name.to_string(),
                            });
                            return Ok(Paint::transparent());
                        };
                        let tint = Tint {
                            color_space: base,
                            components: color.components(),
                        };
                        backends
                            .tile_renderer
                            .render_tile(tiling, matrix, device_transform, Some(&tint))
                    }
                }
            }
            PatternDefinition::Shading(pattern) => {
                let Some(shading) = &pattern.shading else {
                    backends.diagnostics.report(Diagnostic::MissingShading {
                        pattern: name.to_string(),
                    });
                    return Ok(Paint::transparent());
                };
                let matrix = effective_transform(pattern.matrix, content_transform);
                backends.shading_builder.build_paint(shading, matrix)
            }
        }
    }
}

/// Pattern matrix applied first, then the content transform
fn effective_transform(local: Option<Transform2D>, content: Transform2D) -> Transform2D {
    match local {
        None => content,
        Some(matrix) => matrix.then(content),
    }
}

impl ColorSpace for PatternColorSpace {
    fn name(&self) -> &str {
        "Pattern"
    }

    fn num_components(&self) -> Result<usize, ColorSpaceError> {
        Err(ColorSpaceError::Unsupported { operation: "component count" })
    }

    fn default_decode(&self, _bits_per_component: u8) -> Result<Vec<f32>, ColorSpaceError> {
        Err(ColorSpaceError::Unsupported { operation: "default decode" })
    }

    fn to_rgb(&self, _components: &[f32]) -> Result<[f32; 3], ColorSpaceError> {
        Err(ColorSpaceError::Unsupported { operation: "RGB conversion" })
    }

    fn initial_color(&self) -> ColorValue {
        ColorValue::empty_pattern()
    }
}

impl fmt::Debug for PatternColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternColorSpace")
            .field("registry", &self.registry)
            .field("base", &self.base.as_ref().map(|base| base.name()))
            .finish()
    }
}
