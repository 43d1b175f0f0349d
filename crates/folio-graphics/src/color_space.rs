//! Color spaces and color values
//!
//! Device spaces convert numeric components to RGB. The pattern space in
//! [`crate::pattern::space`] is special: its values name a pattern instead
//! of encoding components, and it rejects the numeric entry points.

use crate::ColorSpaceError;

/// A color value: component values plus, in pattern space, a pattern name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorValue {
    components: Vec<f32>,
    pattern_name: Option<String>,
}

impl ColorValue {
    /// Color value from numeric components
    pub fn new(components: &[f32]) -> Self {
        Self {
            components: components.to_vec(),
            pattern_name: None,
        }
    }

    /// Color value naming a pattern
    pub fn pattern(name: impl Into<String>) -> Self {
        Self {
            components: Vec::new(),
            pattern_name: Some(name.into()),
        }
    }

    /// Color value naming an uncolored pattern, with tint components
    pub fn tinted(name: impl Into<String>, components: &[f32]) -> Self {
        Self {
            components: components.to_vec(),
            pattern_name: Some(name.into()),
        }
    }

    /// Initial color of a pattern space: no components, no pattern selected
    pub fn empty_pattern() -> Self {
        Self::default()
    }

    /// Numeric component values
    pub fn components(&self) -> &[f32] {
        &self.components
    }

    /// Name of the referenced pattern, for pattern-space values
    pub fn pattern_name(&self) -> Option<&str> {
        self.pattern_name.as_deref()
    }

    /// Does this value reference a pattern?
    pub fn is_pattern(&self) -> bool {
        self.pattern_name.is_some()
    }
}

/// A color space
pub trait ColorSpace: Send + Sync {
    /// Color space name as it appears in document resources
    fn name(&self) -> &str;

    /// Number of components in a color value
    fn num_components(&self) -> Result<usize, ColorSpaceError>;

    /// Default decode range, two entries per component
    fn default_decode(&self, bits_per_component: u8) -> Result<Vec<f32>, ColorSpaceError>;

    /// Convert component values to RGB in [0, 1]
    fn to_rgb(&self, components: &[f32]) -> Result<[f32; 3], ColorSpaceError>;

    /// Color selected before any color operator has run
    fn initial_color(&self) -> ColorValue;
}

fn check_arity(expected: usize, components: &[f32]) -> Result<(), ColorSpaceError> {
    if components.len() != expected {
        return Err(ColorSpaceError::InvalidComponents {
            expected,
            actual: components.len(),
        });
    }
    Ok(())
}

/// Device gray: one luminance component
#[derive(Debug, Clone, Copy, Default)]
pub struct DeviceGray;

impl ColorSpace for DeviceGray {
    fn name(&self) -> &str {
        "DeviceGray"
    }

    fn num_components(&self) -> Result<usize, ColorSpaceError> {
        Ok(1)
    }

    fn default_decode(&self, _bits_per_component: u8) -> Result<Vec<f32>, ColorSpaceError> {
        Ok(vec![0.0, 1.0])
    }

    fn to_rgb(&self, components: &[f32]) -> Result<[f32; 3], ColorSpaceError> {
        check_arity(1, components)?;
        let gray = components[0].clamp(0.0, 1.0);
        Ok([gray, gray, gray])
    }

    fn initial_color(&self) -> ColorValue {
        ColorValue::new(&[0.0])
    }
}

/// Device RGB: red, green, and blue components
#[derive(Debug, Clone, Copy, Default)]
pub struct DeviceRgb;

impl ColorSpace for DeviceRgb {
    fn name(&self) -> &str {
        "DeviceRGB"
    }

    fn num_components(&self) -> Result<usize, ColorSpaceError> {
        Ok(3)
    }

    fn default_decode(&self, _bits_per_component: u8) -> Result<Vec<f32>, ColorSpaceError> {
        Ok(vec![0.0, 1.0, 0.0, 1.0, 0.0, 1.0])
    }

    fn to_rgb(&self, components: &[f32]) -> Result<[f32; 3], ColorSpaceError> {
        check_arity(3, components)?;
        Ok([
            components[0].clamp(0.0, 1.0),
            components[1].clamp(0.0, 1.0),
            components[2].clamp(0.0, 1.0),
        ])
    }

    fn initial_color(&self) -> ColorValue {
        ColorValue::new(&[0.0, 0.0, 0.0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_value_accessors() {
        let plain = ColorValue::new(&[0.1, 0.2]);
        assert_eq!(plain.components(), &[0.1, 0.2]);
        assert!(!plain.is_pattern());

        let tinted = ColorValue::tinted("P1", &[0.5]);
        assert_eq!(tinted.pattern_name(), Some("P1"));
        assert_eq!(tinted.components(), &[0.5]);
    }

    #[test]
    fn test_empty_pattern_has_no_name() {
        let empty = ColorValue::empty_pattern();
        assert_eq!(empty.pattern_name(), None);
        assert!(empty.components().is_empty());
    }

    #[test]
    fn test_device_gray_to_rgb() {
        assert_eq!(DeviceGray.to_rgb(&[0.25]).unwrap(), [0.25, 0.25, 0.25]);
        assert_eq!(DeviceGray.to_rgb(&[2.0]).unwrap(), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_device_rgb_arity() {
        let err = DeviceRgb.to_rgb(&[0.1]).unwrap_err();
        assert_eq!(err, ColorSpaceError::InvalidComponents { expected: 3, actual: 1 });
    }

    #[test]
    fn test_device_decode_ranges() {
        assert_eq!(DeviceGray.default_decode(8).unwrap(), vec![0.0, 1.0]);
        assert_eq!(DeviceRgb.default_decode(8).unwrap().len(), 6);
    }

    #[test]
    fn test_device_initial_colors() {
        assert_eq!(DeviceGray.initial_color(), ColorValue::new(&[0.0]));
        assert_eq!(DeviceRgb.initial_color(), ColorValue::new(&[0.0, 0.0, 0.0]));
    }
}
