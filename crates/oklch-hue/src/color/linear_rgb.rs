//! Linear RGB color type
//!
//! Linear RGB is the space the Oklab matrices are defined against. Values
//! are unbounded: a component outside 0.0..=1.0 means the color cannot be
//! shown on an sRGB display.

use super::rgb::Rgb;
use super::transfer::srgb_to_linear;

/// A color in linear-light sRGB primaries.
///
/// Values are not clamped. Gamut mapping relies on seeing components
/// below 0.0 or above 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f64,
    /// Green channel (linear light intensity)
    pub g: f64,
    /// Blue channel (linear light intensity)
    pub b: f64,
}

impl LinearRgb {
    /// Create a new LinearRgb color from linear RGB values.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for LinearRgb {
    /// Normalize each 8-bit channel by 255, then apply the inverse sRGB
    /// transfer function.
    fn from(rgb: Rgb) -> Self {
        Self {
            r: srgb_to_linear(f64::from(rgb.r) / 255.0),
            g: srgb_to_linear(f64::from(rgb.g) / 255.0),
            b: srgb_to_linear(f64::from(rgb.b) / 255.0),
        }
    }
}
