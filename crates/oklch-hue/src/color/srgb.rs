//! Gamma-corrected sRGB with real-valued channels.
//!
//! This is the step between linear light and the final 8-bit [`Rgb`]. The
//! channels are left unclamped so the gamut check can inspect them.

use super::linear_rgb::LinearRgb;
use super::rgb::Rgb;
use super::round_half_up;
use super::transfer::linear_to_srgb;

/// A gamma-encoded sRGB color with `f64` channels.
///
/// Displayable colors have every channel in 0.0..=1.0. Out-of-gamut colors
/// keep their excess, including negative values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    /// Red channel (gamma-corrected)
    pub r: f64,
    /// Green channel (gamma-corrected)
    pub g: f64,
    /// Blue channel (gamma-corrected)
    pub b: f64,
}

impl Srgb {
    /// Create a new Srgb color from float values.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Whether every channel lies within `[-tolerance, 1 + tolerance]`.
    ///
    /// NaN channels are never in gamut.
    #[inline]
    pub fn is_in_gamut(self, tolerance: f64) -> bool {
        let inside = |c: f64| c >= -tolerance && c <= 1.0 + tolerance;
        inside(self.r) && inside(self.g) && inside(self.b)
    }

    /// Clamp to 0.0..=1.0, scale to 0..=255 and round to the nearest integer.
    ///
    /// # Example
    /// ```
    /// use oklch_hue::{Rgb, Srgb};
    ///
    /// let color = Srgb::new(1.2, 0.5, -0.1);
    /// assert_eq!(color.to_rgb(), Rgb::new(255, 128, 0));
    /// ```
    #[inline]
    pub fn to_rgb(self) -> Rgb {
        let to_u8 = |c: f64| round_half_up(c.clamp(0.0, 1.0) * 255.0) as u8;
        Rgb::new(to_u8(self.r), to_u8(self.g), to_u8(self.b))
    }
}

impl From<LinearRgb> for Srgb {
    /// Apply the sRGB transfer function per channel without clamping.
    fn from(linear: LinearRgb) -> Self {
        Self {
            r: linear_to_srgb(linear.r),
            g: linear_to_srgb(linear.g),
            b: linear_to_srgb(linear.b),
        }
    }
}
