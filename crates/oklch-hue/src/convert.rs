//! Component-level conversion functions.
//!
//! Thin wrappers over the `From` chain in [`crate::color`] for callers that
//! hold bare numbers (form fields, query parameters, CSS values) rather than
//! color structs. Hue arguments are always in degrees.

use crate::color::{LinearRgb, Oklab, Oklch, Rgb, Srgb};

/// OKLCH components to Oklab.
pub fn oklch_to_oklab(l: f64, c: f64, h: f64) -> Oklab {
    Oklab::from(Oklch { l, c, h })
}

/// Oklab components to linear RGB, unclamped.
pub fn oklab_to_linear_rgb(l: f64, a: f64, b: f64) -> LinearRgb {
    LinearRgb::from(Oklab::new(l, a, b))
}

/// Linear RGB to gamma-encoded sRGB, unclamped and sign-preserving.
pub fn linear_rgb_to_rgb(r: f64, g: f64, b: f64) -> Srgb {
    Srgb::from(LinearRgb::new(r, g, b))
}

/// OKLCH to a displayable color. Gamut-mapped, never fails.
///
/// Lightness is clamped to 0.0..=1.0 and negative chroma treated as 0.
pub fn oklch_to_rgb(l: f64, c: f64, h: f64) -> Rgb {
    Oklch::new(l, c, h).to_rgb()
}

/// OKLCH to `#rrggbb`. Gamut-mapped, never fails.
pub fn oklch_to_hex(l: f64, c: f64, h: f64) -> String {
    oklch_to_rgb(l, c, h).to_hex()
}

/// Parse `#RRGGBB` / `RRGGBB`. `None` for anything else.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    hex.parse().ok()
}

/// 8-bit channels to linear RGB.
pub fn rgb_to_linear_rgb(r: u8, g: u8, b: u8) -> LinearRgb {
    LinearRgb::from(Rgb::new(r, g, b))
}

/// Linear RGB to Oklab.
pub fn linear_rgb_to_oklab(r: f64, g: f64, b: f64) -> Oklab {
    Oklab::from(LinearRgb::new(r, g, b))
}

/// Oklab to OKLCH with hue in `[0, 360)`.
pub fn oklab_to_oklch(l: f64, a: f64, b: f64) -> Oklch {
    Oklch::from(Oklab::new(l, a, b))
}

/// Parse a hex color straight to OKLCH. `None` on invalid input.
///
/// # Example
///
/// ```
/// use oklch_hue::convert::hex_to_oklch;
///
/// let red = hex_to_oklch("#ff0000").unwrap();
/// assert!((red.h - 29.23).abs() < 0.01);
///
/// assert!(hex_to_oklch("#f00").is_none());
/// ```
pub fn hex_to_oklch(hex: &str) -> Option<Oklch> {
    hex_to_rgb(hex).map(Oklch::from)
}
