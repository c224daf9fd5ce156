//! OKLCH: the polar form of Oklab.
//!
//! - **L** (Lightness): same as Oklab L
//! - **C** (Chroma): colorfulness, distance from the neutral axis
//! - **h** (Hue): angle in degrees, `[0, 360)` when produced by conversion
//!
//! Holding L and h fixed while lowering C is how a color is pulled back into
//! the sRGB gamut (see [`crate::gamut`]).

use std::f64::consts::PI;

use super::linear_rgb::LinearRgb;
use super::oklab::Oklab;
use super::rgb::Rgb;
use super::srgb::Srgb;
use crate::gamut::gamut_map_oklch;

/// A color in OKLCH (Lightness, Chroma, Hue in degrees).
///
/// Fields are public and unchecked. [`Oklch::new`] enforces the usual
/// invariants: lightness clamped to 0.0..=1.0, chroma never negative.
///
/// # Example
///
/// ```
/// use oklch_hue::Oklch;
///
/// let blue = Oklch::new(0.5, 0.1, 250.0);
/// assert_eq!(blue.to_hex(), "#32669a");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    /// Lightness: 0.0 (black) to 1.0 (white)
    pub l: f64,
    /// Chroma: 0.0 (gray) upwards, rarely above 0.4
    pub c: f64,
    /// Hue angle in degrees
    pub h: f64,
}

impl Oklch {
    /// Create a color, clamping lightness to 0.0..=1.0 and chroma to >= 0.0.
    ///
    /// Hue is stored as given.
    #[inline]
    pub fn new(l: f64, c: f64, h: f64) -> Self {
        Self {
            l: l.clamp(0.0, 1.0),
            c: c.max(0.0),
            h,
        }
    }

    /// Gamut-map into sRGB and convert to an 8-bit color.
    ///
    /// Out-of-gamut colors lose chroma (lightness and hue are kept) until
    /// they fit; the result never leaves 0..=255.
    pub fn to_rgb(self) -> Rgb {
        let mapped = gamut_map_oklch(self);
        Srgb::from(LinearRgb::from(Oklab::from(mapped))).to_rgb()
    }

    /// Gamut-mapped `#rrggbb`.
    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }

    /// CSS functional notation, e.g. `oklch(0.55 0.27 169)`.
    pub fn to_css(self) -> String {
        format!("oklch({} {} {})", self.l, self.c, self.h)
    }
}

impl From<Oklab> for Oklch {
    /// Cartesian to polar. Hue is normalized into `[0, 360)`.
    ///
    /// Achromatic colors get `atan2(0, 0) = 0`, which is harmless since
    /// chroma is zero.
    fn from(lab: Oklab) -> Self {
        let c = lab.chroma();
        let mut h = lab.b.atan2(lab.a) * 180.0 / PI;
        if h < 0.0 {
            h += 360.0;
        }
        // -1e-15 + 360.0 rounds to exactly 360.0
        if h >= 360.0 {
            h -= 360.0;
        }
        Self { l: lab.l, c, h }
    }
}

impl From<Oklch> for Oklab {
    /// Polar to Cartesian: `a = C·cos(h)`, `b = C·sin(h)`.
    fn from(lch: Oklch) -> Self {
        let h = lch.h * PI / 180.0;
        Oklab::new(lch.l, lch.c * h.cos(), lch.c * h.sin())
    }
}

impl From<Rgb> for Oklch {
    fn from(rgb: Rgb) -> Self {
        Oklch::from(Oklab::from(LinearRgb::from(rgb)))
    }
}
