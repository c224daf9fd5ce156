//! HSL, the cylindrical model the hue extractor thinks in.
//!
//! Two independent conversions live here. [`Hsl::from`] is the analysis
//! direction used per pixel by [`crate::hue`]. [`hsl_to_rgb`] is the
//! synthesis direction used to render generated colors, taking the
//! CSS-style degree/percent arguments.

use super::rgb::Rgb;
use super::round_half_up;

/// A color in HSL.
///
/// `h` is a fraction of a full turn in `[0, 1)`, not degrees. Use
/// [`Hsl::hue_degree`] for the integer bucket the extractor works with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue as a fraction of a turn
    pub h: f64,
    /// Saturation, 0.0..=1.0
    pub s: f64,
    /// Lightness, 0.0..=1.0
    pub l: f64,
}

impl Hsl {
    /// Integer hue bucket `floor(h * 360) mod 360`.
    #[inline]
    pub fn hue_degree(self) -> usize {
        ((self.h * 360.0).floor() as usize) % 360
    }
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        let r = f64::from(rgb.r) / 255.0;
        let g = f64::from(rgb.g) / 255.0;
        let b = f64::from(rgb.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Self { h: 0.0, s: 0.0, l };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        // Ties resolve in r, g, b order
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Self { h: h / 6.0, s, l }
    }
}

/// Convert hue in degrees, saturation and lightness in percent to RGB.
///
/// # Example
///
/// ```
/// use oklch_hue::{hsl_to_rgb, Rgb};
///
/// assert_eq!(hsl_to_rgb(0.0, 100.0, 50.0), Rgb::new(255, 0, 0));
/// assert_eq!(hsl_to_rgb(120.0, 100.0, 25.0), Rgb::new(0, 128, 0));
/// ```
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> Rgb {
    let l = lightness / 100.0;
    let a = saturation * l.min(1.0 - l) / 100.0;

    let channel = |n: f64| {
        let k = (n + hue / 30.0).rem_euclid(12.0);
        let color = l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
        round_half_up((255.0 * color).clamp(0.0, 255.0)) as u8
    };

    Rgb::new(channel(0.0), channel(8.0), channel(4.0))
}

/// [`hsl_to_rgb`] rendered as `#rrggbb`.
pub fn hsl_to_hex(hue: f64, saturation: f64, lightness: f64) -> String {
    hsl_to_rgb(hue, saturation, lightness).to_hex()
}
