//! Gamut mapping from OKLCH into sRGB.
//!
//! A color outside sRGB is brought inside by reducing chroma only. Lightness
//! and hue are preserved, so a mapped color keeps its perceived brightness
//! and its position on the color wheel.
//!
//! The search is a fixed-length bisection over `[0, C]`. Twenty iterations
//! narrow the interval to `C / 2^20`, far below one 8-bit step.

use crate::color::{LinearRgb, Oklab, Oklch, Srgb};

/// Slack allowed on each gamma-encoded channel when testing gamut.
///
/// Absorbs floating-point error from the matrix round trip so that colors
/// on the boundary (pure primaries, white) count as displayable.
pub const GAMUT_TOLERANCE: f64 = 5e-6;

/// Number of bisection steps in [`gamut_map_oklch`].
pub const GAMUT_SEARCH_ITERATIONS: usize = 20;

/// Whether a gamma-encoded color is displayable within [`GAMUT_TOLERANCE`].
#[inline]
pub fn is_in_gamut(srgb: Srgb) -> bool {
    srgb.is_in_gamut(GAMUT_TOLERANCE)
}

/// Gamma-encoded sRGB for an OKLCH color, unclamped.
#[inline]
fn to_srgb(color: Oklch) -> Srgb {
    Srgb::from(LinearRgb::from(Oklab::from(color)))
}

/// Map an OKLCH color into the sRGB gamut by lowering chroma.
///
/// - `l <= 0` or `l >= 1`: black or white, chroma forced to 0
/// - already displayable: returned unchanged
/// - otherwise: the largest chroma found by bisection that is displayable
///
/// Hue is never modified. The input is not required to be normalized;
/// NaN or negative chroma simply never tests in gamut and maps to 0.
///
/// # Example
///
/// ```
/// use oklch_hue::{gamut_map_oklch, Oklch};
///
/// let vivid = Oklch { l: 0.7, c: 0.4, h: 30.0 };
/// let mapped = gamut_map_oklch(vivid);
///
/// assert_eq!(mapped.l, 0.7);
/// assert_eq!(mapped.h, 30.0);
/// assert!(mapped.c < 0.2);
/// ```
pub fn gamut_map_oklch(color: Oklch) -> Oklch {
    let Oklch { l, c, h } = color;

    if l <= 0.0 {
        return Oklch { l: 0.0, c: 0.0, h };
    }
    if l >= 1.0 {
        return Oklch { l: 1.0, c: 0.0, h };
    }

    if is_in_gamut(to_srgb(color)) {
        return color;
    }

    let mut low = 0.0;
    let mut high = c;
    let mut best_chroma = 0.0;

    for _ in 0..GAMUT_SEARCH_ITERATIONS {
        let mid = (low + high) / 2.0;
        if is_in_gamut(to_srgb(Oklch { l, c: mid, h })) {
            best_chroma = mid;
            low = mid;
        } else {
            high = mid;
        }
    }

    Oklch {
        l,
        c: best_chroma,
        h,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lightness_extremes_drop_chroma() {
        let black = gamut_map_oklch(Oklch { l: 0.0, c: 0.3, h: 120.0 });
        assert_eq!(black, Oklch { l: 0.0, c: 0.0, h: 120.0 });

        let white = gamut_map_oklch(Oklch { l: 1.0, c: 0.3, h: 120.0 });
        assert_eq!(white, Oklch { l: 1.0, c: 0.0, h: 120.0 });

        let below = gamut_map_oklch(Oklch { l: -0.5, c: 0.1, h: 10.0 });
        assert_eq!(below, Oklch { l: 0.0, c: 0.0, h: 10.0 });

        let above = gamut_map_oklch(Oklch { l: 1.5, c: 0.1, h: 10.0 });
        assert_eq!(above, Oklch { l: 1.0, c: 0.0, h: 10.0 });
    }

    #[test]
    fn test_in_gamut_is_identity() {
        let color = Oklch { l: 0.5, c: 0.1, h: 250.0 };
        assert_eq!(gamut_map_oklch(color), color);

        let gray = Oklch { l: 0.4, c: 0.0, h: 0.0 };
        assert_eq!(gamut_map_oklch(gray), gray);
    }

    #[test]
    fn test_out_of_gamut_reduces_chroma_only() {
        let color = Oklch { l: 0.7, c: 0.4, h: 30.0 };
        let mapped = gamut_map_oklch(color);

        assert_eq!(mapped.l, color.l);
        assert_eq!(mapped.h, color.h);
        assert!(mapped.c < color.c);
        // Reference value for this search: 0.19151...
        assert!((mapped.c - 0.19151).abs() < 1e-4, "c = {}", mapped.c);
        assert!(is_in_gamut(to_srgb(mapped)));
    }

    #[test]
    fn test_mapped_result_is_near_boundary() {
        // Slightly more chroma than the result must leave the gamut
        let mapped = gamut_map_oklch(Oklch { l: 0.6, c: 0.35, h: 145.0 });
        let beyond = Oklch {
            c: mapped.c + 0.001,
            ..mapped
        };
        assert!(is_in_gamut(to_srgb(mapped)));
        assert!(!is_in_gamut(to_srgb(beyond)));
    }

    #[test]
    fn test_primaries_count_as_in_gamut() {
        use crate::color::Rgb;

        for rgb in [
            Rgb::new(255, 0, 0),
            Rgb::new(0, 255, 0),
            Rgb::new(0, 0, 255),
            Rgb::new(255, 255, 255),
        ] {
            let lch = Oklch::from(rgb);
            assert!(
                is_in_gamut(to_srgb(lch)),
                "{rgb:?} should be displayable as {lch:?}"
            );
        }
    }

    #[test]
    fn test_nan_chroma_maps_to_zero() {
        let mapped = gamut_map_oklch(Oklch { l: 0.5, c: f64::NAN, h: 0.0 });
        assert_eq!(mapped.c, 0.0);
    }
}
