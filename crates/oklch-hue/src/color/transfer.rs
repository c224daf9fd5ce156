//! sRGB transfer functions (IEC 61966-2-1).
//!
//! Exact piecewise formulas evaluated in `f64`. The encoding direction is
//! sign-preserving so that out-of-gamut linear values stay out of gamut
//! after encoding, which is what the gamut test relies on.

/// Linear segment threshold on the encoded side.
const SRGB_KNEE: f64 = 0.04045;

/// Linear segment threshold on the linear side.
const LINEAR_KNEE: f64 = 0.0031308;

/// Decode a gamma-encoded sRGB component (0.0..=1.0) to linear light.
#[inline]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= SRGB_KNEE {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Encode a linear component to gamma-corrected sRGB.
///
/// Negative inputs are mirrored (`sign(c) * encode(|c|)`) instead of being
/// clamped.
#[inline]
pub fn linear_to_srgb(c: f64) -> f64 {
    let abs = c.abs();
    if abs > LINEAR_KNEE {
        c.signum() * (1.055 * abs.powf(1.0 / 2.4) - 0.055)
    } else {
        12.92 * c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert!(srgb_to_linear(0.0).abs() < 1e-12);
        assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-12);
        assert!(linear_to_srgb(0.0).abs() < 1e-12);
        assert!((linear_to_srgb(1.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_known_values() {
        // ((0.5 + 0.055) / 1.055)^2.4 = 0.214041...
        assert!((srgb_to_linear(0.5) - 0.214041).abs() < 1e-6);
        // 1.055 * 0.5^(1/2.4) - 0.055 = 0.735356...
        assert!((linear_to_srgb(0.5) - 0.735356).abs() < 1e-6);
    }

    #[test]
    fn test_negative_inputs_preserve_sign() {
        let encoded = linear_to_srgb(-0.5);
        assert!((encoded + linear_to_srgb(0.5)).abs() < 1e-12);

        // Inside the linear segment the slope applies to the signed value
        assert!((linear_to_srgb(-0.001) + 0.01292).abs() < 1e-12);
    }

    #[test]
    fn test_round_trip() {
        for i in 0..=1000 {
            let c = i as f64 / 1000.0;
            let back = linear_to_srgb(srgb_to_linear(c));
            assert!((back - c).abs() < 1e-12, "round trip failed at {c}: {back}");
        }
    }

    #[test]
    fn test_monotonicity() {
        let mut prev = srgb_to_linear(0.0);
        for i in 1..=1000 {
            let curr = srgb_to_linear(i as f64 / 1000.0);
            assert!(curr >= prev, "srgb_to_linear not monotonic at {i}");
            prev = curr;
        }

        let mut prev = linear_to_srgb(-1.0);
        for i in -999..=1000 {
            let curr = linear_to_srgb(i as f64 / 1000.0);
            assert!(curr >= prev, "linear_to_srgb not monotonic at {i}");
            prev = curr;
        }
    }
}
