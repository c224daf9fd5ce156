//! Shade ladders and slider ramps.
//!
//! A shade ladder walks lightness up and down from a base color while
//! keeping chroma and hue. Ramps sample one OKLCH axis at fixed stops, which
//! is what a color picker paints behind its sliders.
//!
//! Every sample goes through [`Oklch::to_rgb`], so all output is gamut
//! mapped.

use crate::color::{Oklch, Rgb};

/// Lightness offsets of the default nine-step ladder.
pub const DEFAULT_SHADE_OFFSETS: [f64; 9] = [-0.4, -0.3, -0.2, -0.1, 0.0, 0.1, 0.2, 0.3, 0.4];

/// Hue stops in degrees. Both ends are red so the ramp closes.
pub const HUE_STOPS: [f64; 7] = [0.0, 60.0, 120.0, 180.0, 240.0, 300.0, 360.0];

/// Chroma stops.
pub const CHROMA_STOPS: [f64; 7] = [0.0, 0.05, 0.1, 0.15, 0.2, 0.25, 0.3];

/// Lightness stops.
pub const LIGHTNESS_STOPS: [f64; 6] = [0.0, 0.2, 0.4, 0.6, 0.8, 1.0];

/// Above this lightness a shade gets dark text.
const DARK_TEXT_THRESHOLD: f64 = 0.6;

/// One step of a shade ladder.
#[derive(Debug, Clone, PartialEq)]
pub struct Shade {
    /// Offset applied to the base lightness
    pub offset: f64,
    /// Requested color, lightness already clamped to 0.0..=1.0
    pub color: Oklch,
    /// Gamut-mapped display color
    pub rgb: Rgb,
    /// Readable text color on top of this shade
    pub text: Rgb,
}

impl Shade {
    /// `#rrggbb` of the display color.
    pub fn hex(&self) -> String {
        self.rgb.to_hex()
    }

    /// Two-decimal `oklch(l c h)` label.
    pub fn label(&self) -> String {
        format!(
            "oklch({:.2} {:.2} {})",
            self.color.l, self.color.c, self.color.h
        )
    }
}

/// Build a ladder of shades around `base`, one per offset.
///
/// Lightness is clamped after the offset is applied, so offsets that run
/// past black or white repeat the end color.
pub fn shade_ladder(base: Oklch, offsets: &[f64]) -> Vec<Shade> {
    offsets
        .iter()
        .map(|&offset| {
            let l = (base.l + offset).clamp(0.0, 1.0);
            let color = Oklch { l, ..base };
            let text = if l > DARK_TEXT_THRESHOLD {
                Rgb::new(0, 0, 0)
            } else {
                Rgb::new(255, 255, 255)
            };
            Shade {
                offset,
                color,
                rgb: color.to_rgb(),
                text,
            }
        })
        .collect()
}

/// Sample hues at [`HUE_STOPS`] for fixed lightness and chroma.
pub fn hue_ramp(l: f64, c: f64) -> Vec<Rgb> {
    HUE_STOPS
        .iter()
        .map(|&h| Oklch::new(l, c, h).to_rgb())
        .collect()
}

/// Sample chroma at [`CHROMA_STOPS`] for fixed lightness and hue.
pub fn chroma_ramp(l: f64, h: f64) -> Vec<Rgb> {
    CHROMA_STOPS
        .iter()
        .map(|&c| Oklch::new(l, c, h).to_rgb())
        .collect()
}

/// Sample lightness at [`LIGHTNESS_STOPS`] for fixed chroma and hue.
pub fn lightness_ramp(c: f64, h: f64) -> Vec<Rgb> {
    LIGHTNESS_STOPS
        .iter()
        .map(|&l| Oklch::new(l, c, h).to_rgb())
        .collect()
}

/// Left-to-right CSS gradient through the given stops.
///
/// ```
/// use oklch_hue::{shades::linear_gradient, Rgb};
///
/// let css = linear_gradient(&[Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]);
/// assert_eq!(css, "linear-gradient(to right, rgb(0, 0, 0), rgb(255, 255, 255))");
/// ```
pub fn linear_gradient(stops: &[Rgb]) -> String {
    let stops: Vec<String> = stops.iter().map(|rgb| rgb.to_css()).collect();
    format!("linear-gradient(to right, {})", stops.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ladder_keeps_chroma_and_hue() {
        let base = Oklch::new(0.5, 0.1, 250.0);
        let ladder = shade_ladder(base, &DEFAULT_SHADE_OFFSETS);

        assert_eq!(ladder.len(), 9);
        for shade in &ladder {
            assert_eq!(shade.color.c, 0.1);
            assert_eq!(shade.color.h, 250.0);
        }
        assert_eq!(ladder[4].hex(), "#32669a");
    }

    #[test]
    fn test_ladder_clamps_lightness() {
        let base = Oklch::new(0.9, 0.05, 30.0);
        let ladder = shade_ladder(base, &DEFAULT_SHADE_OFFSETS);

        let top = ladder.last().unwrap();
        assert_eq!(top.color.l, 1.0);
        assert_eq!(top.rgb, Rgb::new(255, 255, 255));

        let dark = shade_ladder(Oklch::new(0.1, 0.05, 30.0), &[-0.4]);
        assert_eq!(dark[0].color.l, 0.0);
        assert_eq!(dark[0].rgb, Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_ladder_lightness_is_monotonic() {
        let ladder = shade_ladder(Oklch::new(0.55, 0.12, 140.0), &DEFAULT_SHADE_OFFSETS);
        for pair in ladder.windows(2) {
            assert!(pair[0].color.l <= pair[1].color.l);
        }
    }

    #[test]
    fn test_text_color_flips_above_threshold() {
        let ladder = shade_ladder(Oklch::new(0.6, 0.1, 0.0), &[0.0, 0.1]);
        assert_eq!(ladder[0].text, Rgb::new(255, 255, 255));
        assert_eq!(ladder[1].text, Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_label() {
        let ladder = shade_ladder(Oklch::new(0.5, 0.1, 250.0), &[0.2]);
        assert_eq!(ladder[0].label(), "oklch(0.70 0.10 250)");
    }

    #[test]
    fn test_hue_ramp_closes() {
        let ramp = hue_ramp(0.7, 0.1);
        assert_eq!(ramp.len(), HUE_STOPS.len());
        assert_eq!(ramp.first(), ramp.last());
    }

    #[test]
    fn test_chroma_ramp_starts_gray() {
        let ramp = chroma_ramp(0.6, 120.0);
        assert_eq!(ramp.len(), CHROMA_STOPS.len());
        let gray = ramp[0];
        assert_eq!(gray.r, gray.g);
        assert_eq!(gray.g, gray.b);
    }

    #[test]
    fn test_lightness_ramp_ends() {
        let ramp = lightness_ramp(0.2, 300.0);
        assert_eq!(ramp.len(), LIGHTNESS_STOPS.len());
        assert_eq!(ramp[0], Rgb::new(0, 0, 0));
        assert_eq!(ramp[5], Rgb::new(255, 255, 255));
    }
}
