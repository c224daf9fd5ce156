//! Color types and conversion utilities
//!
//! Every conversion is a `From` impl between two value types, so the chain
//! from a perceptual OKLCH color to a displayable 8-bit color reads as a
//! sequence of `from` calls.
//!
//! # Color Spaces
//!
//! - **Oklch**: Lightness, chroma, hue. The space colors are designed in.
//! - **Oklab**: Cartesian form of OKLCH.
//! - **LinearRgb**: Linear light intensity. The Oklab matrices target it.
//! - **Srgb**: Gamma-encoded channels as `f64`, where gamut is checked.
//! - **Rgb**: 8-bit channels and their `#rrggbb` form.
//! - **Hsl**: Used for pixel analysis and generated art.
//!
//! # Example
//!
//! ```
//! use oklch_hue::{LinearRgb, Oklab, Oklch, Rgb};
//!
//! let rgb: Rgb = "#3366cc".parse().unwrap();
//! let lch = Oklch::from(Oklab::from(LinearRgb::from(rgb)));
//!
//! // In-gamut colors come back exactly
//! assert_eq!(lch.to_rgb(), rgb);
//! ```

mod error;
mod hsl;
mod linear_rgb;
mod oklab;
mod oklch;
mod rgb;
mod srgb;
mod transfer;

pub use error::ParseColorError;
pub use hsl::{hsl_to_hex, hsl_to_rgb, Hsl};
pub use linear_rgb::LinearRgb;
pub use oklab::Oklab;
pub use oklch::Oklch;
pub use rgb::Rgb;
pub use srgb::Srgb;
pub use transfer::{linear_to_srgb, srgb_to_linear};

/// Round to nearest, halves towards positive infinity.
#[inline]
pub(crate) fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}
