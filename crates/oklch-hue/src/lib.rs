// Published matrix literals and filter constants are kept digit-for-digit
#![allow(clippy::excessive_precision, clippy::manual_range_contains)]

//! oklch-hue: OKLCH color conversion and dominant hue extraction
//!
//! Two independent tools share this crate:
//!
//! - **Conversion**: between OKLCH, Oklab, linear RGB, sRGB and hex, with
//!   gamut mapping so that any OKLCH input yields a displayable color.
//! - **Hue extraction**: one dominant hue in degrees from a buffer of RGBA
//!   pixels, for tinting a theme after an image.
//!
//! # Quick Start
//!
//! ```
//! use oklch_hue::{extract_dominant_hue, Oklch};
//!
//! let pixels = [255, 0, 0, 255, 250, 10, 0, 255];
//! let hue = extract_dominant_hue(&pixels);
//!
//! let primary = Oklch::new(0.55, 0.2, hue);
//! let hex = primary.to_hex();
//! assert_eq!(hex.len(), 7);
//! ```
//!
//! # Conversion Chain
//!
//! ```text
//! Oklch  --polar/cartesian-->  Oklab
//!   |                            |
//! gamut_map_oklch             3x3 matrix, cube, 3x3 matrix
//!   (chroma bisection)           |
//!                            LinearRgb
//!                                |
//!                         sRGB transfer (sign-preserving)
//!                                |
//!                              Srgb  --clamp, x255, round-->  Rgb  -->  #rrggbb
//! ```
//!
//! Every arrow has an inverse except gamut mapping and the final clamp. The
//! `From` impls in [`color`] are the primary API; [`convert`] offers the
//! same steps over bare numbers.
//!
//! # Gamut Mapping
//!
//! OKLCH can describe colors no sRGB display can show. [`gamut_map_oklch`]
//! keeps lightness and hue and searches for the largest chroma that fits,
//! so a too-vivid color becomes the most vivid displayable color of the same
//! brightness and hue, not a differently-hued clip.
//!
//! # Hue Extraction
//!
//! [`hue::HueExtractor`] combines a weighted, smoothed hue histogram with a
//! coarse color quantization vote. See its docs for the reconciliation
//! rule. [`extract_dominant_hue`] runs it with the default tuning.

pub mod color;
pub mod convert;
pub mod gamut;
pub mod hue;
pub mod shades;


pub use color::{
    hsl_to_hex, hsl_to_rgb, Hsl, LinearRgb, Oklab, Oklch, ParseColorError, Rgb, Srgb,
};
pub use gamut::{gamut_map_oklch, GAMUT_TOLERANCE};
pub use hue::{extract_dominant_hue, HueAnalysis, HueExtractor};
pub use shades::{shade_ladder, Shade};
