//! Dominant hue extraction
//!
//! Reduces an image to one hue on the color wheel, suitable for tinting a
//! theme around it. Near-black, near-white, transparent, washed-out and
//! extreme-lightness pixels are ignored, so the result reflects the colorful
//! subject rather than the background.
//!
//! # Example
//!
//! ```
//! use oklch_hue::extract_dominant_hue;
//!
//! // 2x1 image, both pixels pure blue
//! let pixels = [0, 0, 255, 255, 0, 0, 255, 255];
//! let hue = extract_dominant_hue(&pixels);
//! assert!((hue - 240.0).abs() <= 5.0);
//! ```

mod extractor;
mod histogram;
mod quantize;

pub use extractor::{
    circular_distance, ExtractOptions, HueAnalysis, HueExtractor, HueStrategy, TOP_COLORS,
};
pub use histogram::{ColorGroup, GroupWeights, HueHistogram, HUE_BINS};
pub use quantize::{ColorBucket, ColorQuantizer};

/// Dominant hue in degrees `[0, 360)` with the default options.
///
/// Returns 0 when no pixel survives filtering.
pub fn extract_dominant_hue(pixels: &[u8]) -> f64 {
    HueExtractor::default().extract(pixels)
}
