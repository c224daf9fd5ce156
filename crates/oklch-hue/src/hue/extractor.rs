//! Dominant hue extraction from RGBA pixels.

use super::histogram::{ColorGroup, GroupWeights, HueHistogram};
use super::quantize::{ColorBucket, ColorQuantizer};
use crate::color::{round_half_up, Hsl, Rgb};

/// How many of the most common quantized colors a [`HueAnalysis`] reports.
pub const TOP_COLORS: usize = 5;

/// Tuning for [`HueExtractor`].
///
/// The defaults are the values the extractor was tuned with on
/// photographs; changing them changes which hue wins on real images.
///
/// # Example
///
/// ```
/// use oklch_hue::hue::ExtractOptions;
///
/// let options = ExtractOptions::new()
///     .smoothing_window(9)
///     .blend_threshold(20.0);
/// assert_eq!(options.bin_size, 10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractOptions {
    /// Pixels with alpha below this are skipped.
    pub min_alpha: u8,
    /// Pixels with every channel below this are skipped as near-black.
    pub dark_cutoff: u8,
    /// Pixels with every channel above this are skipped as near-white.
    pub light_cutoff: u8,
    /// Minimum HSL saturation (exclusive).
    pub min_saturation: f64,
    /// Exclusive HSL lightness bounds.
    pub min_lightness: f64,
    pub max_lightness: f64,
    /// Weight is `s^saturation_exponent * (1 - |l - 0.5| * lightness_falloff) * weight_scale`.
    pub saturation_exponent: f64,
    pub lightness_falloff: f64,
    pub weight_scale: f64,
    /// Width of the circular moving average over the histogram.
    pub smoothing_window: usize,
    /// Channel bin size for quantization.
    pub bin_size: u8,
    /// Below this circular distance the two candidate hues are blended.
    pub blend_threshold: f64,
    /// Blend weights for the histogram and quantization hues.
    pub histogram_weight: f64,
    pub quantization_weight: f64,
    /// An image is vibrant when its heaviest color group exceeds this
    /// fraction of the analyzed pixel count.
    pub vibrance_ratio: f64,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            min_alpha: 128,
            dark_cutoff: 20,
            light_cutoff: 235,
            min_saturation: 0.08,
            min_lightness: 0.15,
            max_lightness: 0.85,
            saturation_exponent: 1.2,
            lightness_falloff: 1.5,
            weight_scale: 2.0,
            smoothing_window: 15,
            bin_size: 10,
            blend_threshold: 30.0,
            histogram_weight: 0.4,
            quantization_weight: 0.6,
            vibrance_ratio: 0.5,
        }
    }
}

impl ExtractOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the histogram smoothing window.
    #[inline]
    pub fn smoothing_window(mut self, window: usize) -> Self {
        self.smoothing_window = window;
        self
    }

    /// Set the quantization bin size.
    #[inline]
    pub fn bin_size(mut self, size: u8) -> Self {
        self.bin_size = size;
        self
    }

    /// Set the distance below which candidates are blended.
    #[inline]
    pub fn blend_threshold(mut self, degrees: f64) -> Self {
        self.blend_threshold = degrees;
        self
    }

    /// Set the vibrance ratio.
    #[inline]
    pub fn vibrance_ratio(mut self, ratio: f64) -> Self {
        self.vibrance_ratio = ratio;
        self
    }
}

/// Which rule produced the final hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HueStrategy {
    /// Candidates agreed; weighted blend of both.
    Blend,
    /// Candidates disagreed on a vibrant image; histogram peak wins.
    Histogram,
    /// Candidates disagreed on a muted image; most common color wins.
    Quantization,
}

impl HueStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            HueStrategy::Blend => "blend",
            HueStrategy::Histogram => "histogram",
            HueStrategy::Quantization => "quantization",
        }
    }
}

/// Result of [`HueExtractor::analyze`].
#[derive(Debug, Clone, PartialEq)]
pub struct HueAnalysis {
    /// Final dominant hue in degrees, `[0, 360)`.
    pub hue: f64,
    /// Peak of the smoothed weighted histogram.
    pub histogram_hue: f64,
    /// Hue of the most common quantized color.
    pub quantization_hue: f64,
    /// Circular distance between the two candidates.
    pub distance: f64,
    /// Pixels that passed every filter.
    pub pixels_analyzed: usize,
    /// Quantized colors seen among the analyzed pixels.
    pub distinct_colors: usize,
    /// Heaviest color group, if any pixel was analyzed.
    pub dominant_group: Option<ColorGroup>,
    pub vibrant: bool,
    pub strategy: HueStrategy,
    /// Most common quantized colors, at most [`TOP_COLORS`].
    pub top_colors: Vec<ColorBucket>,
}

/// Circular distance between two hues in degrees.
///
/// Inputs are expected in `[0, 360)`; the result lies in `[0, 180]`.
///
/// ```
/// use oklch_hue::hue::circular_distance;
///
/// assert_eq!(circular_distance(350.0, 10.0), 20.0);
/// ```
#[inline]
pub fn circular_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).abs();
    d.min(360.0 - d)
}

/// Picks one dominant hue from an RGBA buffer.
///
/// Two estimates are computed in one pass and then reconciled:
///
/// 1. **Histogram**: every colorful mid-tone pixel votes for its hue degree,
///    weighted towards saturated mid-lightness pixels. The histogram is
///    smoothed and its peak taken.
/// 2. **Quantization**: pixels are binned into coarse RGB cells and the
///    hue of the fullest cell is taken.
///
/// Close estimates are blended; otherwise the histogram wins on vibrant
/// images and the quantization vote wins on muted ones.
///
/// Downsampling is the caller's job. The buffer is read as consecutive
/// `[r, g, b, a]` groups; a trailing partial group is ignored.
#[derive(Debug, Clone, Default)]
pub struct HueExtractor {
    options: ExtractOptions,
}

impl HueExtractor {
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Final hue only. Equivalent to `analyze(pixels).hue`.
    pub fn extract(&self, pixels: &[u8]) -> f64 {
        self.analyze(pixels).hue
    }

    /// Whether a pixel is skipped before any color analysis.
    #[inline]
    fn is_ignored(&self, [r, g, b, a]: [u8; 4]) -> bool {
        let o = &self.options;
        a < o.min_alpha
            || (r < o.dark_cutoff && g < o.dark_cutoff && b < o.dark_cutoff)
            || (r > o.light_cutoff && g > o.light_cutoff && b > o.light_cutoff)
    }

    #[inline]
    fn is_colorful(&self, hsl: Hsl) -> bool {
        let o = &self.options;
        hsl.s > o.min_saturation && hsl.l > o.min_lightness && hsl.l < o.max_lightness
    }

    #[inline]
    fn weight(&self, hsl: Hsl) -> f64 {
        let o = &self.options;
        let saturation = hsl.s.powf(o.saturation_exponent);
        let lightness = 1.0 - (hsl.l - 0.5).abs() * o.lightness_falloff;
        saturation * lightness * o.weight_scale
    }

    /// Run the full analysis and report how the hue was chosen.
    pub fn analyze(&self, pixels: &[u8]) -> HueAnalysis {
        let mut histogram = HueHistogram::new();
        let mut groups = GroupWeights::new();
        let mut quantizer = ColorQuantizer::new(self.options.bin_size);
        let mut analyzed = 0usize;

        for px in pixels.chunks_exact(4) {
            let px = [px[0], px[1], px[2], px[3]];
            if self.is_ignored(px) {
                continue;
            }

            let rgb = Rgb::from([px[0], px[1], px[2]]);
            let hsl = Hsl::from(rgb);
            if !self.is_colorful(hsl) {
                continue;
            }

            analyzed += 1;
            let degree = hsl.hue_degree();
            let weight = self.weight(hsl);
            histogram.add(degree, weight);
            groups.add(degree, weight);
            quantizer.add(rgb);
        }

        let histogram_hue = histogram.smoothed(self.options.smoothing_window).peak() as f64;

        let distinct_colors = quantizer.len();
        let mut buckets = quantizer.into_sorted();
        buckets.truncate(TOP_COLORS);
        let quantization_hue = buckets
            .first()
            .map(|top| Hsl::from(top.rgb()).hue_degree() as f64)
            .unwrap_or(0.0);

        let distance = circular_distance(histogram_hue, quantization_hue);
        let vibrant = groups.max() > analyzed as f64 * self.options.vibrance_ratio;

        // The blend is a plain weighted mean and does not wrap at 0/360
        let (hue, strategy) = if distance < self.options.blend_threshold {
            let blended = histogram_hue * self.options.histogram_weight
                + quantization_hue * self.options.quantization_weight;
            (round_half_up(blended), HueStrategy::Blend)
        } else if vibrant {
            (histogram_hue, HueStrategy::Histogram)
        } else {
            (quantization_hue, HueStrategy::Quantization)
        };

        HueAnalysis {
            hue,
            histogram_hue,
            quantization_hue,
            distance,
            pixels_analyzed: analyzed,
            distinct_colors,
            dominant_group: groups.dominant(),
            vibrant,
            strategy,
            top_colors: buckets,
        }
    }
}
