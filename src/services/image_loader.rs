//! Image decoding and downsampling ahead of hue extraction.

use image::{imageops, imageops::FilterType, RgbaImage};
use oklch_hue::{HueAnalysis, HueExtractor};
use std::path::Path;

use crate::error::{ApiError, ImageLoadError};
use crate::models::ExtractionConfig;

/// Decode any format the `image` crate recognizes into RGBA8
pub fn decode_bytes(bytes: &[u8]) -> Result<RgbaImage, ImageLoadError> {
    let rgba = image::load_from_memory(bytes)?.to_rgba8();
    if rgba.width() == 0 || rgba.height() == 0 {
        return Err(ImageLoadError::EmptyImage);
    }
    Ok(rgba)
}

pub fn load_path(path: &Path) -> Result<RgbaImage, ImageLoadError> {
    let bytes = std::fs::read(path)?;
    decode_bytes(&bytes)
}

/// Target size for an image scaled so its longer side equals `max_dimension`.
///
/// Smaller images are scaled up. Each side is floored and kept at least 1.
pub fn target_size(width: u32, height: u32, max_dimension: u32) -> (u32, u32) {
    let max = f64::from(max_dimension);
    let scale = (max / f64::from(width)).min(max / f64::from(height));
    let scaled = |side: u32| ((f64::from(side) * scale).floor() as u32).max(1);
    (scaled(width), scaled(height))
}

/// Scale `rgba` to fit `max_dimension` with a triangle filter
pub fn downsample(rgba: &RgbaImage, max_dimension: u32) -> RgbaImage {
    let (width, height) = target_size(rgba.width(), rgba.height(), max_dimension);
    if (width, height) == rgba.dimensions() {
        return rgba.clone();
    }
    tracing::trace!(
        from_width = rgba.width(),
        from_height = rgba.height(),
        width,
        height,
        "Resizing image for analysis"
    );
    imageops::resize(rgba, width, height, FilterType::Triangle)
}

/// Decode + downsample + extract, configured from `ExtractionConfig`
#[derive(Debug, Clone)]
pub struct ImageHueService {
    extractor: HueExtractor,
    max_dimension: u32,
}

impl ImageHueService {
    pub fn new(config: &ExtractionConfig) -> Self {
        Self {
            extractor: HueExtractor::new(config.extract_options()),
            max_dimension: config.max_dimension.max(1),
        }
    }

    pub fn max_dimension(&self) -> u32 {
        self.max_dimension
    }

    /// Analyze an already decoded image
    pub fn analyze_image(&self, rgba: &RgbaImage) -> HueAnalysis {
        let scaled = downsample(rgba, self.max_dimension);
        let analysis = self.extractor.analyze(scaled.as_raw());
        tracing::debug!(
            hue = analysis.hue,
            strategy = analysis.strategy.as_str(),
            pixels = analysis.pixels_analyzed,
            colors = analysis.distinct_colors,
            smoothing_window = self.extractor.options().smoothing_window,
            "Extracted dominant hue"
        );
        analysis
    }

    pub fn analyze_bytes(&self, bytes: &[u8]) -> Result<HueAnalysis, ImageLoadError> {
        let rgba = decode_bytes(bytes)?;
        Ok(self.analyze_image(&rgba))
    }

    pub fn analyze_path(&self, path: &Path) -> Result<HueAnalysis, ImageLoadError> {
        let rgba = load_path(path)?;
        Ok(self.analyze_image(&rgba))
    }

    /// Analyze uploaded bytes off the async runtime
    ///
    /// Decoding and resizing are CPU-bound, so they run on the blocking pool.
    pub async fn hue_from_bytes(&self, bytes: Vec<u8>) -> Result<HueAnalysis, ApiError> {
        let service = self.clone();
        let analysis = tokio::task::spawn_blocking(move || service.analyze_bytes(&bytes))
            .await
            .map_err(|e| ApiError::Internal(format!("Hue task failed: {e}")))??;
        Ok(analysis)
    }

    pub async fn hue_from_path(&self, path: &Path) -> Result<HueAnalysis, ApiError> {
        let service = self.clone();
        let path = path.to_path_buf();
        let analysis = tokio::task::spawn_blocking(move || service.analyze_path(&path))
            .await
            .map_err(|e| ApiError::Internal(format!("Hue task failed: {e}")))??;
        Ok(analysis)
    }
}
