use axum::{body::Bytes, extract::State, response::Json};
use oklch_hue::HueAnalysis;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use super::color::RgbValue;
use crate::error::ApiError;
use crate::services::ImageHueService;

#[derive(Debug, Serialize, ToSchema)]
pub struct ColorCount {
    pub rgb: RgbValue,
    pub hex: String,
    pub count: usize,
}

/// Dominant hue of an uploaded image
#[derive(Debug, Serialize, ToSchema)]
pub struct HueResponse {
    /// Final hue in degrees, `[0, 360)`
    pub hue: f64,
    pub histogram_hue: f64,
    pub quantization_hue: f64,
    pub distance: f64,
    /// `blend`, `histogram` or `quantization`
    pub strategy: String,
    pub vibrant: bool,
    /// `red`, `yellow`, `green`, `cyan`, `blue` or `magenta`
    pub dominant_group: Option<String>,
    pub pixels_analyzed: usize,
    /// Quantized colors seen among the analyzed pixels
    pub distinct_colors: usize,
    pub top_colors: Vec<ColorCount>,
}

impl From<HueAnalysis> for HueResponse {
    fn from(analysis: HueAnalysis) -> Self {
        Self {
            hue: analysis.hue,
            histogram_hue: analysis.histogram_hue,
            quantization_hue: analysis.quantization_hue,
            distance: analysis.distance,
            strategy: analysis.strategy.as_str().to_string(),
            vibrant: analysis.vibrant,
            dominant_group: analysis.dominant_group.map(|g| g.name().to_string()),
            pixels_analyzed: analysis.pixels_analyzed,
            distinct_colors: analysis.distinct_colors,
            top_colors: analysis
                .top_colors
                .iter()
                .map(|bucket| ColorCount {
                    rgb: bucket.rgb().into(),
                    hex: bucket.rgb().to_hex(),
                    count: bucket.count,
                })
                .collect(),
        }
    }
}

/// Extract the dominant hue of an image
///
/// The request body is the raw image file (PNG, JPEG, GIF, WebP, ...).
#[utoipa::path(
    post,
    path = "/api/hue",
    request_body(content = Vec<u8>, content_type = "application/octet-stream"),
    responses(
        (status = 200, description = "Hue analysis", body = HueResponse),
        (status = 400, description = "Empty or undecodable image"),
    ),
    tag = "Hue"
)]
pub async fn handle_hue(
    State(service): State<Arc<ImageHueService>>,
    body: Bytes,
) -> Result<Json<HueResponse>, ApiError> {
    if body.is_empty() {
        return Err(ApiError::BadRequest("request body is empty".into()));
    }

    let size = body.len();
    let analysis = service.hue_from_bytes(body.to_vec()).await?;

    tracing::info!(
        bytes = size,
        hue = analysis.hue,
        strategy = analysis.strategy.as_str(),
        "Image hue extracted"
    );

    Ok(Json(analysis.into()))
}
