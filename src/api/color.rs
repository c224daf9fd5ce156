use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use oklch_hue::gamut::is_in_gamut;
use oklch_hue::shades::{chroma_ramp, hue_ramp, lightness_ramp, linear_gradient};
use oklch_hue::{gamut_map_oklch, shade_ladder, LinearRgb, Oklab, Oklch, Rgb, Srgb};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

use crate::error::ApiError;
use crate::models::AppConfig;

/// OKLCH coordinates from the query string
#[derive(Debug, Deserialize, IntoParams)]
pub struct OklchQuery {
    /// Lightness, 0..1
    pub l: Option<f64>,
    /// Chroma, >= 0
    pub c: Option<f64>,
    /// Hue in degrees
    pub h: Option<f64>,
}

impl OklchQuery {
    pub fn color(&self) -> Result<Oklch, ApiError> {
        let l = require("l", self.l)?;
        let c = require("c", self.c)?;
        let h = require("h", self.h)?;
        Ok(Oklch::new(l, c, h))
    }
}

fn require(name: &str, value: Option<f64>) -> Result<f64, ApiError> {
    match value {
        Some(v) if v.is_finite() => Ok(v),
        Some(_) => Err(ApiError::BadRequest(format!("'{name}' must be a finite number"))),
        None => Err(ApiError::BadRequest(format!("missing query parameter '{name}'"))),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct OklchValue {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl From<Oklch> for OklchValue {
    fn from(color: Oklch) -> Self {
        Self {
            l: color.l,
            c: color.c,
            h: color.h,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct OklabValue {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct RgbValue {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl From<Rgb> for RgbValue {
    fn from(rgb: Rgb) -> Self {
        let [r, g, b] = rgb.to_bytes();
        Self { r, g, b }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OklchColorResponse {
    /// Requested color after clamping lightness and chroma
    pub input: OklchValue,
    /// Color actually displayed, chroma reduced if needed
    pub mapped: OklchValue,
    /// Whether the requested color fits sRGB without mapping
    pub in_gamut: bool,
    pub rgb: RgbValue,
    pub hex: String,
    pub css: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HexColorResponse {
    /// Normalized `#rrggbb`
    pub hex: String,
    pub rgb: RgbValue,
    pub oklab: OklabValue,
    pub oklch: OklchValue,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ShadeValue {
    /// Lightness offset from the base color
    pub offset: f64,
    pub color: OklchValue,
    pub hex: String,
    /// Readable text color on this shade
    pub text: String,
    pub label: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ShadesResponse {
    pub base: OklchValue,
    pub shades: Vec<ShadeValue>,
    /// CSS gradient around the hue circle at the base lightness and chroma
    pub hue_gradient: String,
    /// CSS gradient from gray to full chroma at the base lightness and hue
    pub chroma_gradient: String,
    /// CSS gradient from black to white at the base chroma and hue
    pub lightness_gradient: String,
}

/// Convert an OKLCH color to sRGB
///
/// Out-of-gamut colors are mapped into sRGB by reducing chroma.
#[utoipa::path(
    get,
    path = "/api/color/oklch",
    params(OklchQuery),
    responses(
        (status = 200, description = "Converted color", body = OklchColorResponse),
        (status = 400, description = "Missing or invalid coordinate"),
    ),
    tag = "Color"
)]
pub async fn handle_oklch(
    Query(query): Query<OklchQuery>,
) -> Result<Json<OklchColorResponse>, ApiError> {
    let color = query.color()?;
    let in_gamut = is_in_gamut(Srgb::from(LinearRgb::from(Oklab::from(color))));
    let mapped = gamut_map_oklch(color);
    let rgb = color.to_rgb();

    Ok(Json(OklchColorResponse {
        input: color.into(),
        mapped: mapped.into(),
        in_gamut,
        rgb: rgb.into(),
        hex: rgb.to_hex(),
        css: color.to_css(),
    }))
}

/// Convert a hex color to OKLab and OKLCH
#[utoipa::path(
    get,
    path = "/api/color/hex/{hex}",
    params(
        ("hex" = String, Path, description = "Six hex digits, optional leading '#'"),
    ),
    responses(
        (status = 200, description = "Converted color", body = HexColorResponse),
        (status = 400, description = "Invalid hex color"),
    ),
    tag = "Color"
)]
pub async fn handle_hex(Path(hex): Path<String>) -> Result<Json<HexColorResponse>, ApiError> {
    let rgb: Rgb = hex.parse()?;
    let oklab = Oklab::from(LinearRgb::from(rgb));
    let oklch = Oklch::from(oklab);

    Ok(Json(HexColorResponse {
        hex: rgb.to_hex(),
        rgb: rgb.into(),
        oklab: OklabValue {
            l: oklab.l,
            a: oklab.a,
            b: oklab.b,
        },
        oklch: oklch.into(),
    }))
}

/// Shade ladder around a base color
///
/// Offsets come from the `shades` list in config.yaml. The response also
/// carries hue, chroma and lightness ramps through the base color as CSS
/// gradients.
#[utoipa::path(
    get,
    path = "/api/shades",
    params(OklchQuery),
    responses(
        (status = 200, description = "Shade ladder", body = ShadesResponse),
        (status = 400, description = "Missing or invalid coordinate"),
    ),
    tag = "Color"
)]
pub async fn handle_shades(
    State(config): State<Arc<AppConfig>>,
    Query(query): Query<OklchQuery>,
) -> Result<Json<ShadesResponse>, ApiError> {
    let base = query.color()?;
    let shades = shade_ladder(base, &config.shades)
        .into_iter()
        .map(|shade| ShadeValue {
            offset: shade.offset,
            color: shade.color.into(),
            hex: shade.hex(),
            text: shade.text.to_hex(),
            label: shade.label(),
        })
        .collect();

    Ok(Json(ShadesResponse {
        base: base.into(),
        shades,
        hue_gradient: linear_gradient(&hue_ramp(base.l, base.c)),
        chroma_gradient: linear_gradient(&chroma_ramp(base.l, base.h)),
        lightness_gradient: linear_gradient(&lightness_ramp(base.c, base.h)),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_requires_all_coordinates() {
        let query = OklchQuery {
            l: Some(0.5),
            c: None,
            h: Some(10.0),
        };
        let err = query.color().unwrap_err();
        assert_eq!(err.to_string(), "Bad request: missing query parameter 'c'");
    }

    #[test]
    fn test_query_rejects_non_finite() {
        let query = OklchQuery {
            l: Some(f64::NAN),
            c: Some(0.1),
            h: Some(10.0),
        };
        assert!(matches!(query.color(), Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn test_query_clamps() {
        let query = OklchQuery {
            l: Some(1.5),
            c: Some(-0.2),
            h: Some(10.0),
        };
        let color = query.color().unwrap();
        assert_eq!(color.l, 1.0);
        assert_eq!(color.c, 0.0);
    }
}
