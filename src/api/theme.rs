use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;

use crate::error::ApiError;
use crate::models::{AppConfig, Mode, Mood};
use crate::services::{derive_palette, ThemePalette};

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ThemeQuery {
    /// Theme hue in degrees (default from config)
    pub hue: Option<f64>,
    /// `intense` or `vintage`
    pub mood: Option<String>,
    /// `light` or `dark`
    pub mode: Option<String>,
}

impl ThemeQuery {
    /// Resolve against configured defaults
    pub fn resolve(&self, config: &AppConfig) -> Result<(f64, Mood, Mode), ApiError> {
        let hue = match self.hue {
            Some(h) if h.is_finite() => h,
            Some(_) => return Err(ApiError::BadRequest("'hue' must be a finite number".into())),
            None => config.defaults.hue,
        };
        let mood = match self.mood.as_deref() {
            Some(s) => s.parse().map_err(ApiError::BadRequest)?,
            None => config.defaults.mood,
        };
        let mode = match self.mode.as_deref() {
            Some(s) => s.parse().map_err(ApiError::BadRequest)?,
            None => config.defaults.mode,
        };
        Ok((hue, mood, mode))
    }
}

/// Derive a theme palette from a hue
///
/// Every token uses the given hue except `accent`, which uses the opposite one.
#[utoipa::path(
    get,
    path = "/api/theme",
    params(ThemeQuery),
    responses(
        (status = 200, description = "Theme palette", body = ThemePalette),
        (status = 400, description = "Invalid hue, mood or mode"),
    ),
    tag = "Theme"
)]
pub async fn handle_theme(
    State(config): State<Arc<AppConfig>>,
    Query(query): Query<ThemeQuery>,
) -> Result<Json<ThemePalette>, ApiError> {
    let (hue, mood, mode) = query.resolve(&config)?;
    let palette = derive_palette(config.themes.tokens(mood), hue, mood, mode);
    Ok(Json(palette))
}
