//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::{DefaultBodyLimit, FromRef},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::assets::AssetLoader;
use crate::models::AppConfig;
use crate::services::ImageHueService;

/// Largest accepted image upload
pub const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub hue_service: Arc<ImageHueService>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let hue_service = Arc::new(ImageHueService::new(&config.extraction));
        Self {
            config: Arc::new(config),
            hue_service,
        }
    }
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl FromRef<AppState> for Arc<ImageHueService> {
    fn from_ref(state: &AppState) -> Self {
        state.hue_service.clone()
    }
}

/// Create application state from an asset loader.
pub fn create_app_state(asset_loader: Arc<AssetLoader>) -> anyhow::Result<AppState> {
    let config = AppConfig::load_from_assets(&asset_loader);
    config.validate()?;
    Ok(AppState::new(config))
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/color/oklch", get(api::handle_oklch))
        .route("/api/color/hex/:hex", get(api::handle_hex))
        .route("/api/shades", get(api::handle_shades))
        .route("/api/theme", get(api::handle_theme))
        .route("/api/hue", post(api::handle_hue))
        .route("/api/art", get(api::handle_art))
        // Health check
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
}
