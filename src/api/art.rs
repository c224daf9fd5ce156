use axum::{extract::Query, response::Json};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::error::ApiError;
use crate::services::gradient_art::{DEFAULT_GRID_SIZE, MAX_GRID_SIZE};
use crate::services::{generate_artwork, Artwork};

#[derive(Debug, Deserialize, IntoParams)]
pub struct ArtQuery {
    /// Seed for reproducible output (random when omitted)
    pub seed: Option<u64>,
    /// Grid side length (default 8)
    pub size: Option<usize>,
}

/// Generate gradient artwork colors
///
/// Two complementary colors plus a grid of gradient directions.
#[utoipa::path(
    get,
    path = "/api/art",
    params(ArtQuery),
    responses(
        (status = 200, description = "Generated artwork", body = Artwork),
        (status = 400, description = "Grid size out of range"),
    ),
    tag = "Art"
)]
pub async fn handle_art(Query(query): Query<ArtQuery>) -> Result<Json<Artwork>, ApiError> {
    let size = query.size.unwrap_or(DEFAULT_GRID_SIZE);
    if size == 0 || size > MAX_GRID_SIZE {
        return Err(ApiError::BadRequest(format!(
            "size must be between 1 and {MAX_GRID_SIZE}"
        )));
    }
    Ok(Json(generate_artwork(query.seed, size)))
}
