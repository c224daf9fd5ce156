use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use oklch_hue::ParseColorError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Invalid color: {0}")]
    InvalidColor(#[from] ParseColorError),

    #[error("Image error: {0}")]
    Image(#[from] ImageLoadError),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Error)]
pub enum ImageLoadError {
    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Image has no pixels")]
    EmptyImage,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) | ApiError::InvalidColor(_) => StatusCode::BAD_REQUEST,
            ApiError::Image(ImageLoadError::Io(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Image(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = Json(json!({
            "status": status.as_u16(),
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_bad_request() {
        let error = ApiError::BadRequest("size must be at least 1".to_string());
        assert_eq!(error.to_string(), "Bad request: size must be at least 1");
    }

    #[test]
    fn test_api_error_from_parse_color_error() {
        let error: ApiError = ParseColorError::InvalidHex('g').into();
        assert_eq!(error.to_string(), "Invalid color: invalid hex character: 'g'");
    }

    #[test]
    fn test_api_error_internal() {
        let error = ApiError::Internal("worker panicked".to_string());
        assert_eq!(error.to_string(), "Internal error: worker panicked");
    }

    #[test]
    fn test_image_load_error_empty() {
        let error = ImageLoadError::EmptyImage;
        assert_eq!(error.to_string(), "Image has no pixels");
    }

    #[test]
    fn test_api_error_from_image_error() {
        let api_error: ApiError = ImageLoadError::EmptyImage.into();
        match api_error {
            ApiError::Image(ImageLoadError::EmptyImage) => {}
            _ => panic!("Expected Image variant"),
        }
    }

    #[test]
    fn test_api_error_into_response_status_codes() {
        let response = ApiError::BadRequest("x".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::InvalidColor(ParseColorError::InvalidLength).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::Image(ImageLoadError::EmptyImage).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk");
        let response = ApiError::Image(ImageLoadError::Io(io)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = ApiError::Internal("error".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
