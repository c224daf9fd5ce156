//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status, expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
    assert!(response.is_json(), "Expected a JSON response");
}

/// Assert the JSON error body produced by `ApiError`
pub fn assert_api_error(response: &TestResponse, expected: StatusCode, message_part: &str) {
    assert_status(response, expected);
    let json: serde_json::Value = response.json();
    assert_eq!(json["status"].as_u64(), Some(u64::from(expected.as_u16())));

    let message = json["error"].as_str().unwrap_or_default();
    assert!(
        message.contains(message_part),
        "Expected error containing {message_part:?}, got {message:?}"
    );
}

/// Assert `value` is a lowercase `#rrggbb` string
pub fn assert_hex(value: &serde_json::Value) {
    let hex = value.as_str().expect("Expected hex string");
    assert_eq!(hex.len(), 7, "Expected #rrggbb, got {hex}");
    assert!(hex.starts_with('#'));
    assert!(
        hex[1..].chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)),
        "Expected lowercase hex digits, got {hex}"
    );
}

/// Assert two floats are within `tolerance`
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "Expected {expected} ± {tolerance}, got {actual}"
    );
}
