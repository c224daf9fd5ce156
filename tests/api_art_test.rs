//! Integration tests for gradient artwork generation.

mod common;

use axum::http::StatusCode;
use common::{assert_api_error, assert_hex, assert_ok, TestApp};
use pretty_assertions::assert_eq;
use serde_json::Value;

#[tokio::test]
async fn test_art_default_grid() {
    let app = TestApp::new();
    let response = app.get("/api/art").await;

    assert_ok(&response);
    let json: Value = response.json();
    assert_eq!(json["size"], 8);
    assert_eq!(json["grid"].as_array().unwrap().len(), 64);
    assert_hex(&json["colors"]["color1"]);
    assert_hex(&json["colors"]["color2"]);

    let hue1 = json["colors"]["hue1"].as_u64().unwrap();
    let hue2 = json["colors"]["hue2"].as_u64().unwrap();
    assert_eq!(hue2, (hue1 + 180) % 360);

    for cell in json["grid"].as_array().unwrap() {
        let direction = cell["direction"].as_u64().unwrap();
        assert!([0, 45, 90, 180].contains(&direction));
    }
}

#[tokio::test]
async fn test_art_seed_is_reproducible() {
    let app = TestApp::new();
    let first = app.get("/api/art?seed=99&size=3").await;
    let second = app.get("/api/art?seed=99&size=3").await;

    assert_ok(&first);
    assert_eq!(first.json::<Value>(), second.json::<Value>());
    assert_eq!(first.json::<Value>()["seed"], 99);
    assert_eq!(first.json::<Value>()["grid"].as_array().unwrap().len(), 9);
}

#[tokio::test]
async fn test_art_rejects_bad_size() {
    let app = TestApp::new();

    let response = app.get("/api/art?size=0").await;
    assert_api_error(&response, StatusCode::BAD_REQUEST, "size must be between 1 and 64");

    let response = app.get("/api/art?size=65").await;
    assert_api_error(&response, StatusCode::BAD_REQUEST, "size must be between 1 and 64");
}
