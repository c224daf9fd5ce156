//! Server integration tests that test the actual server behavior.
//!
//! These tests start a real TCP server and talk HTTP/1.1 to it over a socket.

mod common;

use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use common::fixtures::{colors, solid_png};
use poemtint::assets::AssetLoader;
use poemtint::server::{build_router, create_app_state};

/// Start a test server on an available port and return the port number.
async fn start_test_server() -> u16 {
    let asset_loader = Arc::new(AssetLoader::new(None));
    let state = create_app_state(asset_loader).expect("Failed to create app state");
    let app = build_router(state);

    // Bind to port 0 to get an available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    // Give the server a moment to start
    tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

    port
}

/// Send one request with `Connection: close` and read the whole response.
async fn send(port: u16, head: &str, body: &[u8]) -> String {
    let mut stream = TcpStream::connect(format!("127.0.0.1:{port}"))
        .await
        .expect("Failed to connect");

    stream
        .write_all(head.as_bytes())
        .await
        .expect("Failed to write request head");
    stream.write_all(body).await.expect("Failed to write body");

    let mut response = Vec::new();
    tokio::time::timeout(
        tokio::time::Duration::from_secs(5),
        stream.read_to_end(&mut response),
    )
    .await
    .expect("Timeout waiting for response")
    .expect("Failed to read response");

    String::from_utf8_lossy(&response).to_string()
}

#[tokio::test]
async fn test_health_over_tcp() {
    let port = start_test_server().await;
    let response = send(
        port,
        "GET /health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
        &[],
    )
    .await;

    assert!(response.starts_with("HTTP/1.1 200"), "Got: {response}");
    assert!(response.ends_with("OK"), "Got: {response}");
}

#[tokio::test]
async fn test_image_upload_over_tcp() {
    let port = start_test_server().await;
    let image = solid_png(24, 12, colors::BLUE);
    let head = format!(
        "POST /api/hue HTTP/1.1\r\nHost: localhost\r\nContent-Type: image/png\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        image.len()
    );

    let response = send(port, &head, &image).await;

    assert!(response.starts_with("HTTP/1.1 200"), "Got: {response}");
    assert!(response.contains("\"hue\":237.0"), "Got: {response}");
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let port = start_test_server().await;
    let response = send(
        port,
        "GET /api/nope HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
        &[],
    )
    .await;

    assert!(response.starts_with("HTTP/1.1 404"), "Got: {response}");
}

#[tokio::test]
async fn test_empty_shades_config_fails_startup() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "shades: []\n").unwrap();

    let loader = Arc::new(AssetLoader::new(Some(path)));
    assert!(create_app_state(loader).is_err());
}

#[tokio::test]
async fn test_oversized_smoothing_window_fails_startup() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");

    for window in ["0", "100000", "18446744073709551615"] {
        std::fs::write(&path, format!("extraction:\n  smoothing_window: {window}\n")).unwrap();
        let loader = Arc::new(AssetLoader::new(Some(path.clone())));
        let Err(err) = create_app_state(loader) else {
            panic!("smoothing_window {window} was accepted");
        };
        assert!(err.to_string().contains("smoothing_window"), "{err}");
    }
}

#[tokio::test]
async fn test_unparsable_config_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "extraction: [this is: not valid\n").unwrap();

    let loader = Arc::new(AssetLoader::new(Some(path)));
    let state = create_app_state(loader).expect("Defaults should be used");
    assert_eq!(state.config.shades.len(), 9);
    assert_eq!(state.hue_service.max_dimension(), 250);
}
