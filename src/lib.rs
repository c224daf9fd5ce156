//! Poemtint
//!
//! Theme colors in OKLCH, tinted by the dominant hue of an image.
//! The color math lives in the `oklch-hue` crate; this library adds image
//! loading, theme palettes, gradient art, configuration and the HTTP API,
//! and exposes them for integration testing.

pub mod api;
pub mod assets;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
