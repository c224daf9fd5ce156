//! Test fixtures: images encoded in memory.

use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

/// Pure sRGB primaries
pub mod colors {
    pub const RED: [u8; 4] = [255, 0, 0, 255];
    pub const GREEN: [u8; 4] = [0, 255, 0, 255];
    pub const BLUE: [u8; 4] = [0, 0, 255, 255];
    pub const WHITE: [u8; 4] = [255, 255, 255, 255];
    pub const CLEAR: [u8; 4] = [0, 0, 0, 0];
}

fn encode(img: &RgbaImage, format: ImageFormat) -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, format).expect("Failed to encode image");
    out.into_inner()
}

/// Single-color PNG
pub fn solid_png(width: u32, height: u32, color: [u8; 4]) -> Vec<u8> {
    encode(&RgbaImage::from_pixel(width, height, Rgba(color)), ImageFormat::Png)
}

/// PNG with the left `percent` of columns in `left` and the rest in `right`
pub fn split_png(width: u32, height: u32, percent: u32, left: [u8; 4], right: [u8; 4]) -> Vec<u8> {
    let boundary = width * percent / 100;
    let img = RgbaImage::from_fn(width, height, |x, _| {
        if x < boundary {
            Rgba(left)
        } else {
            Rgba(right)
        }
    });
    encode(&img, ImageFormat::Png)
}

/// Minimal config with custom shade offsets
pub const SHORT_SHADES_CONFIG: &str = "shades: [-0.1, 0, 0.1]\n";
