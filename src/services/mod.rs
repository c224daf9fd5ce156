pub mod gradient_art;
pub mod image_loader;
pub mod theme_service;

pub use gradient_art::{generate_artwork, Artwork, ArtworkColors, GradientCell};
pub use image_loader::ImageHueService;
pub use theme_service::{derive_palette, ColorValue, PaletteEntry, ThemePalette};
