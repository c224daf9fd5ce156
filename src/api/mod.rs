pub mod art;
pub mod color;
pub mod hue;
pub mod theme;

pub use art::{handle_art, ArtQuery, __path_handle_art};
pub use color::{__path_handle_hex, __path_handle_oklch, __path_handle_shades};
pub use color::{handle_hex, handle_oklch, handle_shades};
pub use color::{
    HexColorResponse, OklabValue, OklchColorResponse, OklchQuery, OklchValue, RgbValue,
    ShadeValue, ShadesResponse,
};
pub use hue::{handle_hue, ColorCount, HueResponse, __path_handle_hue};
pub use theme::{handle_theme, ThemeQuery, __path_handle_theme};
