pub mod config;
pub mod theme;

pub use config::{AppConfig, ExtractionConfig, ThemeDefaults};
pub use theme::{Level, Mode, Mood, ThemeSet, ThemeToken, TokenLevels};
