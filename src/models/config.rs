use crate::assets::AssetLoader;
use crate::models::{Mode, Mood, ThemeSet};
use oklch_hue::hue::{ExtractOptions, HUE_BINS};
use oklch_hue::shades::DEFAULT_SHADE_OFFSETS;
use serde::Deserialize;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Dominant hue extraction tuning
    #[serde(default)]
    pub extraction: ExtractionConfig,

    /// Lightness offsets for the shade ladder
    #[serde(default = "default_shades")]
    pub shades: Vec<f64>,

    /// Values used when a request leaves them out
    #[serde(default)]
    pub defaults: ThemeDefaults,

    /// Theme token tables per mood
    #[serde(default)]
    pub themes: ThemeSet,
}

fn default_shades() -> Vec<f64> {
    DEFAULT_SHADE_OFFSETS.to_vec()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            extraction: ExtractionConfig::default(),
            shades: default_shades(),
            defaults: ThemeDefaults::default(),
            themes: ThemeSet::default(),
        }
    }
}

/// Image analysis settings
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ExtractionConfig {
    /// Longest side after scaling, in pixels
    #[serde(default = "default_max_dimension")]
    pub max_dimension: u32,

    /// Histogram smoothing window
    #[serde(default = "default_smoothing_window")]
    pub smoothing_window: usize,

    /// Blend threshold in degrees
    #[serde(default = "default_blend_threshold")]
    pub blend_threshold: f64,
}

fn default_max_dimension() -> u32 {
    250
}

fn default_smoothing_window() -> usize {
    15
}

fn default_blend_threshold() -> f64 {
    30.0
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            max_dimension: default_max_dimension(),
            smoothing_window: default_smoothing_window(),
            blend_threshold: default_blend_threshold(),
        }
    }
}

impl ExtractionConfig {
    /// Extractor options with this config's overrides applied
    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions::new()
            .smoothing_window(self.smoothing_window)
            .blend_threshold(self.blend_threshold)
    }
}

/// Fallback theme selection
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct ThemeDefaults {
    #[serde(default)]
    pub hue: f64,
    #[serde(default)]
    pub mood: Mood,
    #[serde(default)]
    pub mode: Mode,
}

/// Widest smoothing window that still leaves the histogram a peak
pub const MAX_SMOOTHING_WINDOW: usize = HUE_BINS - 1;

impl AppConfig {
    /// Reject settings the server cannot run with.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.shades.is_empty() {
            anyhow::bail!("config.yaml: 'shades' must list at least one offset");
        }
        let window = self.extraction.smoothing_window;
        if !(1..=MAX_SMOOTHING_WINDOW).contains(&window) {
            anyhow::bail!(
                "config.yaml: 'extraction.smoothing_window' must be between 1 and {MAX_SMOOTHING_WINDOW}, got {window}"
            );
        }
        if self.extraction.max_dimension == 0 {
            anyhow::bail!("config.yaml: 'extraction.max_dimension' must be positive");
        }
        if !self.extraction.blend_threshold.is_finite() {
            anyhow::bail!("config.yaml: 'extraction.blend_threshold' must be a finite number");
        }
        Ok(())
    }

    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    let config: Self = config;
                    tracing::info!(
                        max_dimension = config.extraction.max_dimension,
                        shades = config.shades.len(),
                        intense_tokens = config.themes.intense.len(),
                        vintage_tokens = config.themes.vintage.len(),
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }
}
