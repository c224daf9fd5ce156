use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Overall character of a theme: saturated or subdued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    #[default]
    Intense,
    Vintage,
}

impl Mood {
    pub fn toggle(self) -> Self {
        match self {
            Mood::Intense => Mood::Vintage,
            Mood::Vintage => Mood::Intense,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Intense => "intense",
            Mood::Vintage => "vintage",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "intense" => Ok(Mood::Intense),
            "vintage" => Ok(Mood::Vintage),
            other => Err(format!("unknown mood '{other}' (expected intense or vintage)")),
        }
    }
}

/// Light or dark color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

impl Mode {
    pub fn toggle(self) -> Self {
        match self {
            Mode::Light => Mode::Dark,
            Mode::Dark => Mode::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(Mode::Light),
            "dark" => Ok(Mode::Dark),
            other => Err(format!("unknown mode '{other}' (expected light or dark)")),
        }
    }
}

/// OKLCH lightness and chroma; the hue comes from the theme.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Level {
    pub l: f64,
    pub c: f64,
}

const fn level(l: f64, c: f64) -> Level {
    Level { l, c }
}

/// Background and text levels of a token in one mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TokenLevels {
    pub base: Level,
    pub foreground: Level,
}

/// A named theme color, e.g. `primary`, with levels per mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ThemeToken {
    pub name: String,
    pub light: TokenLevels,
    pub dark: TokenLevels,
}

impl ThemeToken {
    fn new(name: &str, light: (Level, Level), dark: (Level, Level)) -> Self {
        Self {
            name: name.to_string(),
            light: TokenLevels {
                base: light.0,
                foreground: light.1,
            },
            dark: TokenLevels {
                base: dark.0,
                foreground: dark.1,
            },
        }
    }

    pub fn levels(&self, mode: Mode) -> &TokenLevels {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }
}

/// Token tables for every mood.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ThemeSet {
    #[serde(default = "intense_tokens")]
    pub intense: Vec<ThemeToken>,
    #[serde(default = "vintage_tokens")]
    pub vintage: Vec<ThemeToken>,
}

impl ThemeSet {
    pub fn tokens(&self, mood: Mood) -> &[ThemeToken] {
        match mood {
            Mood::Intense => &self.intense,
            Mood::Vintage => &self.vintage,
        }
    }
}

impl Default for ThemeSet {
    fn default() -> Self {
        Self {
            intense: intense_tokens(),
            vintage: vintage_tokens(),
        }
    }
}

fn intense_tokens() -> Vec<ThemeToken> {
    vec![
        ThemeToken::new(
            "primary",
            (level(0.55, 0.27), level(0.98, 0.01)),
            (level(0.65, 0.27), level(0.15, 0.03)),
        ),
        ThemeToken::new(
            "secondary",
            (level(0.92, 0.03), level(0.25, 0.12)),
            (level(0.25, 0.08), level(0.95, 0.02)),
        ),
        ThemeToken::new(
            "accent",
            (level(0.65, 0.18), level(0.15, 0.07)),
            (level(0.7, 0.22), level(0.98, 0.03)),
        ),
        ThemeToken::new(
            "card",
            (level(0.98, 0.01), level(0.15, 0.02)),
            (level(0.1, 0.1), level(0.95, 0.02)),
        ),
        ThemeToken::new(
            "muted",
            (level(0.9, 0.05), level(0.45, 0.12)),
            (level(0.25, 0.07), level(0.75, 0.1)),
        ),
    ]
}

fn vintage_tokens() -> Vec<ThemeToken> {
    vec![
        ThemeToken::new(
            "primary",
            (level(0.62, 0.1), level(0.95, 0.01)),
            (level(0.6, 0.09), level(0.2, 0.01)),
        ),
        ThemeToken::new(
            "secondary",
            (level(0.94, 0.02), level(0.3, 0.06)),
            (level(0.28, 0.04), level(0.92, 0.01)),
        ),
        ThemeToken::new(
            "accent",
            (level(0.7, 0.09), level(0.22, 0.03)),
            (level(0.65, 0.11), level(0.95, 0.01)),
        ),
        ThemeToken::new(
            "card",
            (level(0.97, 0.02), level(0.2, 0.01)),
            (level(0.15, 0.04), level(0.92, 0.01)),
        ),
        ThemeToken::new(
            "muted",
            (level(0.93, 0.02), level(0.5, 0.05)),
            (level(0.32, 0.03), level(0.68, 0.04)),
        ),
    ]
}
