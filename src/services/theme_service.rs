//! Theme palette derivation
//!
//! Every token is rendered at the theme hue, except `accent` which sits on
//! the opposite side of the wheel. The palette is plain data: CSS custom
//! property names and values, nothing is applied anywhere.

use oklch_hue::Oklch;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Level, Mode, Mood, ThemeToken};

/// Token that takes the complementary hue
pub const ACCENT_TOKEN: &str = "accent";

/// One rendered color
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ColorValue {
    /// CSS value, e.g. `oklch(0.55 0.27 120)`
    pub css: String,
    /// Gamut-mapped `#rrggbb`
    pub hex: String,
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl ColorValue {
    fn at(level: Level, hue: f64) -> Self {
        let color = Oklch::new(level.l, level.c, hue);
        Self {
            css: color.to_css(),
            hex: color.to_hex(),
            l: color.l,
            c: color.c,
            h: color.h,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PaletteEntry {
    pub name: String,
    /// `--<name>`
    pub variable: String,
    /// `--<name>-foreground`
    pub foreground_variable: String,
    pub base: ColorValue,
    pub foreground: ColorValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ThemePalette {
    pub mood: Mood,
    pub mode: Mode,
    pub hue: f64,
    pub accent_hue: f64,
    pub entries: Vec<PaletteEntry>,
}

impl ThemePalette {
    pub fn entry(&self, name: &str) -> Option<&PaletteEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// `--name: value;` lines, base then foreground for each token
    pub fn css_declarations(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(&format!("{}: {};\n", entry.variable, entry.base.css));
            out.push_str(&format!(
                "{}: {};\n",
                entry.foreground_variable, entry.foreground.css
            ));
        }
        out
    }
}

/// Wrap a hue into `[0, 360)`.
fn normalize_hue(hue: f64) -> f64 {
    let hue = hue.rem_euclid(360.0);
    // rem_euclid of a tiny negative rounds up to exactly 360.0
    if hue >= 360.0 {
        0.0
    } else {
        hue
    }
}

/// Hue on the opposite side of the wheel, in `[0, 360)`
pub fn complementary_hue(hue: f64) -> f64 {
    normalize_hue(hue + 180.0)
}

/// Render `tokens` for one hue, mood and mode
pub fn derive_palette(tokens: &[ThemeToken], hue: f64, mood: Mood, mode: Mode) -> ThemePalette {
    let hue = normalize_hue(hue);
    let accent_hue = complementary_hue(hue);

    let entries = tokens
        .iter()
        .map(|token| {
            let token_hue = if token.name == ACCENT_TOKEN {
                accent_hue
            } else {
                hue
            };
            let levels = token.levels(mode);
            PaletteEntry {
                name: token.name.clone(),
                variable: format!("--{}", token.name),
                foreground_variable: format!("--{}-foreground", token.name),
                base: ColorValue::at(levels.base, token_hue),
                foreground: ColorValue::at(levels.foreground, token_hue),
            }
        })
        .collect();

    tracing::debug!(hue, accent_hue, %mood, %mode, "Derived theme palette");

    ThemePalette {
        mood,
        mode,
        hue,
        accent_hue,
        entries,
    }
}
