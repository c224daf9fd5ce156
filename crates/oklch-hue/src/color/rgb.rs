//! 8-bit sRGB color and its hex string form.

use std::fmt;
use std::str::FromStr;

use super::error::ParseColorError;

/// A displayable 8-bit sRGB color.
///
/// This is the end of every OKLCH conversion and the start of every hex or
/// pixel analysis. The `Display` impl renders the canonical hex form
/// (`#rrggbb`, lowercase).
///
/// # Example
///
/// ```
/// use oklch_hue::Rgb;
///
/// let teal: Rgb = "#00A5A0".parse().unwrap();
/// assert_eq!(teal, Rgb::new(0, 165, 160));
/// assert_eq!(teal.to_string(), "#00a5a0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Create a new color from 8-bit channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as `[R, G, B]`.
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Lowercase, zero-padded `#rrggbb`.
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// CSS functional notation, e.g. `rgb(255, 0, 0)`.
    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse `#RRGGBB` or `RRGGBB`, case-insensitive.
    ///
    /// Whitespace, shorthand (`#RGB`), alpha and sign characters are all
    /// rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        let bytes = digits.as_bytes();
        if bytes.len() != 6 {
            return Err(ParseColorError::InvalidLength);
        }
        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidHex(bad));
        }

        let channel = |i: usize| (nibble(bytes[i]) << 4) | nibble(bytes[i + 1]);
        Ok(Self::new(channel(0), channel(2), channel(4)))
    }
}

/// Value of an ASCII hex digit. Callers validate the digit first.
#[inline]
fn nibble(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_and_without_hash() {
        assert_eq!("#ff8000".parse::<Rgb>(), Ok(Rgb::new(255, 128, 0)));
        assert_eq!("ff8000".parse::<Rgb>(), Ok(Rgb::new(255, 128, 0)));
        assert_eq!("#000000".parse::<Rgb>(), Ok(Rgb::new(0, 0, 0)));
    }

    #[test]
    fn test_parse_case_insensitive() {
        let upper: Rgb = "#ABCDEF".parse().unwrap();
        let lower: Rgb = "#abcdef".parse().unwrap();
        let mixed: Rgb = "AbCdEf".parse().unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper, mixed);
        assert_eq!(upper, Rgb::new(0xab, 0xcd, 0xef));
    }

    #[test]
    fn test_parse_rejects_bad_length() {
        for input in ["", "#", "#fff", "#ffff", "#fffffff", "##ffffff", "ffffff00"] {
            assert_eq!(
                input.parse::<Rgb>(),
                Err(ParseColorError::InvalidLength),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_parse_rejects_bad_digits() {
        assert_eq!(
            "zzzzzz".parse::<Rgb>(),
            Err(ParseColorError::InvalidHex('z'))
        );
        assert_eq!(
            "#12345g".parse::<Rgb>(),
            Err(ParseColorError::InvalidHex('g'))
        );
        // from_str_radix would accept a leading sign
        assert_eq!(
            "+fabcd".parse::<Rgb>(),
            Err(ParseColorError::InvalidHex('+'))
        );
        assert_eq!(
            " fffff".parse::<Rgb>(),
            Err(ParseColorError::InvalidHex(' '))
        );
    }

    #[test]
    fn test_parse_non_ascii_does_not_panic() {
        // Six bytes, three characters
        assert!("ééé".parse::<Rgb>().is_err());
        assert!("#ffé".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_hex_output_is_lowercase_and_padded() {
        assert_eq!(Rgb::new(0, 0, 0).to_hex(), "#000000");
        assert_eq!(Rgb::new(1, 2, 3).to_hex(), "#010203");
        assert_eq!(Rgb::new(255, 171, 205).to_hex(), "#ffabcd");
    }

    #[test]
    fn test_css() {
        assert_eq!(Rgb::new(12, 34, 56).to_css(), "rgb(12, 34, 56)");
    }
}
