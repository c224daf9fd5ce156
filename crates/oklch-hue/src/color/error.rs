//! Error type for hex color parsing.

use std::fmt;

/// Error returned when a hex color string cannot be parsed.
///
/// Accepted input is exactly six hexadecimal digits with an optional
/// leading `#`, in any letter case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseColorError {
    /// Not six digits after stripping the optional `#`
    InvalidLength,
    /// A character that is not a hexadecimal digit
    InvalidHex(char),
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength => {
                write!(f, "invalid hex color length (expected 6 digits)")
            }
            ParseColorError::InvalidHex(c) => {
                write!(f, "invalid hex character: {c:?}")
            }
        }
    }
}

impl std::error::Error for ParseColorError {}
