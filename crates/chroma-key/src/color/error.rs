//! Rejections from the background color parser

use std::fmt;

/// Why a background color string was rejected.
///
/// Both variants keep the string as the caller typed it so the message can
/// be shown verbatim next to the option that supplied it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// Wrong number of hex digits after the optional `#`.
    InvalidLength {
        input: String,
        /// Digits found (3 or 6 are accepted)
        digits: usize,
    },
    /// A character outside `0-9`, `a-f`, `A-F`.
    InvalidDigit { input: String, found: char },
}

impl ParseColorError {
    /// The rejected string, untrimmed.
    pub fn input(&self) -> &str {
        match self {
            ParseColorError::InvalidLength { input, .. }
            | ParseColorError::InvalidDigit { input, .. } => input,
        }
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength { input, digits } => write!(
                f,
                "{:?} has {} hex digits, expected #RGB or #RRGGBB",
                input, digits
            ),
            ParseColorError::InvalidDigit { input, found } => write!(
                f,
                "{:?} contains {:?}, expected #RGB or #RRGGBB",
                input, found
            ),
        }
    }
}

impl std::error::Error for ParseColorError {}
