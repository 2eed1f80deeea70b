//! Peg colors
//!
//! Colors are opaque tokens: the engine only ever compares them for equality.
//! Names and single-letter codes exist for the shells and the command line.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A code peg color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Blue,
    Green,
    Red,
    Yellow,
    Pink,
    Black,
    Orange,
    Purple,
    Cyan,
}

/// Error returned when a color name cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown color '{0}'")]
pub struct ParseColorError(pub String);

impl Color {
    /// Every color in standard palette order
    ///
    /// Nine entries, one per digit key `1`..`9`.
    pub const ALL: [Self; 9] = [
        Self::Blue,
        Self::Green,
        Self::Red,
        Self::Yellow,
        Self::Pink,
        Self::Black,
        Self::Orange,
        Self::Purple,
        Self::Cyan,
    ];

    /// Lowercase color name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Pink => "pink",
            Self::Black => "black",
            Self::Orange => "orange",
            Self::Purple => "purple",
            Self::Cyan => "cyan",
        }
    }

    /// Single uppercase letter used in compact text output
    ///
    /// `Black` is `K` so that it does not collide with `Blue`.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Blue => 'B',
            Self::Green => 'G',
            Self::Red => 'R',
            Self::Yellow => 'Y',
            Self::Pink => 'P',
            Self::Black => 'K',
            Self::Orange => 'O',
            Self::Purple => 'U',
            Self::Cyan => 'C',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Parse a color from its name or its single-letter code (case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|color| {
                color.name().eq_ignore_ascii_case(trimmed)
                    || (trimmed.len() == 1
                        && trimmed
                            .chars()
                            .next()
                            .is_some_and(|c| c.eq_ignore_ascii_case(&color.code())))
            })
            .ok_or_else(|| ParseColorError(trimmed.to_string()))
    }
}
