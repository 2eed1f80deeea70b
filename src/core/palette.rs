//! The ordered set of colors a game draws from

use super::Color;
use crate::error::{ConfigError, IndexOutOfRange};

/// Ordered collection of distinct colors
///
/// Position in the palette is what the digit keys select, so order matters.
/// The "at least two colors" rule belongs to [`GameConfig`](crate::game::GameConfig):
/// a working copy shrinks below that while a duplicate-free code is generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Create a palette from distinct colors
    ///
    /// # Errors
    /// Returns `ConfigError::DuplicateColor` if a color appears twice.
    pub fn new(colors: Vec<Color>) -> Result<Self, ConfigError> {
        for (i, color) in colors.iter().enumerate() {
            if colors[..i].contains(color) {
                return Err(ConfigError::DuplicateColor(*color));
            }
        }

        Ok(Self { colors })
    }

    /// The first `count` standard colors (capped at nine)
    #[must_use]
    pub fn standard(count: usize) -> Self {
        Self {
            colors: Color::ALL.iter().copied().take(count).collect(),
        }
    }

    /// The six colors of the classic board
    #[must_use]
    pub fn classic() -> Self {
        Self::standard(6)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at a 0-based position
    ///
    /// # Errors
    /// Returns `IndexOutOfRange` if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<Color, IndexOutOfRange> {
        self.colors.get(index).copied().ok_or(IndexOutOfRange {
            index,
            len: self.colors.len(),
        })
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, color: Color) -> bool {
        self.colors.contains(&color)
    }

    /// A copy of this palette without `color`
    ///
    /// Returns an identical palette when `color` is absent.
    #[must_use]
    pub fn remove(&self, color: Color) -> Self {
        let mut colors = self.colors.clone();
        if let Some(pos) = colors.iter().position(|&c| c == color) {
            colors.remove(pos);
        }
        Self { colors }
    }

    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.colors.iter().copied()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::classic()
    }
}
