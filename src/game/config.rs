//! Game configuration and its validation

use crate::core::Palette;
use crate::error::ConfigError;

/// Parameters of one game session
///
/// Only constructible through [`GameConfig::new`], so a value of this type
/// is always playable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    duplicates_allowed: bool,
    sequence_len: usize,
    max_guesses: usize,
    palette: Palette,
}

impl GameConfig {
    /// Validate and build a configuration
    ///
    /// # Errors
    /// - `NonPositiveValue` if `sequence_len` or `max_guesses` is zero
    /// - `PaletteTooSmall` if the palette has fewer than two colors
    /// - `InsufficientColors` if duplicates are disallowed and the palette is
    ///   shorter than the sequence
    pub fn new(
        duplicates_allowed: bool,
        sequence_len: usize,
        max_guesses: usize,
        palette: Palette,
    ) -> Result<Self, ConfigError> {
        if sequence_len < 1 {
            return Err(ConfigError::NonPositiveValue {
                field: "sequence length",
            });
        }
        if max_guesses < 1 {
            return Err(ConfigError::NonPositiveValue {
                field: "maximum guesses",
            });
        }
        if palette.len() < 2 {
            return Err(ConfigError::PaletteTooSmall(palette.len()));
        }
        if !duplicates_allowed && palette.len() < sequence_len {
            return Err(ConfigError::InsufficientColors {
                palette_len: palette.len(),
                sequence_len,
            });
        }

        Ok(Self {
            duplicates_allowed,
            sequence_len,
            max_guesses,
            palette,
        })
    }

    /// Four pegs, ten guesses, six colors, duplicates allowed
    #[must_use]
    pub fn classic() -> Self {
        Self {
            duplicates_allowed: true,
            sequence_len: 4,
            max_guesses: 10,
            palette: Palette::classic(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn duplicates_allowed(&self) -> bool {
        self.duplicates_allowed
    }

    #[inline]
    #[must_use]
    pub const fn sequence_len(&self) -> usize {
        self.sequence_len
    }

    #[inline]
    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    #[inline]
    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color;

    #[test]
    fn config_classic_is_valid() {
        let classic = GameConfig::classic();
        let rebuilt = GameConfig::new(true, 4, 10, Palette::classic()).unwrap();
        assert_eq!(classic, rebuilt);
    }

    #[test]
    fn config_rejects_zero_length() {
        assert_eq!(
            GameConfig::new(true, 0, 10, Palette::classic()),
            Err(ConfigError::NonPositiveValue {
                field: "sequence length"
            })
        );
    }

    #[test]
    fn config_rejects_zero_guesses() {
        assert_eq!(
            GameConfig::new(true, 10, 0, Palette::classic()),
            Err(ConfigError::NonPositiveValue {
                field: "maximum guesses"
            })
        );
    }

    #[test]
    fn config_rejects_tiny_palette() {
        let empty = Palette::new(Vec::new()).unwrap();
        assert_eq!(
            GameConfig::new(true, 10, 5, empty),
            Err(ConfigError::PaletteTooSmall(0))
        );

        let single = Palette::new(vec![Color::Red]).unwrap();
        assert_eq!(
            GameConfig::new(true, 1, 5, single),
            Err(ConfigError::PaletteTooSmall(1))
        );
    }

    #[test]
    fn config_rejects_impossible_distinct_code() {
        assert_eq!(
            GameConfig::new(false, 10, 8, Palette::classic()),
            Err(ConfigError::InsufficientColors {
                palette_len: 6,
                sequence_len: 10
            })
        );
    }

    #[test]
    fn config_allows_long_code_with_duplicates() {
        let config = GameConfig::new(true, 10, 8, Palette::classic()).unwrap();
        assert_eq!(config.sequence_len(), 10);
        assert!(config.duplicates_allowed());
    }

    #[test]
    fn config_allows_exact_fit_without_duplicates() {
        assert!(GameConfig::new(false, 6, 3, Palette::classic()).is_ok());
    }
}
