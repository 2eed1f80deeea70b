//! Error types shared by the core types and the game engine

use crate::core::Color;
use thiserror::Error;

/// A lookup past the end of a palette or sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("index {index} is out of range for length {len}")]
pub struct IndexOutOfRange {
    pub index: usize,
    pub len: usize,
}

/// Invalid game configuration, reported before any game state exists
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{field} must be greater than zero")]
    NonPositiveValue { field: &'static str },

    #[error("palette must contain at least two colors, got {0}")]
    PaletteTooSmall(usize),

    #[error(
        "not enough colors: {palette_len} colors cannot fill {sequence_len} slots without duplicates"
    )]
    InsufficientColors {
        palette_len: usize,
        sequence_len: usize,
    },

    #[error("palette lists {0} more than once")]
    DuplicateColor(Color),

    #[error("hidden sequence does not fit the configuration: {0}")]
    HiddenMismatch(&'static str),
}

/// Why a command was refused by [`GameState::try_apply`](crate::game::GameState::try_apply)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("no palette color at key {}", .0.index + 1)]
    IndexOutOfRange(#[from] IndexOutOfRange),

    #[error("the current guess is already full")]
    GuessFull,

    #[error("the current guess has {filled} of {required} colors")]
    GuessIncomplete { filled: usize, required: usize },

    #[error("the game is over")]
    GameOver,
}
