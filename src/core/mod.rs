//! Core domain types for Mastermind
//!
//! Colors, palettes, sequences and feedback scoring. Everything here is pure
//! and immutable from the outside; the game rules live in [`crate::game`].

mod color;
mod feedback;
mod palette;
mod sequence;

pub use color::{Color, ParseColorError};
pub use feedback::Feedback;
pub use palette::Palette;
pub use sequence::Sequence;
