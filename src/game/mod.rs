//! Game rules
//!
//! Configuration, hidden code generation and the turn state machine.

mod config;
mod engine;
mod generator;

pub use config::GameConfig;
pub use engine::{Command, GameState, GuessRecord, Outcome, apply_command, create_game};
pub use generator::{RandomSource, generate};
