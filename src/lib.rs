//! Mastermind
//!
//! A code-breaking game engine: a hidden color sequence, guesses scored with
//! exact and misplaced counts, and a win/loss state machine, plus terminal
//! front ends built on top.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::game::{Command, GameConfig, Outcome, create_game};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut state = create_game(GameConfig::classic(), &mut rng).unwrap();
//!
//! for key in [0, 1, 2, 3] {
//!     state = state.apply(Command::PickColor(key));
//! }
//! state = state.apply(Command::SubmitGuess);
//!
//! let feedback = state.last_feedback().unwrap();
//! println!("{} exact, {} misplaced", feedback.exact, feedback.misplaced);
//! assert_eq!(state.history().len(), 1);
//! assert!(state.outcome() == Outcome::InProgress || state.outcome() == Outcome::Won);
//! ```

// Core domain types
pub mod core;

// Error taxonomy
pub mod error;

// Game rules and state machine
pub mod game;

// Key decoding
pub mod input;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
