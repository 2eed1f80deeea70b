//! Terminal output formatting
//!
//! Display utilities for the line-oriented shell.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_outcome, print_welcome};
