//! Command implementations

pub mod simple;

pub use simple::{apply_line, run_simple};
