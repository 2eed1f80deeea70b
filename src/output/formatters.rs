//! Formatting utilities for terminal output

use crate::core::{Color, Feedback, Palette, Sequence};
use colored::{ColoredString, Colorize};

/// Filled peg glyph
pub const PEG: &str = "●";
/// Empty slot glyph
pub const SLOT: &str = "○";
/// Masked hidden peg glyph
pub const MASK: &str = "?";

/// Terminal RGB value for a peg color
#[must_use]
pub const fn rgb(color: Color) -> (u8, u8, u8) {
    match color {
        Color::Blue => (30, 110, 255),
        Color::Green => (40, 200, 70),
        Color::Red => (230, 40, 40),
        Color::Yellow => (250, 220, 30),
        Color::Pink => (255, 120, 200),
        Color::Black => (90, 90, 90),
        Color::Orange => (255, 140, 0),
        Color::Purple => (150, 70, 220),
        Color::Cyan => (0, 210, 220),
    }
}

/// A single colored peg
#[must_use]
pub fn peg(color: Color) -> ColoredString {
    let (r, g, b) = rgb(color);
    PEG.truecolor(r, g, b)
}

/// Sequence as colored pegs, padded with empty slots up to `width`
#[must_use]
pub fn sequence_pegs(sequence: &Sequence, width: usize) -> String {
    let mut cells: Vec<String> = sequence.iter().map(|c| peg(c).to_string()).collect();
    cells.resize(width.max(sequence.len()), SLOT.bright_black().to_string());
    cells.join(" ")
}

/// Sequence as letter codes, e.g. `BGRY`
#[must_use]
pub fn sequence_codes(sequence: &Sequence) -> String {
    sequence.to_string()
}

/// Feedback as `exact/misplaced` counts
#[must_use]
pub fn feedback_counts(feedback: Feedback) -> String {
    format!(
        "{} {}",
        format!("{} exact", feedback.exact).green(),
        format!("{} misplaced", feedback.misplaced).yellow()
    )
}

/// Palette legend pairing each digit key with its color
#[must_use]
pub fn palette_legend(palette: &Palette) -> String {
    palette
        .iter()
        .enumerate()
        .map(|(i, color)| format!("{}:{} {}", i + 1, peg(color), color.name()))
        .collect::<Vec<_>>()
        .join("  ")
}
