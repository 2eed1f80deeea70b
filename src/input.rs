//! Key decoding
//!
//! Maps raw key names onto engine commands. Digits select palette slots
//! one-based; whether the slot exists is left to the engine.

use crate::game::Command;

/// Decode a named key (`"1"`..`"9"`, `"backspace"`, `"enter"`)
#[must_use]
pub fn decode_key(key: &str) -> Option<Command> {
    match key {
        "backspace" => Some(Command::RemoveLast),
        "enter" => Some(Command::SubmitGuess),
        _ => {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_digit() => decode_char(c),
                _ => None,
            }
        }
    }
}

/// Decode a single typed character
///
/// `'1'`..`'9'` pick a color and `'<'` removes the last pick. `'0'` maps to
/// nothing.
#[must_use]
pub fn decode_char(c: char) -> Option<Command> {
    match c {
        '1'..='9' => c
            .to_digit(10)
            .map(|digit| Command::PickColor(digit as usize - 1)),
        '<' => Some(Command::RemoveLast),
        _ => None,
    }
}
