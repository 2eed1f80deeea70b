//! Simple interactive CLI mode
//!
//! Line-based play without the TUI

use crate::game::{Command, GameConfig, GameState, RandomSource};
use crate::input::decode_char;
use crate::output::{print_board, print_outcome, print_welcome};
use anyhow::Result;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Apply one line of player input to a game
///
/// Every character is decoded as a key. A line that leaves the guess full is
/// submitted, and so is an empty line.
#[must_use]
pub fn apply_line(state: &GameState, line: &str) -> GameState {
    let mut next = line
        .chars()
        .filter_map(decode_char)
        .fold(state.clone(), |s, command| s.apply(command));

    let full = next.current().len() == next.config().sequence_len();
    if line.trim().is_empty() || full {
        next = next.apply(Command::SubmitGuess);
    }

    next
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading stdin or flushing stdout fails.
pub fn run_simple<R: RandomSource + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let mut state = GameState::new(config.clone(), rng)?;
    print_welcome(config);
    print_board(&state);

    loop {
        if state.is_over() {
            print_outcome(&state);
            match prompt(&mut lines, "Play again? (yes/no)")?.as_deref() {
                Some("yes" | "y") => {
                    state = GameState::new(config.clone(), rng)?;
                    println!("\n🔄 New game started!\n");
                    print_board(&state);
                    continue;
                }
                _ => break,
            }
        }

        let Some(input) = prompt(&mut lines, "Guess")? else {
            break;
        };

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => break,
            "new" | "n" => {
                state = GameState::new(config.clone(), rng)?;
                println!("\n🔄 New game started!\n");
            }
            _ => {
                let before = state.guesses_used();
                state = apply_line(&state, &input);
                if state.guesses_used() == before {
                    debug!(input = %input, "no guess submitted");
                }
            }
        }

        print_board(&state);
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Prompt and read one trimmed line; `None` on end of input
fn prompt<B: BufRead>(lines: &mut io::Lines<B>, label: &str) -> Result<Option<String>> {
    print!("{label}: ");
    io::stdout().flush()?;

    Ok(lines
        .next()
        .transpose()?
        .map(|line| line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color::{Blue, Green, Red, Yellow};
    use crate::core::{Palette, Sequence};
    use crate::game::Outcome;

    fn game() -> GameState {
        let config = GameConfig::new(true, 4, 10, Palette::classic()).unwrap();
        GameState::with_hidden(config, Sequence::from(vec![Blue, Green, Red, Yellow])).unwrap()
    }

    #[test]
    fn apply_line_full_guess_submits() {
        let state = apply_line(&game(), "1234");
        assert_eq!(state.outcome(), Outcome::Won);
        assert_eq!(state.guesses_used(), 1);
    }

    #[test]
    fn apply_line_partial_guess_waits() {
        let state = apply_line(&game(), "12");
        assert_eq!(state.current().len(), 2);
        assert_eq!(state.guesses_used(), 0);
    }

    #[test]
    fn apply_line_spreads_over_lines() {
        let state = apply_line(&apply_line(&game(), "56"), "65");
        assert!(state.current().is_empty());
        assert_eq!(state.guesses_used(), 1);
        assert_eq!(state.outcome(), Outcome::InProgress);
    }

    #[test]
    fn apply_line_undo_character() {
        let state = apply_line(&game(), "125<");
        assert_eq!(state.current().colors(), &[Blue, Green]);
    }

    #[test]
    fn apply_line_ignores_noise_and_extra_keys() {
        // Fifth pick is refused by the engine; the full guess is submitted
        let state = apply_line(&game(), "1 2 x 3 4 5");
        assert_eq!(state.outcome(), Outcome::Won);
    }

    #[test]
    fn apply_line_empty_line_on_partial_guess_is_noop() {
        let partial = apply_line(&game(), "1");
        assert_eq!(apply_line(&partial, ""), partial);
    }
}
