//! Display functions for the line-oriented shell

use super::formatters::{MASK, feedback_counts, palette_legend, sequence_pegs};
use crate::game::{GameConfig, GameState, Outcome};
use colored::Colorize;

/// Print the rules line and palette legend for a new game
pub fn print_welcome(config: &GameConfig) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "MASTERMIND".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\nCrack a code of {} pegs in {} guesses ({}).",
        config.sequence_len(),
        config.max_guesses(),
        if config.duplicates_allowed() {
            "colors may repeat"
        } else {
            "no repeated colors"
        }
    );
    println!("Colors: {}", palette_legend(config.palette()));
    println!("Type digits to pick, '<' to undo a pick, an empty line to submit.");
    println!("Commands: 'new' for a new game, 'quit' to exit.\n");
}

/// Print past guesses and the guess being built
pub fn print_board(state: &GameState) {
    let width = state.config().sequence_len();

    println!("{}", "─".repeat(60).cyan());
    for (i, record) in state.history().iter().enumerate() {
        println!(
            " {:>2}. {}   {}",
            i + 1,
            sequence_pegs(&record.sequence, width),
            feedback_counts(record.feedback)
        );
    }

    if !state.is_over() {
        println!(
            " {:>2}. {}   {}",
            state.guesses_used() + 1,
            sequence_pegs(state.current(), width),
            format!("{} guesses left", state.guesses_remaining()).bright_black()
        );
    }
    println!("{}", "─".repeat(60).cyan());
}

/// Print the masked or revealed code and the end-of-game banner
pub fn print_outcome(state: &GameState) {
    let width = state.config().sequence_len();

    match state.hidden() {
        Some(hidden) => println!("Code: {}", sequence_pegs(hidden, width)),
        None => println!("Code: {}", vec![MASK; width].join(" ")),
    }

    match state.outcome() {
        Outcome::Won => {
            let guesses = state.guesses_used();
            println!(
                "\n{}",
                format!(
                    "✅ Victory! Cracked in {guesses} {}",
                    if guesses == 1 { "guess" } else { "guesses" }
                )
                .green()
                .bold()
            );
        }
        Outcome::Lost => {
            println!(
                "\n{}",
                format!("❌ Lose! Out of guesses after {}", state.guesses_used())
                    .red()
                    .bold()
            );
        }
        Outcome::InProgress => {}
    }
}
