//! Game state and the turn state machine
//!
//! A [`GameState`] is an immutable snapshot. Commands produce a fresh state,
//! so a front end holds one value and swaps it wholesale after every input.

use super::config::GameConfig;
use super::generator::{RandomSource, generate};
use crate::core::{Feedback, Sequence};
use crate::error::{CommandError, ConfigError};
use std::fmt;
use tracing::{debug, info, instrument, warn};

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Player input, already decoded by a front end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Append the palette color at this 0-based index to the current guess
    PickColor(usize),
    /// Drop the last color of the current guess
    RemoveLast,
    /// Score the current guess
    SubmitGuess,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PickColor(index) => write!(f, "pick {index}"),
            Self::RemoveLast => f.write_str("remove last"),
            Self::SubmitGuess => f.write_str("submit"),
        }
    }
}

/// A submitted guess with its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub sequence: Sequence,
    pub feedback: Feedback,
}

/// Snapshot of one game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    config: GameConfig,
    hidden: Sequence,
    current: Sequence,
    history: Vec<GuessRecord>,
    outcome: Outcome,
}

/// Start a session with a freshly generated hidden code
///
/// # Errors
/// Returns the `ConfigError` raised by code generation.
pub fn create_game<R: RandomSource + ?Sized>(
    config: GameConfig,
    rng: &mut R,
) -> Result<GameState, ConfigError> {
    GameState::new(config, rng)
}

/// Apply one command; refused commands return the state unchanged
#[must_use]
pub fn apply_command(state: &GameState, command: Command) -> GameState {
    state.apply(command)
}

impl GameState {
    /// Start a session, drawing the hidden code from `rng`
    ///
    /// `rng` is consulted here and never again.
    ///
    /// # Errors
    /// Returns `InsufficientColors` if the code cannot be drawn. A validated
    /// [`GameConfig`] never triggers this.
    pub fn new<R: RandomSource + ?Sized>(
        config: GameConfig,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        let hidden = generate(
            config.sequence_len(),
            config.palette(),
            config.duplicates_allowed(),
            rng,
        )?;

        info!(
            sequence_len = config.sequence_len(),
            max_guesses = config.max_guesses(),
            colors = config.palette().len(),
            duplicates = config.duplicates_allowed(),
            "new game"
        );

        Ok(Self::fresh(config, hidden))
    }

    /// Start a session with a known hidden code
    ///
    /// # Errors
    /// Returns `HiddenMismatch` if the code has the wrong length, uses a color
    /// outside the palette, or repeats a color when duplicates are disallowed.
    pub fn with_hidden(config: GameConfig, hidden: Sequence) -> Result<Self, ConfigError> {
        if hidden.len() != config.sequence_len() {
            return Err(ConfigError::HiddenMismatch("wrong length"));
        }
        if !hidden.iter().all(|color| config.palette().contains(color)) {
            return Err(ConfigError::HiddenMismatch("color outside the palette"));
        }
        if !config.duplicates_allowed() && !hidden.is_distinct() {
            return Err(ConfigError::HiddenMismatch("repeated color"));
        }

        Ok(Self::fresh(config, hidden))
    }

    fn fresh(config: GameConfig, hidden: Sequence) -> Self {
        Self {
            history: Vec::with_capacity(config.max_guesses()),
            config,
            hidden,
            current: Sequence::empty(),
            outcome: Outcome::InProgress,
        }
    }

    /// Apply a command, absorbing any refusal as a no-op
    #[must_use]
    pub fn apply(&self, command: Command) -> Self {
        match self.try_apply(command) {
            Ok(next) => next,
            Err(CommandError::IndexOutOfRange(err)) => {
                warn!(%command, %err, "rejected out-of-range pick");
                self.clone()
            }
            Err(err) => {
                debug!(%command, %err, "ignored command");
                self.clone()
            }
        }
    }

    /// Apply a command, reporting why it was refused
    ///
    /// # Errors
    /// - `GameOver` for any command once the game is won or lost
    /// - `IndexOutOfRange` when picking past the end of the palette
    /// - `GuessFull` when picking with a complete guess
    /// - `GuessIncomplete` when submitting a partial guess
    #[instrument(level = "debug", skip(self), fields(guesses = self.history.len()))]
    pub fn try_apply(&self, command: Command) -> Result<Self, CommandError> {
        if self.outcome.is_terminal() {
            return Err(CommandError::GameOver);
        }

        match command {
            Command::PickColor(index) => self.pick_color(index),
            Command::RemoveLast => Ok(self.with_current(self.current.remove_last())),
            Command::SubmitGuess => self.submit_guess(),
        }
    }

    fn pick_color(&self, index: usize) -> Result<Self, CommandError> {
        let color = self.config.palette().get(index)?;

        if self.current.len() >= self.config.sequence_len() {
            return Err(CommandError::GuessFull);
        }

        Ok(self.with_current(self.current.append(color)))
    }

    fn submit_guess(&self) -> Result<Self, CommandError> {
        let required = self.config.sequence_len();
        if self.current.len() != required {
            return Err(CommandError::GuessIncomplete {
                filled: self.current.len(),
                required,
            });
        }

        let feedback = Feedback::score(&self.current, &self.hidden);

        let outcome = if feedback.is_perfect(required) {
            Outcome::Won
        } else if self.history.len() + 1 == self.config.max_guesses() {
            // The losing guess still counts and is recorded
            Outcome::Lost
        } else {
            Outcome::InProgress
        };

        let mut history = self.history.clone();
        history.push(GuessRecord {
            sequence: self.current.clone(),
            feedback,
        });

        debug!(
            guess = %self.current,
            exact = feedback.exact,
            misplaced = feedback.misplaced,
            "scored guess"
        );
        if outcome.is_terminal() {
            info!(?outcome, guesses = history.len(), "game over");
        }

        Ok(Self {
            config: self.config.clone(),
            hidden: self.hidden.clone(),
            current: Sequence::empty(),
            history,
            outcome,
        })
    }

    fn with_current(&self, current: Sequence) -> Self {
        Self {
            current,
            ..self.clone()
        }
    }

    /// The hidden code, revealed only once the game has ended
    #[must_use]
    pub fn hidden(&self) -> Option<&Sequence> {
        self.outcome.is_terminal().then_some(&self.hidden)
    }

    #[must_use]
    pub const fn current(&self) -> &Sequence {
        &self.current
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn guesses_remaining(&self) -> usize {
        self.config.max_guesses().saturating_sub(self.history.len())
    }

    #[must_use]
    pub fn last_feedback(&self) -> Option<Feedback> {
        self.history.last().map(|record| record.feedback)
    }
}
