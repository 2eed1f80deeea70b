//! TUI application state and logic

use crate::error::CommandError;
use crate::game::{Command, GameConfig, GameState, Outcome};
use crate::input::{decode_char, decode_key};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use rustc_hash::FxHashMap;
use std::io;

/// Application state
pub struct App {
    pub config: GameConfig,
    pub state: GameState,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    rng: StdRng,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Results across the games of one run
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Winning guess count -> number of games
    pub guess_distribution: FxHashMap<usize, usize>,
}

impl Statistics {
    fn record(&mut self, state: &GameState) {
        self.total_games += 1;
        if state.outcome() == Outcome::Won {
            self.games_won += 1;
            *self
                .guess_distribution
                .entry(state.guesses_used())
                .or_insert(0) += 1;
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl App {
    /// Create the app and deal the first game
    ///
    /// # Errors
    ///
    /// Returns an error if the first hidden code cannot be generated.
    pub fn new(config: GameConfig, mut rng: StdRng) -> Result<Self> {
        let state = GameState::new(config.clone(), &mut rng)?;

        Ok(Self {
            config,
            state,
            messages: vec![
                Message {
                    text: "Welcome! Break the hidden code.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Digits pick colors, Backspace undoes, Enter submits.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            rng,
        })
    }

    /// Deal a fresh hidden code with the same configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the hidden code cannot be generated.
    pub fn new_game(&mut self) -> Result<()> {
        self.state = GameState::new(self.config.clone(), &mut self.rng)?;
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
        Ok(())
    }

    /// Run one engine command and report what happened
    pub fn handle_command(&mut self, command: Command) {
        match self.state.try_apply(command) {
            Ok(next) => {
                let submitted = next.guesses_used() > self.state.guesses_used();
                self.state = next;
                if submitted {
                    self.report_submission();
                }
            }
            Err(CommandError::GameOver) => {}
            Err(err @ (CommandError::IndexOutOfRange(_) | CommandError::GuessIncomplete { .. })) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
            Err(CommandError::GuessFull) => {
                self.add_message("Guess is full - press Enter to submit", MessageStyle::Error);
            }
        }
    }

    fn report_submission(&mut self) {
        let Some(feedback) = self.state.last_feedback() else {
            return;
        };
        let turn = self.state.guesses_used();

        match self.state.outcome() {
            Outcome::Won => {
                self.stats.record(&self.state);
                let celebration = match turn {
                    1 => "🎯 Victory! First try! 🌟".to_string(),
                    _ => format!("🎉 Victory! Cracked in {turn} guesses 🎉"),
                };
                self.add_message(&celebration, MessageStyle::Success);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            Outcome::Lost => {
                self.stats.record(&self.state);
                self.add_message("Lose! Out of guesses.", MessageStyle::Error);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            Outcome::InProgress => {
                self.add_message(
                    &format!(
                        "Guess {turn}: {feedback} ({} left)",
                        self.state.guesses_remaining()
                    ),
                    MessageStyle::Info,
                );
            }
        }
    }

    /// Translate a key press into app actions
    ///
    /// # Errors
    ///
    /// Returns an error if starting a new game fails.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Char('n') => {
                self.new_game()?;
            }
            KeyCode::Backspace => {
                if let Some(command) = decode_key("backspace") {
                    self.handle_command(command);
                }
            }
            KeyCode::Enter => {
                if let Some(command) = decode_key("enter") {
                    self.handle_command(command);
                }
            }
            KeyCode::Char(c) => {
                if let Some(command) = decode_char(c) {
                    self.handle_command(command);
                }
            }
            _ => {}
        }
        Ok(())
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key)?;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Palette;
    use rand::SeedableRng;

    fn app() -> App {
        let config = GameConfig::new(true, 2, 3, Palette::standard(2)).unwrap();
        App::new(config, StdRng::seed_from_u64(11)).unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::from(code)).unwrap();
    }

    /// Plays every two-peg guess over a two-color palette until the game ends
    fn play_out(app: &mut App) {
        for keys in [['1', '1'], ['1', '2'], ['2', '1'], ['2', '2']] {
            if app.state.is_over() {
                break;
            }
            for key in keys {
                press(app, KeyCode::Char(key));
            }
            press(app, KeyCode::Enter);
        }
    }

    #[test]
    fn app_digits_build_guess() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.state.current().len(), 1);

        press(&mut app, KeyCode::Backspace);
        assert!(app.state.current().is_empty());
    }

    #[test]
    fn app_out_of_range_key_reports_error() {
        let mut app = app();
        press(&mut app, KeyCode::Char('7'));
        assert!(app.state.current().is_empty());
        assert_eq!(
            app.messages.last().map(|m| m.style),
            Some(MessageStyle::Error)
        );
    }

    #[test]
    fn app_partial_submit_reports_error() {
        let mut app = app();
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state.guesses_used(), 0);
        assert_eq!(
            app.messages.last().map(|m| m.style),
            Some(MessageStyle::Error)
        );
    }

    #[test]
    fn app_game_end_updates_stats() {
        let mut app = app();
        play_out(&mut app);

        assert!(app.state.is_over());
        assert_eq!(app.stats.total_games, 1);
        if app.state.outcome() == Outcome::Won {
            assert_eq!(app.stats.games_won, 1);
            assert_eq!(
                app.stats.guess_distribution.get(&app.state.guesses_used()),
                Some(&1)
            );
        } else {
            assert_eq!(app.state.guesses_used(), 3);
        }
    }

    #[test]
    fn app_keys_after_game_over_are_ignored() {
        let mut app = app();
        play_out(&mut app);
        let finished = app.state.clone();

        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state, finished);
        assert_eq!(app.stats.total_games, 1);
    }

    #[test]
    fn app_new_game_resets_board() {
        let mut app = app();
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('n'));
        assert!(app.state.current().is_empty());
        assert_eq!(app.state.outcome(), Outcome::InProgress);
    }

    #[test]
    fn app_quit_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut ctrl_c = self::app();
        ctrl_c
            .handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .unwrap();
        assert!(ctrl_c.should_quit);
    }

    #[test]
    fn statistics_win_rate() {
        let stats = Statistics {
            total_games: 4,
            games_won: 3,
            guess_distribution: FxHashMap::default(),
        };
        assert!((stats.win_rate() - 75.0).abs() < f64::EPSILON);
        assert!(Statistics::default().win_rate().abs() < f64::EPSILON);
    }
}
