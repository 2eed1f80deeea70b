//! Mastermind - CLI
//!
//! Play Mastermind in a full-screen TUI or a simple line mode.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use mastermind::{
    commands::run_simple,
    core::{Color, Palette},
    game::GameConfig,
    interactive::{App, run_tui},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Break the hidden color code before your guesses run out",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    game: GameArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode without TUI
    Simple,
}

#[derive(Args)]
struct GameArgs {
    /// Number of pegs in the hidden code
    #[arg(short, long, global = true, default_value = "4")]
    length: usize,

    /// Number of guesses allowed
    #[arg(short = 'g', long, global = true, default_value = "10")]
    max_guesses: usize,

    /// Forbid repeated colors in the hidden code
    #[arg(long, global = true)]
    no_duplicates: bool,

    /// Use the first N standard colors (max 9)
    #[arg(short, long, global = true, default_value = "6", conflicts_with = "palette")]
    colors: usize,

    /// Explicit comma-separated palette, e.g. red,green,blue
    #[arg(short, long, global = true, value_delimiter = ',')]
    palette: Option<Vec<Color>>,

    /// Seed for a reproducible hidden code
    #[arg(long, global = true)]
    seed: Option<u64>,
}

impl GameArgs {
    fn config(&self) -> Result<GameConfig> {
        let palette = match &self.palette {
            Some(colors) => Palette::new(colors.clone())?,
            None => Palette::standard(self.colors),
        };

        GameConfig::new(
            !self.no_duplicates,
            self.length,
            self.max_guesses,
            palette,
        )
        .context("invalid game configuration")
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.game.config()?;
    let mut rng = cli.game.rng();

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_tui(App::new(config, rng)?),
        Commands::Simple => run_simple(&config, &mut rng),
    }
}
