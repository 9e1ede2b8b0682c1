//! Wordle Game - CLI
//!
//! Play in a full-screen TUI (default) or a simple line-based mode.

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;
use std::io;
use std::path::PathBuf;
use wordle_game::{
    commands::{run_simple, wait_for_source},
    game::GameSession,
    interactive::{App, run_tui},
    logging,
    wordlists::CorpusConfig,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Answers file, one word per line (default: built-in list)
    #[arg(long, global = true)]
    answers: Option<PathBuf>,

    /// Extra accepted guesses, one word per line
    #[arg(long, global = true)]
    allowed: Option<PathBuf>,

    /// Seed for reproducible secret words
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log file (play mode default: <cache dir>/wordle_game/wordle_game.log)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // The TUI owns the terminal, so play mode always logs to a file
    let (mode, log_file) = match command {
        Commands::Play => ("play", cli.log_file.or_else(logging::default_log_path)),
        Commands::Simple => ("simple", cli.log_file),
    };
    logging::init(cli.verbose, log_file.as_deref())?;
    info!("Starting {mode} mode");

    let config = CorpusConfig {
        answers: cli.answers,
        allowed: cli.allowed,
        seed: cli.seed,
    };
    let loader = config.spawn();

    match command {
        Commands::Play => run_tui(App::new(loader)),
        Commands::Simple => {
            let mut session = GameSession::loading();
            wait_for_source(&mut session, &loader)?;
            run_simple(&mut session, io::stdin().lock(), io::stdout().lock())
        }
    }
}
