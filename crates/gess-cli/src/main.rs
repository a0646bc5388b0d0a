//! `gess` - play Gess from the terminal.
//!
//! Commands are read one per line from stdin; see `help` for the list.
//! Logging goes to stderr and is off unless `-v` is given.

mod command;
mod config;
mod render;
mod session;

use anyhow::Context;
use clap::{Parser, Subcommand};
use config::CliConfig;
use render::render;
use session::Session;
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(name = "gess")]
#[command(about = "Play Gess, chess-like go on a 20x20 board")]
struct Cli {
    /// Configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively, reading commands from stdin
    Play,
    /// Print the starting board
    Show,
    /// Replay a list of moves and print the result
    Replay {
        /// Moves such as c2-c3
        moves: Vec<String>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli.config.unwrap_or_else(CliConfig::default_path);
    let config = CliConfig::load(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    tracing::debug!(?config, "configuration loaded");

    let stdout = std::io::stdout();
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let mut session = Session::new(config)?;
            session.run(std::io::stdin().lock(), stdout.lock())?;
        }
        Commands::Show => {
            let position = config.start_position()?;
            println!("{}", render(&position.board, &config.display));
        }
        Commands::Replay { moves } => {
            let mut session = Session::new(config)?;
            let played = session.replay(&moves, stdout.lock())?;
            tracing::info!(
                played,
                total = moves.len(),
                state = %session.game().state(),
                "replay finished"
            );
        }
    }
    Ok(())
}
