//! VOCAB client - CLI
//!
//! Terminal client for the VOCAB word-guessing game, with TUI and
//! plain CLI modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};
use vocab_client::{
    api::HttpAuthority,
    commands::run_simple,
    interactive::{App, run_tui},
    session::GameController,
};

#[derive(Parser)]
#[command(
    name = "vocab",
    about = "Cliente de terminal para o jogo de palavras VOCAB",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Base URL of the game server
    #[arg(
        short = 'a',
        long,
        global = true,
        default_value = "http://localhost:8000"
    )]
    api_base: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-oriented, no TUI)
    Simple,
}

/// Log to a file so the TUI screen stays clean
fn init_logging() {
    let home = std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(std::path::PathBuf::from);

    let log_path = home
        .map(|h| h.join(".vocab").join("vocab.log"))
        .unwrap_or_else(|| std::path::PathBuf::from("vocab.log"));

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .ok();

    if let Some(file) = log_file {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let subscriber = fmt()
            .with_env_filter(filter)
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging();
    info!(api_base = %cli.api_base, "vocab client starting");

    let authority = HttpAuthority::new(cli.api_base)?;
    let controller = GameController::new(authority);

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_tui(App::new(controller)),
        Commands::Simple => run_simple(controller).map_err(|e| anyhow::anyhow!(e)),
    }
}
