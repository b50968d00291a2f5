//! Strictly Gomoku - terminal front end
//!
//! Reads one command per line from stdin and prints the board after every
//! move. Logs go to stderr so they never mix with the board.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::{BufRead, Write};
use strictly_gomoku::{PlaySession, Reply};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.game_config().context("Invalid game configuration")?;

    let rng = match cli.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let session = PlaySession::new(config, rng)
        .context("Failed to start game")?
        .with_json(cli.json);

    run(session)
}

/// Drives the session from stdin until `quit` or end of input.
#[instrument(skip(session))]
fn run(mut session: PlaySession) -> Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    writeln!(stdout, "{}", session.view())?;
    write!(stdout, "> ")?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read input")?;
        if line.trim().is_empty() {
            write!(stdout, "> ")?;
            stdout.flush()?;
            continue;
        }

        match session.handle_line(&line) {
            Reply::Output(text) => writeln!(stdout, "{text}")?,
            Reply::Quit => break,
        }
        write!(stdout, "> ")?;
        stdout.flush()?;
    }

    info!(moves = session.game().move_count(), "Session ended");
    Ok(())
}
