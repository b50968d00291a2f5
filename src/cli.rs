//! Command-line interface for strictly_gomoku.

use clap::Parser;
use std::path::PathBuf;
use strictly_gomoku::{BoardSize, ConfigError, ConfigErrorKind, GameConfig};
use tracing::instrument;

/// Strictly Gomoku - five in a row in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_gomoku")]
#[command(about = "Play gomoku on a 3x3, 10x10 or 15x15 board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML file with game settings; flags below override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Board dimension: 3, 10 or 15
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Marks in a row needed to win
    #[arg(short, long)]
    pub run_length: Option<usize>,

    /// Place random obstacles on the board
    #[arg(long)]
    pub obstacles: bool,

    /// Number of obstacles when obstacles are enabled
    #[arg(long)]
    pub obstacle_count: Option<usize>,

    /// Seed for reproducible obstacle layouts
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print JSON snapshots instead of the text board
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Builds the game configuration from the config file and flags.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be loaded, the size is
    /// unsupported, or the combined settings are invalid.
    #[instrument(skip(self))]
    pub fn game_config(&self) -> Result<GameConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(size) = self.size {
            let size = BoardSize::try_from(size)
                .map_err(|_| ConfigError::new(ConfigErrorKind::UnsupportedBoardSize(size)))?;
            config = config.with_size(size);
        }
        if let Some(run_length) = self.run_length {
            config = config.with_run_length(run_length);
        }
        if self.obstacles {
            config = config.with_obstacles_enabled(true);
        }
        if let Some(count) = self.obstacle_count {
            config = config.with_obstacle_count(count);
        }

        config.validate()?;
        Ok(config)
    }
}
