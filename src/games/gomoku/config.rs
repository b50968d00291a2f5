//! Game configuration and configuration errors.

use super::position::Position;
use super::types::BoardSize;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Number of obstacles placed when the configuration does not say otherwise.
pub const DEFAULT_OBSTACLE_COUNT: usize = 15;

/// What went wrong with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ConfigErrorKind {
    /// Board dimension other than 3, 10 or 15.
    #[display("unsupported board size {} (expected 3, 10 or 15)", _0)]
    UnsupportedBoardSize(usize),

    /// Run length cannot be satisfied on the board.
    #[display("run length {} is not in 1..={}", run_length, size)]
    InvalidRunLength {
        /// Requested run length.
        run_length: usize,
        /// Board dimension.
        size: usize,
    },

    /// More obstacles requested than the board has cells.
    #[display("cannot place {} obstacles on a board with {} cells", count, cells)]
    TooManyObstacles {
        /// Requested obstacle count.
        count: usize,
        /// Cells on the board.
        cells: usize,
    },

    /// An explicit obstacle lies outside the board.
    #[display("obstacle {} is outside a {}x{} board", _0, _1, _1)]
    ObstacleOutOfBounds(Position, usize),

    /// An explicit obstacle layout lists the same cell twice.
    #[display("obstacle {} is listed more than once", _0)]
    DuplicateObstacle(Position),

    /// Reading a configuration file failed.
    #[display("failed to read config file: {}", _0)]
    Io(String),

    /// A configuration file is not valid TOML for a game.
    #[display("failed to parse config: {}", _0)]
    Parse(String),
}

/// Configuration error with caller location.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", kind, file, line)]
pub struct ConfigError {
    /// What went wrong.
    pub kind: ConfigErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns what went wrong.
    pub fn kind(&self) -> &ConfigErrorKind {
        &self.kind
    }
}

impl From<ConfigErrorKind> for ConfigError {
    #[track_caller]
    fn from(kind: ConfigErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Obstacle ("mined cell") mode settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct ObstacleConfig {
    /// Whether obstacles are placed at reset.
    enabled: bool,
    /// How many obstacles to place.
    count: usize,
}

impl ObstacleConfig {
    /// Obstacles switched off.
    pub fn off() -> Self {
        Self {
            enabled: false,
            count: DEFAULT_OBSTACLE_COUNT,
        }
    }

    /// Obstacles switched on with the given count.
    pub fn on(count: usize) -> Self {
        Self {
            enabled: true,
            count,
        }
    }
}

impl Default for ObstacleConfig {
    fn default() -> Self {
        Self::off()
    }
}

/// Settings fixed for the lifetime of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board dimension.
    size: BoardSize,
    /// Run length override; `None` uses the board's default.
    #[getter(skip)]
    run_length: Option<usize>,
    /// Obstacle mode.
    obstacles: ObstacleConfig,
}

impl GameConfig {
    /// Creates a configuration for a board size with default rules.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Changes the board size, keeping the other settings.
    pub fn with_size(mut self, size: BoardSize) -> Self {
        self.size = size;
        self
    }

    /// Overrides the run length required to win.
    pub fn with_run_length(mut self, run_length: usize) -> Self {
        self.run_length = Some(run_length);
        self
    }

    /// Replaces the obstacle settings.
    pub fn with_obstacles(mut self, obstacles: ObstacleConfig) -> Self {
        self.obstacles = obstacles;
        self
    }

    /// Turns obstacles on or off, keeping the count.
    pub fn with_obstacles_enabled(mut self, enabled: bool) -> Self {
        self.obstacles.enabled = enabled;
        self
    }

    /// Sets the obstacle count, keeping the on/off switch.
    pub fn with_obstacle_count(mut self, count: usize) -> Self {
        self.obstacles.count = count;
        self
    }

    /// Board dimension as a number of rows.
    pub fn dimension(&self) -> usize {
        self.size.dimension()
    }

    /// Run length required to win: the override if set, else 3 on a 3x3
    /// board and 5 otherwise.
    pub fn run_length(&self) -> usize {
        self.run_length
            .unwrap_or_else(|| self.size.default_run_length())
    }

    /// Checks the configuration against its board size.
    ///
    /// # Errors
    ///
    /// Fails if the run length is outside `1..=size` or if obstacles are
    /// enabled with more obstacles than cells.
    #[instrument]
    pub fn validate(&self) -> Result<(), ConfigError> {
        let size = self.dimension();
        let run_length = self.run_length();
        if run_length == 0 || run_length > size {
            return Err(ConfigErrorKind::InvalidRunLength { run_length, size }.into());
        }

        let cells = self.size.cells();
        if self.obstacles.enabled && self.obstacles.count > cells {
            return Err(ConfigErrorKind::TooManyObstacles {
                count: self.obstacles.count,
                cells,
            }
            .into());
        }

        Ok(())
    }

    /// Parses and validates a TOML configuration.
    ///
    /// ```toml
    /// size = 10
    /// run_length = 4
    ///
    /// [obstacles]
    /// enabled = true
    /// count = 12
    /// ```
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(ConfigErrorKind::Parse(e.to_string())))?;
        config.validate()?;
        debug!(?config, "Config parsed");
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(ConfigErrorKind::Io(e.to_string())))?;

        let config = Self::from_toml_str(&content)?;
        info!(size = %config.size, run_length = config.run_length(), "Config loaded successfully");
        Ok(config)
    }
}
