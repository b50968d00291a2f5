//! Play session: the composition root that owns one game.
//!
//! A session interprets text commands from a terminal (or any other line
//! source), forwards them to its [`Game`] and produces the text to show.
//! It never reaches into engine internals; it only issues commands and
//! reads state back.

use crate::games::gomoku::{Game, GameConfig, GameStatus};
use derive_more::Display;
use rand_chacha::ChaCha8Rng;
use std::str::FromStr;
use tracing::{debug, info, instrument, warn};

const HELP: &str = "\
Commands:
  <row> <col>   place your mark (also <row>,<col>)
  new           start a new game with the same settings
  show          redraw the board
  help          show this help
  quit          leave";

/// A parsed line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the current player's mark.
    Play {
        /// Target row.
        row: usize,
        /// Target column.
        col: usize,
    },
    /// Start over with the same configuration.
    New,
    /// Redraw the board.
    Show,
    /// Print the command list.
    Help,
    /// End the session.
    Quit,
}

/// Input that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("Unrecognized command: {:?} (type 'help')", _0)]
pub struct CommandError(String);

impl std::error::Error for CommandError {}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            "new" | "n" => return Ok(Command::New),
            "show" | "s" => return Ok(Command::Show),
            "help" | "h" | "?" => return Ok(Command::Help),
            "quit" | "q" | "exit" => return Ok(Command::Quit),
            _ => {}
        }

        let parts: Vec<&str> = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();
        match parts.as_slice() {
            [row, col] => match (row.parse(), col.parse()) {
                (Ok(row), Ok(col)) => Ok(Command::Play { row, col }),
                _ => Err(CommandError(line.to_string())),
            },
            _ => Err(CommandError(line.to_string())),
        }
    }
}

/// What the driver should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Show this text and keep reading.
    Output(String),
    /// Stop reading input.
    Quit,
}

/// One player-facing session around a single [`Game`].
#[derive(Debug)]
pub struct PlaySession {
    game: Game,
    rng: ChaCha8Rng,
    json: bool,
}

impl PlaySession {
    /// Starts a session, drawing obstacles from `rng` now and on every
    /// `new` command.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::ConfigError`] if the configuration is invalid.
    #[instrument(skip(rng))]
    pub fn new(config: GameConfig, mut rng: ChaCha8Rng) -> Result<Self, crate::ConfigError> {
        let game = Game::with_rng(config, &mut rng)?;
        info!(size = %config.size(), run_length = config.run_length(), "Session started");
        Ok(Self {
            game,
            rng,
            json: false,
        })
    }

    /// Switches output to JSON snapshots instead of a text board.
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Returns the game this session drives.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Parses and runs one line of input.
    #[instrument(skip(self))]
    pub fn handle_line(&mut self, line: &str) -> Reply {
        match line.parse::<Command>() {
            Ok(command) => self.execute(command),
            Err(err) => {
                debug!(%err, "Unparseable input");
                Reply::Output(err.to_string())
            }
        }
    }

    /// Runs one command.
    #[instrument(skip(self))]
    pub fn execute(&mut self, command: Command) -> Reply {
        match command {
            Command::Play { row, col } => match self.game.try_move(row, col) {
                Ok(outcome) => {
                    debug!(?outcome, "Move played");
                    Reply::Output(self.view())
                }
                Err(err) => {
                    if !err.is_rejection() {
                        warn!(%err, "Engine failed to judge move");
                    }
                    Reply::Output(format!("Move rejected: {err}"))
                }
            },
            Command::New => {
                let config = *self.game.config();
                match self.game.reset_with_rng(config, &mut self.rng) {
                    Ok(()) => Reply::Output(self.view()),
                    Err(err) => {
                        warn!(%err, "Restart failed");
                        Reply::Output(err.to_string())
                    }
                }
            }
            Command::Show => Reply::Output(self.view()),
            Command::Help => Reply::Output(HELP.to_string()),
            Command::Quit => Reply::Quit,
        }
    }

    /// Board plus status line, or a JSON snapshot in JSON mode.
    pub fn view(&self) -> String {
        if self.json {
            return match serde_json::to_string(&self.game.snapshot()) {
                Ok(json) => json,
                Err(err) => format!("Failed to serialize game: {err}"),
            };
        }
        format!("{}{}", self.game.render(), self.status_line())
    }

    /// One-line summary of whose turn it is or how the game ended.
    pub fn status_line(&self) -> String {
        match self.game.status() {
            GameStatus::InProgress => format!("{} to move", self.game.current_player()),
            GameStatus::Won {
                winner,
                winning_cells,
            } => {
                let cells: Vec<String> = winning_cells.iter().map(ToString::to_string).collect();
                format!("Player {winner} wins: {}", cells.join(" "))
            }
            GameStatus::Drawn => "Draw".to_string(),
        }
    }
}
