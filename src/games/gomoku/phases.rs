//! Game phases.
//!
//! `InProgress` is the only phase that accepts moves. `Won` and `Drawn` are
//! terminal and are left only through a reset.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// Current phase of the game, including terminal details.
///
/// Holding the winner and the winning run inside `Won` means a finished
/// game always has exactly one of "a winner" or "a draw".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    #[default]
    InProgress,
    /// A player completed a run.
    Won {
        /// The winner.
        winner: Player,
        /// Leading `run_length` cells of the winning run.
        winning_cells: Vec<Position>,
    },
    /// The board filled up without a winner.
    Drawn,
}

impl GameStatus {
    /// Returns true once the game is won or drawn.
    pub fn is_game_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won { winner, .. } => Some(*winner),
            GameStatus::InProgress | GameStatus::Drawn => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, GameStatus::Drawn)
    }

    /// Cells to highlight, empty unless the game was won.
    pub fn winning_cells(&self) -> &[Position] {
        match self {
            GameStatus::Won { winning_cells, .. } => winning_cells,
            GameStatus::InProgress | GameStatus::Drawn => &[],
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won { winner, .. } => write!(f, "Player {winner} wins"),
            GameStatus::Drawn => write!(f, "Draw"),
        }
    }
}
