//! Move records and move rejection reasons.
//!
//! Moves are domain events, not side effects. The engine appends one to the
//! move record for every accepted placement.

use super::rules::EvaluationError;
use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// An accepted move: a player placing their mark at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Row of the placed mark.
    pub row: usize,
    /// Column of the placed mark.
    pub col: usize,
    /// The player who moved.
    pub player: Player,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self {
            row: position.row,
            col: position.col,
            player,
        }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        Position::new(self.row, self.col)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position())
    }
}

/// Why a move was not applied.
///
/// Every variant except `Evaluation` is a routine rejection: the caller
/// tried a cell that cannot be played right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game is already won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The cell is outside the board.
    #[display("Position {} is outside the board", _0)]
    OutOfBounds(Position),

    /// The cell is an obstacle.
    #[display("Position {} is an obstacle", _0)]
    Obstructed(Position),

    /// The cell already holds a mark.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The rules could not judge the move; the move was rolled back.
    #[display("Evaluation failed: {}", _0)]
    Evaluation(EvaluationError),
}

impl std::error::Error for MoveError {}

impl MoveError {
    /// Returns true for rejections the player caused (as opposed to an
    /// engine failure).
    pub fn is_rejection(&self) -> bool {
        !matches!(self, MoveError::Evaluation(_))
    }
}

/// What an accepted move led to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The game goes on; `next` is to move.
    Continue {
        /// Player to move next.
        next: Player,
    },
    /// The move completed a run.
    Won {
        /// The winner.
        winner: Player,
        /// Leading cells of the winning run.
        winning_cells: Vec<Position>,
    },
    /// The move filled the board without a winner.
    Drawn,
}

impl MoveOutcome {
    /// Returns true if the move ended the game.
    pub fn is_game_over(&self) -> bool {
        !matches!(self, MoveOutcome::Continue { .. })
    }
}
