//! Move preconditions.
//!
//! Each precondition is a small checker; `LegalMove` composes them in the
//! order rejections are reported: game over, off the board, obstacle,
//! occupied.

use super::action::MoveError;
use super::game::Game;
use super::position::Position;
use tracing::instrument;

/// Precondition: the game has not ended.
pub struct GameNotOver;

impl GameNotOver {
    /// Checks the precondition.
    pub fn check(game: &Game) -> Result<(), MoveError> {
        if game.is_game_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the cell lies on the board.
pub struct InBounds;

impl InBounds {
    /// Checks the precondition.
    pub fn check(pos: Position, game: &Game) -> Result<(), MoveError> {
        if game.board().contains(pos) {
            Ok(())
        } else {
            Err(MoveError::OutOfBounds(pos))
        }
    }
}

/// Precondition: the cell is not an obstacle.
pub struct NotObstructed;

impl NotObstructed {
    /// Checks the precondition.
    pub fn check(pos: Position, game: &Game) -> Result<(), MoveError> {
        if game.obstacles().contains(pos) {
            Err(MoveError::Obstructed(pos))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the cell holds no mark.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Checks the precondition.
    pub fn check(pos: Position, game: &Game) -> Result<(), MoveError> {
        if game.board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(pos))
        }
    }
}

/// Composite precondition: a move is legal if every check above passes.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(pos: Position, game: &Game) -> Result<(), MoveError> {
        GameNotOver::check(game)?;
        InBounds::check(pos, game)?;
        NotObstructed::check(pos, game)?;
        SquareIsEmpty::check(pos, game)?;
        Ok(())
    }
}
