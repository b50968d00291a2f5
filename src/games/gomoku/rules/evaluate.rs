//! Combined win/draw verdict for a single move.

use super::super::{Board, Player, Position};
use super::draw::is_full;
use super::win::check_win;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Precondition failure when asking for a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum EvaluationError {
    /// The last move lies outside the board.
    #[display("Position {} is outside a {}x{} board", _0, _1, _1)]
    OutOfBounds(Position, usize),

    /// The last move's cell holds no mark.
    #[display("Position {} is empty, nothing to evaluate", _0)]
    EmptyCell(Position),

    /// The run length cannot be satisfied on this board.
    #[display("Run length {} is not in 1..={}", run_length, size)]
    InvalidRunLength {
        /// Requested run length.
        run_length: usize,
        /// Board dimension.
        size: usize,
    },
}

impl std::error::Error for EvaluationError {}

/// Outcome of evaluating the board after a move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Evaluation {
    /// Neither a win nor a full board.
    Continue,
    /// The move completed a run.
    Win {
        /// Player who completed the run.
        winner: Player,
        /// Leading `run_length` cells of the run.
        winning_cells: Vec<Position>,
    },
    /// Every cell is filled and nobody won.
    Draw,
}

impl Evaluation {
    /// Returns true for a win or a draw.
    pub fn is_game_over(&self) -> bool {
        !matches!(self, Evaluation::Continue)
    }

    /// Returns true if the move won the game.
    pub fn is_win(&self) -> bool {
        matches!(self, Evaluation::Win { .. })
    }

    /// Returns true if the board filled up without a winner.
    pub fn is_draw(&self) -> bool {
        matches!(self, Evaluation::Draw)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Evaluation::Win { winner, .. } => Some(*winner),
            Evaluation::Continue | Evaluation::Draw => None,
        }
    }

    /// Cells of the winning run, empty unless this is a win.
    pub fn winning_cells(&self) -> &[Position] {
        match self {
            Evaluation::Win { winning_cells, .. } => winning_cells,
            Evaluation::Continue | Evaluation::Draw => &[],
        }
    }
}

/// Validates evaluator inputs and returns the mark at `last`.
pub(super) fn check_preconditions(
    board: &Board,
    last: Position,
    run_length: usize,
) -> Result<Player, EvaluationError> {
    let size = board.size();
    if run_length == 0 || run_length > size {
        return Err(EvaluationError::InvalidRunLength { run_length, size });
    }
    if !board.contains(last) {
        return Err(EvaluationError::OutOfBounds(last, size));
    }
    board
        .player_at(last)
        .ok_or(EvaluationError::EmptyCell(last))
}

/// Decides whether the move at `last` ended the game.
///
/// A win is checked first, so a move that fills the last cell and
/// completes a run is reported as a win, never a draw. Pure: the board is
/// only read.
///
/// # Errors
///
/// Fails fast when `last` is empty or off the board, or when `run_length`
/// is outside `1..=size`.
#[instrument(skip(board), fields(size = board.size()))]
pub fn evaluate(
    board: &Board,
    last: Position,
    run_length: usize,
) -> Result<Evaluation, EvaluationError> {
    if let Some(run) = check_win(board, last, run_length)? {
        debug!(winner = %run.player, "Evaluation: win");
        return Ok(Evaluation::Win {
            winner: run.player,
            winning_cells: run.cells,
        });
    }

    if is_full(board) {
        debug!("Evaluation: draw");
        return Ok(Evaluation::Draw);
    }

    Ok(Evaluation::Continue)
}
