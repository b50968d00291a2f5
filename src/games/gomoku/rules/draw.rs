//! Draw detection logic for gomoku.

use super::super::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
///
/// Scans row-major and stops at the first empty cell. A full board with
/// no winner indicates a draw.
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}
