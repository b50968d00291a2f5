//! Win detection around the last move.

use super::super::{Board, Direction, Player, Position};
use super::evaluate::{EvaluationError, check_preconditions};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// A completed run of marks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningRun {
    /// Player owning the run.
    pub player: Player,
    /// Line the run lies on.
    pub direction: Direction,
    /// The first `run_length` cells of the run, topmost/leftmost first.
    pub cells: Vec<Position>,
}

/// Checks whether the mark at `last` completes a run of `run_length`.
///
/// Directions are tried in order horizontal, vertical, ↘, ↗ and the first
/// qualifying one is reported. Runs longer than `run_length` are truncated
/// to their leading cells.
///
/// # Errors
///
/// Fails if `last` is off the board or empty, or if `run_length` is not in
/// `1..=size`.
#[instrument(skip(board), fields(size = board.size()))]
pub fn check_win(
    board: &Board,
    last: Position,
    run_length: usize,
) -> Result<Option<WinningRun>, EvaluationError> {
    let player = check_preconditions(board, last, run_length)?;

    for direction in Direction::iter() {
        let (start, len) = run_through(board, last, player, direction);
        if len >= run_length {
            let cells: Vec<Position> = (0..run_length as isize)
                .filter_map(|i| start.step(direction, i, board.size()))
                .collect();
            debug!(%player, %direction, len, "Run complete");
            return Ok(Some(WinningRun {
                player,
                direction,
                cells,
            }));
        }
    }

    Ok(None)
}

/// Measures the contiguous run of `player` marks through `pos`.
///
/// Returns the backward end of the run and its total length.
fn run_through(
    board: &Board,
    pos: Position,
    player: Player,
    direction: Direction,
) -> (Position, usize) {
    let size = board.size();
    let owned = |p: Position| board.player_at(p) == Some(player);

    let mut start = pos;
    let mut len = 1;
    while let Some(prev) = start.step(direction, -1, size).filter(|p| owned(*p)) {
        start = prev;
        len += 1;
    }

    let mut end = pos;
    while let Some(next) = end.step(direction, 1, size).filter(|p| owned(*p)) {
        end = next;
        len += 1;
    }

    (start, len)
}
