//! History consistency invariant: history length matches occupied cells.

use super::super::Game;
use super::Invariant;

/// Invariant: History length equals number of occupied cells.
///
/// Every move in history corresponds to exactly one marked cell.
/// No moves are missing, no cells are filled without a move.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        game.history().len() == game.board().occupied_count()
    }

    fn description() -> &'static str {
        "History length matches number of occupied cells"
    }
}
