//! Monotonic board invariant: cells never change once marked.

use super::super::{Board, Game};
use super::Invariant;

/// Invariant: Board cells are monotonic (never overwritten).
///
/// Replaying the move record onto an empty board must reproduce the
/// current board exactly, with no placement hitting an occupied cell.
pub struct MonotonicBoardInvariant;

impl Invariant<Game> for MonotonicBoardInvariant {
    fn holds(game: &Game) -> bool {
        let mut reconstructed = Board::new(game.size());

        for mov in game.history() {
            if reconstructed.place(mov.position(), mov.player()).is_err() {
                return false;
            }
        }

        &reconstructed == game.board()
    }

    fn description() -> &'static str {
        "Board matches the replayed move record"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::gomoku::{BoardSize, GameConfig, Move, Player, Position};

    #[test]
    fn test_played_game_holds() {
        let mut game = Game::new(GameConfig::new(BoardSize::Ten)).unwrap();
        for (row, col) in [(0, 0), (9, 9), (4, 5)] {
            assert!(game.make_move(row, col));
        }
        assert!(MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_overwritten_cell_violates() {
        let mut game = Game::new(GameConfig::new(BoardSize::Three)).unwrap();
        assert!(game.make_move(0, 0));
        assert!(game.make_move(1, 1));
        game.history.push(Move::new(Player::X, Position::new(1, 1)));
        assert!(!MonotonicBoardInvariant::holds(&game));
    }
}
