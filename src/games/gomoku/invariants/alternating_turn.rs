//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{Game, Player};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// The move record must show X, O, X, O, ... starting with X. While the
/// game runs, the player to move is the one after the last mover; once it
/// has ended, the turn stays with the last mover.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();

        let alternates = history.iter().enumerate().all(|(k, mov)| {
            let expected = if k % 2 == 0 { Player::X } else { Player::O };
            mov.player == expected
        });
        if !alternates {
            return false;
        }

        match history.last() {
            None => game.current_player() == Player::X,
            Some(last) if game.is_game_over() => game.current_player() == last.player,
            Some(last) => game.current_player() == last.player.opponent(),
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
