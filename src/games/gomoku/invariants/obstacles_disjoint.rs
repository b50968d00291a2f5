//! Obstacle invariant: no mark ever lands on an obstacle.

use super::super::Game;
use super::Invariant;

/// Invariant: Obstacles and marks never share a cell.
pub struct ObstaclesDisjointInvariant;

impl Invariant<Game> for ObstaclesDisjointInvariant {
    fn holds(game: &Game) -> bool {
        game.obstacles()
            .iter()
            .all(|pos| game.board().is_empty(pos))
    }

    fn description() -> &'static str {
        "Obstacle cells hold no marks"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::gomoku::{BoardSize, GameConfig, ObstacleSet, Player, Position};

    fn game_with_obstacle() -> Game {
        let obstacles = ObstacleSet::from_positions([Position::new(1, 1)], 3).unwrap();
        Game::with_obstacles(GameConfig::new(BoardSize::Three), obstacles).unwrap()
    }

    #[test]
    fn test_rejected_obstacle_move_holds() {
        let mut game = game_with_obstacle();
        assert!(!game.make_move(1, 1));
        assert!(game.make_move(0, 0));
        assert!(ObstaclesDisjointInvariant::holds(&game));
    }

    #[test]
    fn test_marked_obstacle_violates() {
        let mut game = game_with_obstacle();
        game.board.place(Position::new(1, 1), Player::X).unwrap();
        assert!(!ObstaclesDisjointInvariant::holds(&game));
    }
}
