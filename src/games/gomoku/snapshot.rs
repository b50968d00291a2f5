//! Serializable copy of a game.

use super::action::Move;
use super::game::Game;
use super::phases::GameStatus;
use super::position::Position;
use super::types::Player;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Everything a presentation layer needs to redraw a game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Board dimension.
    size: usize,
    /// Marks in a row needed to win.
    run_length: usize,
    /// Cells row by row; `None` is empty.
    cells: Vec<Vec<Option<Player>>>,
    /// Player to move (the winner once the game is won).
    current_player: Player,
    /// Obstacles in row-major order.
    obstacles: Vec<Position>,
    /// Game status, including winning cells.
    status: GameStatus,
    /// Accepted moves, oldest first.
    history: Vec<Move>,
}

impl From<&Game> for GameSnapshot {
    fn from(game: &Game) -> Self {
        Self {
            size: game.size(),
            run_length: game.run_length(),
            cells: game
                .board()
                .rows()
                .map(|row| row.iter().map(|square| square.player()).collect())
                .collect(),
            current_player: game.current_player(),
            obstacles: game.obstacles().iter().collect(),
            status: game.status().clone(),
            history: game.history().to_vec(),
        }
    }
}
