//! Gomoku ("five in a row") on a 3x3, 10x10 or 15x15 board, with an
//! optional obstacle mode.

mod action;
mod config;
mod contracts;
mod game;
pub mod invariants;
mod obstacles;
mod phases;
mod position;
pub mod rules;
mod snapshot;
mod types;

pub use action::{Move, MoveError, MoveOutcome};
pub use config::{ConfigError, ConfigErrorKind, DEFAULT_OBSTACLE_COUNT, GameConfig, ObstacleConfig};
pub use contracts::{GameNotOver, InBounds, LegalMove, NotObstructed, SquareIsEmpty};
pub use game::Game;
pub use obstacles::ObstacleSet;
pub use phases::GameStatus;
pub use position::{Direction, Position};
pub use rules::{Evaluation, EvaluationError, WinningRun, check_win, evaluate, is_full};
pub use snapshot::GameSnapshot;
pub use types::{Board, BoardSize, Player, Square};
