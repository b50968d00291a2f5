//! Strictly Gomoku library - a type-safe gomoku engine
//!
//! This library implements "five in a row" with configurable board sizes,
//! run lengths and randomly placed obstacles.
//!
//! # Architecture
//!
//! - **Game**: state engine that validates moves, alternates turns and
//!   locks once the game is won or drawn
//! - **Rules**: pure win and draw evaluation over a board
//! - **Obstacles**: reject-and-retry sampling of blocked cells
//! - **Session**: text command loop around a single game
//!
//! # Example
//!
//! ```
//! use strictly_gomoku::{BoardSize, Game, GameConfig, Player};
//!
//! # fn example() -> Result<(), strictly_gomoku::ConfigError> {
//! let mut game = Game::new(GameConfig::new(BoardSize::Fifteen))?;
//! for col in 0..4 {
//!     assert!(game.make_move(0, col));
//!     assert!(game.make_move(1, col));
//! }
//! assert!(game.make_move(0, 4));
//! assert_eq!(game.winner(), Some(Player::X));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod games;
mod session;

// Crate-level exports - Game engine
pub use games::gomoku::{
    Board, BoardSize, Game, GameSnapshot, GameStatus, Move, MoveError, MoveOutcome, Player,
    Position, Square,
};

// Crate-level exports - Configuration
pub use games::gomoku::{
    ConfigError, ConfigErrorKind, DEFAULT_OBSTACLE_COUNT, GameConfig, ObstacleConfig,
};

// Crate-level exports - Obstacles
pub use games::gomoku::ObstacleSet;

// Crate-level exports - Rules and contracts
pub use games::gomoku::{
    Direction, Evaluation, EvaluationError, GameNotOver, InBounds, LegalMove, NotObstructed,
    SquareIsEmpty, WinningRun, check_win, evaluate, invariants, is_full, rules,
};

// Crate-level exports - Session
pub use session::{Command, CommandError, PlaySession, Reply};
