//! Game rules for gomoku.
//!
//! Pure functions that judge a board after a move. Rules are separated from
//! board storage so the engine, the invariants and the tests can all call
//! them on any board snapshot.

pub mod draw;
pub mod evaluate;
pub mod win;

pub use draw::is_full;
pub use evaluate::{Evaluation, EvaluationError, evaluate};
pub use win::{WinningRun, check_win};
