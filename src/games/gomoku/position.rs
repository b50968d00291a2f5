//! Board coordinates and line directions.

use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// A cell coordinate on the board.
///
/// Ordered row first, then column, so sorted collections of positions
/// come out in row-major order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct Position {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
}

impl Position {
    /// Creates a position.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Packed row-major index on a board of the given size.
    pub fn index(self, size: usize) -> usize {
        self.row * size + self.col
    }

    /// Inverse of [`Position::index`].
    pub fn from_index(index: usize, size: usize) -> Option<Self> {
        if size == 0 || index >= size * size {
            return None;
        }
        Some(Self::new(index / size, index % size))
    }

    /// Moves `steps` cells along a direction, `None` when leaving the board.
    ///
    /// Negative `steps` walk the direction backwards.
    pub fn step(self, direction: Direction, steps: isize, size: usize) -> Option<Self> {
        let (dr, dc) = direction.delta();
        let row = self.row.checked_add_signed(dr * steps)?;
        let col = self.col.checked_add_signed(dc * steps)?;
        (row < size && col < size).then_some(Self::new(row, col))
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// The four undirected lines through a cell, in the order they are checked.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, derive_more::Display,
)]
pub enum Direction {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    Vertical,
    /// Top-left to bottom-right (↘).
    Diagonal,
    /// Bottom-left to top-right (↗).
    AntiDiagonal,
}

impl Direction {
    /// Row and column delta of one step in the positive sense.
    ///
    /// The anti-diagonal steps down-left, so walking it backwards climbs
    /// towards the top-right and the backward end is always the topmost cell.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }
}
