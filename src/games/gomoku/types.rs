//! Core domain types for gomoku.

use super::position::Position;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Single-character symbol used when rendering the board.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Occupied(player) => Some(player),
            Square::Empty => None,
        }
    }
}

/// Supported board dimensions.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumIter,
    derive_more::Display,
)]
#[serde(try_from = "usize", into = "usize")]
pub enum BoardSize {
    /// Classic tic-tac-toe board, three in a row wins.
    #[display("3x3")]
    Three,
    /// Medium board, five in a row wins.
    #[display("10x10")]
    Ten,
    /// Full gomoku board, five in a row wins.
    #[default]
    #[display("15x15")]
    Fifteen,
}

impl BoardSize {
    /// Number of rows (and columns).
    pub fn dimension(self) -> usize {
        match self {
            BoardSize::Three => 3,
            BoardSize::Ten => 10,
            BoardSize::Fifteen => 15,
        }
    }

    /// Total number of cells.
    pub fn cells(self) -> usize {
        self.dimension() * self.dimension()
    }

    /// Run length used when the configuration does not override it.
    pub fn default_run_length(self) -> usize {
        match self {
            BoardSize::Three => 3,
            BoardSize::Ten | BoardSize::Fifteen => 5,
        }
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = String;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(BoardSize::Three),
            10 => Ok(BoardSize::Ten),
            15 => Ok(BoardSize::Fifteen),
            other => Err(format!("unsupported board size {other} (expected 3, 10 or 15)")),
        }
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.dimension()
    }
}

/// Square N×N board.
///
/// Cells are stored in row-major order. A marked cell is never cleared;
/// the only way back to an empty board is a fresh `Board::new`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    squares: Vec<Square>,
}

impl Board {
    /// Creates an empty board with `size` rows and columns.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            squares: vec![Square::Empty; size * size],
        }
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if the position lies on the board.
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Gets the cell at the given position, `None` when out of bounds.
    pub fn get(&self, pos: Position) -> Option<Square> {
        if !self.contains(pos) {
            return None;
        }
        self.squares.get(pos.index(self.size)).copied()
    }

    /// Returns the player occupying the position, if any.
    pub fn player_at(&self, pos: Position) -> Option<Player> {
        self.get(pos).and_then(Square::player)
    }

    /// Marks an empty cell for a player.
    ///
    /// Refuses to overwrite an occupied cell or write outside the board.
    pub(crate) fn place(&mut self, pos: Position, player: Player) -> Result<(), &'static str> {
        if !self.contains(pos) {
            return Err("Position out of bounds");
        }
        let index = pos.index(self.size);
        if self.squares[index] != Square::Empty {
            return Err("Square is already occupied");
        }
        self.squares[index] = Square::Occupied(player);
        Ok(())
    }

    /// Clears a cell. Only used to roll back a move that failed evaluation.
    pub(crate) fn clear(&mut self, pos: Position) {
        if self.contains(pos) {
            let index = pos.index(self.size);
            self.squares[index] = Square::Empty;
        }
    }

    /// Checks if a cell is empty. Out-of-bounds positions are not empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        matches!(self.get(pos), Some(Square::Empty))
    }

    /// Returns all cells in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Iterates rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Square]> {
        self.squares.chunks(self.size.max(1))
    }

    /// Number of marked cells.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Formats the board as a human-readable grid.
    ///
    /// `obstacle` decides which empty cells are drawn as `#`.
    pub fn display(&self, obstacle: impl Fn(Position) -> bool) -> String {
        let mut result = String::from("   ");
        for col in 0..self.size {
            result.push_str(&format!("{col:>3}"));
        }
        result.push('\n');

        for (row, cells) in self.rows().enumerate() {
            result.push_str(&format!("{row:>3}"));
            for (col, square) in cells.iter().enumerate() {
                let symbol = match square {
                    Square::Occupied(player) => player.symbol(),
                    Square::Empty if obstacle(Position::new(row, col)) => '#',
                    Square::Empty => '.',
                };
                result.push_str("  ");
                result.push(symbol);
            }
            result.push('\n');
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_new_board_is_empty() {
        for size in BoardSize::iter() {
            let board = Board::new(size.dimension());
            assert_eq!(board.squares().len(), size.cells());
            assert_eq!(board.occupied_count(), 0);
        }
    }

    #[test]
    fn test_place_refuses_overwrite() {
        let mut board = Board::new(3);
        let pos = Position::new(1, 1);
        assert!(board.place(pos, Player::X).is_ok());
        assert!(board.place(pos, Player::O).is_err());
        assert_eq!(board.player_at(pos), Some(Player::X));
    }

    #[test]
    fn test_out_of_bounds_reads_are_none() {
        let board = Board::new(3);
        assert_eq!(board.get(Position::new(3, 0)), None);
        assert_eq!(board.get(Position::new(0, 3)), None);
        assert!(!board.is_empty(Position::new(5, 5)));
    }

    #[test]
    fn test_board_size_round_trips_through_usize() {
        assert_eq!(BoardSize::try_from(10), Ok(BoardSize::Ten));
        assert!(BoardSize::try_from(4).is_err());
        assert_eq!(usize::from(BoardSize::Fifteen), 15);
    }

    #[test]
    fn test_default_run_length() {
        assert_eq!(BoardSize::Three.default_run_length(), 3);
        assert_eq!(BoardSize::Ten.default_run_length(), 5);
        assert_eq!(BoardSize::Fifteen.default_run_length(), 5);
    }

    #[test]
    fn test_display_marks_obstacles() {
        let mut board = Board::new(3);
        board.place(Position::new(0, 0), Player::X).unwrap();
        let text = board.display(|pos| pos == Position::new(2, 2));
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].ends_with("X  .  ."));
        assert!(lines[3].ends_with(".  .  #"));
    }
}
