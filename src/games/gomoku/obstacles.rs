//! Obstacle ("mined cell") placement.
//!
//! Obstacles are fixed at reset time and never change during a game. They
//! are kept as a set of [`Position`] values so membership checks need no
//! string keys.

use super::config::{ConfigError, ConfigErrorKind};
use super::position::Position;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, instrument, trace};

/// Unplayable cells for the current game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObstacleSet {
    positions: BTreeSet<Position>,
}

impl ObstacleSet {
    /// No obstacles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws `count` distinct random cells on a `size`×`size` board using
    /// the thread-local RNG.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigErrorKind::TooManyObstacles`] when `count` exceeds
    /// the number of cells.
    #[instrument]
    pub fn generate(count: usize, size: usize) -> Result<Self, ConfigError> {
        Self::generate_with_rng(count, size, &mut rand::thread_rng())
    }

    /// Draws `count` distinct random cells using the given RNG.
    ///
    /// Samples uniformly and retries on collision until `count` unique
    /// cells are collected.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigErrorKind::TooManyObstacles`] when `count` exceeds
    /// the number of cells.
    #[instrument(skip(rng))]
    pub fn generate_with_rng<R: Rng>(
        count: usize,
        size: usize,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        let cells = size * size;
        if count > cells {
            return Err(ConfigErrorKind::TooManyObstacles { count, cells }.into());
        }

        let mut positions = BTreeSet::new();
        let mut draws = 0usize;
        while positions.len() < count {
            let pos = Position::new(rng.gen_range(0..size), rng.gen_range(0..size));
            draws += 1;
            if !positions.insert(pos) {
                trace!(%pos, "Obstacle collision, drawing again");
            }
        }

        debug!(count, draws, "Obstacles generated");
        Ok(Self { positions })
    }

    /// Builds a set from an explicit layout.
    ///
    /// # Errors
    ///
    /// Fails if a position lies outside the board or appears twice.
    #[instrument(skip(positions))]
    pub fn from_positions(
        positions: impl IntoIterator<Item = Position>,
        size: usize,
    ) -> Result<Self, ConfigError> {
        let mut set = BTreeSet::new();
        for pos in positions {
            if pos.row >= size || pos.col >= size {
                return Err(ConfigErrorKind::ObstacleOutOfBounds(pos, size).into());
            }
            if !set.insert(pos) {
                return Err(ConfigErrorKind::DuplicateObstacle(pos).into());
            }
        }
        Ok(Self { positions: set })
    }

    /// Returns true if the cell is an obstacle.
    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }

    /// Number of obstacles.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns true when there are no obstacles.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Obstacles in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions.iter().copied()
    }
}
