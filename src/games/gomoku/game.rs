//! Game logic for gomoku: the game state engine.

use super::action::{Move, MoveError, MoveOutcome};
use super::config::{ConfigError, GameConfig};
use super::contracts::LegalMove;
use super::obstacles::ObstacleSet;
use super::phases::GameStatus;
use super::position::Position;
use super::rules::{Evaluation, evaluate};
use super::snapshot::GameSnapshot;
use super::types::{Board, Player};
use rand::Rng;
use tracing::{debug, info, instrument, warn};

/// Gomoku game engine.
///
/// Owns the board, the obstacles, the turn, the move record and the
/// terminal state. Commands (`make_move`, `reset`) mutate; everything else
/// is a read-only query for the presentation layer.
#[derive(Debug, Clone)]
pub struct Game {
    pub(super) config: GameConfig,
    pub(super) board: Board,
    pub(super) obstacles: ObstacleSet,
    pub(super) current_player: Player,
    pub(super) history: Vec<Move>,
    pub(super) status: GameStatus,
}

impl Game {
    /// Creates a new game, drawing obstacles from the thread-local RNG if
    /// the configuration enables them.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration is invalid.
    #[instrument]
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, &mut rand::thread_rng())
    }

    /// Creates a new game, drawing obstacles from `rng`.
    #[instrument(skip(rng))]
    pub fn with_rng<R: Rng>(config: GameConfig, rng: &mut R) -> Result<Self, ConfigError> {
        let obstacles = Self::draw_obstacles(&config, rng)?;
        Ok(Self::fresh(config, obstacles))
    }

    /// Creates a new game with an explicit obstacle layout.
    ///
    /// The layout is used for this game only; the configuration is still
    /// validated as given, since `restart` draws obstacles from it.
    #[instrument(skip(obstacles), fields(obstacles = obstacles.len()))]
    pub fn with_obstacles(config: GameConfig, obstacles: ObstacleSet) -> Result<Self, ConfigError> {
        let obstacles = Self::check_layout(&config, obstacles)?;
        Ok(Self::fresh(config, obstacles))
    }

    fn fresh(config: GameConfig, obstacles: ObstacleSet) -> Self {
        Self {
            board: Board::new(config.dimension()),
            config,
            obstacles,
            current_player: Player::X,
            history: Vec::new(),
            status: GameStatus::InProgress,
        }
    }

    fn draw_obstacles<R: Rng>(config: &GameConfig, rng: &mut R) -> Result<ObstacleSet, ConfigError> {
        config.validate()?;
        let obstacles = config.obstacles();
        if *obstacles.enabled() {
            ObstacleSet::generate_with_rng(*obstacles.count(), config.dimension(), rng)
        } else {
            Ok(ObstacleSet::new())
        }
    }

    fn check_layout(config: &GameConfig, obstacles: ObstacleSet) -> Result<ObstacleSet, ConfigError> {
        config.validate()?;
        ObstacleSet::from_positions(obstacles.iter(), config.dimension())
    }

    /// Starts over with a new configuration.
    ///
    /// Either the whole reset happens or, on error, nothing changes.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration is invalid.
    #[instrument(skip(self))]
    pub fn reset(&mut self, config: GameConfig) -> Result<(), ConfigError> {
        self.reset_with_rng(config, &mut rand::thread_rng())
    }

    /// Starts over with a new configuration, drawing obstacles from `rng`.
    #[instrument(skip(self, rng))]
    pub fn reset_with_rng<R: Rng>(&mut self, config: GameConfig, rng: &mut R) -> Result<(), ConfigError> {
        let obstacles = Self::draw_obstacles(&config, rng)?;
        *self = Self::fresh(config, obstacles);
        info!(size = %config.size(), obstacles = self.obstacles.len(), "Game reset");
        Ok(())
    }

    /// Starts over with a new configuration and an explicit obstacle layout.
    #[instrument(skip(self, obstacles), fields(obstacles = obstacles.len()))]
    pub fn reset_with_obstacles(
        &mut self,
        config: GameConfig,
        obstacles: ObstacleSet,
    ) -> Result<(), ConfigError> {
        let obstacles = Self::check_layout(&config, obstacles)?;
        *self = Self::fresh(config, obstacles);
        info!(size = %config.size(), obstacles = self.obstacles.len(), "Game reset");
        Ok(())
    }

    /// Starts a new game with the current configuration and fresh obstacles.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> Result<(), ConfigError> {
        self.reset(self.config)
    }

    /// Places the current player's mark at (`row`, `col`).
    ///
    /// Returns `false` and changes nothing if the game is over or the cell
    /// is off the board, an obstacle, or already marked. Returns `true` for
    /// every accepted move, whatever its outcome.
    pub fn make_move(&mut self, row: usize, col: usize) -> bool {
        self.try_move(row, col).is_ok()
    }

    /// Like [`Game::make_move`] but reports why a move was rejected and
    /// what an accepted move led to.
    ///
    /// # Errors
    ///
    /// Returns the [`MoveError`] of the first failing precondition. State
    /// is untouched on error.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn try_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome, MoveError> {
        let pos = Position::new(row, col);
        if let Err(err) = LegalMove::check(pos, self) {
            debug!(%err, "Move rejected");
            return Err(err);
        }

        let player = self.current_player;
        if self.board.place(pos, player).is_err() {
            return Err(MoveError::SquareOccupied(pos));
        }
        self.history.push(Move::new(player, pos));

        let verdict = match evaluate(&self.board, pos, self.run_length()) {
            Ok(verdict) => verdict,
            Err(err) => {
                warn!(%err, "Evaluation failed, rolling back move");
                self.board.clear(pos);
                self.history.pop();
                return Err(MoveError::Evaluation(err));
            }
        };

        let outcome = match verdict {
            Evaluation::Continue => {
                self.current_player = player.opponent();
                debug!(%pos, next = %self.current_player, "Move accepted");
                MoveOutcome::Continue {
                    next: self.current_player,
                }
            }
            Evaluation::Win {
                winner,
                winning_cells,
            } => {
                info!(%winner, moves = self.history.len(), "Game won");
                self.status = GameStatus::Won {
                    winner,
                    winning_cells: winning_cells.clone(),
                };
                MoveOutcome::Won {
                    winner,
                    winning_cells,
                }
            }
            Evaluation::Draw => {
                info!(moves = self.history.len(), "Game drawn");
                self.status = GameStatus::Drawn;
                MoveOutcome::Drawn
            }
        };

        #[cfg(debug_assertions)]
        self.assert_invariants();

        Ok(outcome)
    }

    /// Logs every violated invariant and fails in debug builds.
    #[cfg(debug_assertions)]
    fn assert_invariants(&self) {
        use super::invariants::{GomokuInvariants, InvariantSet};

        let result = GomokuInvariants::check_all(self);
        if let Err(violations) = &result {
            for violation in violations {
                warn!(description = %violation.description, "Invariant violated");
            }
        }
        debug_assert!(result.is_ok(), "Game invariants violated");
    }

    /// Returns the mark at (`row`, `col`); `None` if empty or off the board.
    pub fn cell_value(&self, row: usize, col: usize) -> Option<Player> {
        self.board.player_at(Position::new(row, col))
    }

    /// Returns true if the cell holds a mark.
    pub fn is_cell_occupied(&self, row: usize, col: usize) -> bool {
        self.cell_value(row, col).is_some()
    }

    /// Returns true if the cell is an obstacle.
    pub fn is_obstacle(&self, row: usize, col: usize) -> bool {
        self.obstacles.contains(Position::new(row, col))
    }

    /// Player whose mark the next accepted move places.
    ///
    /// After a win this is still the winner.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the obstacles for this game.
    pub fn obstacles(&self) -> &ObstacleSet {
        &self.obstacles
    }

    /// Returns the move record, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Number of marks on the board.
    pub fn move_count(&self) -> usize {
        self.board.occupied_count()
    }

    /// Returns the configuration this game was started with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Board dimension.
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Marks in a row needed to win.
    pub fn run_length(&self) -> usize {
        self.config.run_length()
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns true once the game is won or drawn.
    pub fn is_game_over(&self) -> bool {
        self.status.is_game_over()
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        self.status.winner()
    }

    /// Returns true if the game ended in a draw.
    pub fn is_draw(&self) -> bool {
        self.status.is_draw()
    }

    /// Cells of the winning run, empty unless the game was won.
    pub fn winning_cells(&self) -> &[Position] {
        self.status.winning_cells()
    }

    /// Full copy of the game state for display or serialization.
    #[instrument(skip(self))]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(self)
    }

    /// Formats the board with obstacles shown as `#`.
    pub fn render(&self) -> String {
        self.board.display(|pos| self.obstacles.contains(pos))
    }
}
