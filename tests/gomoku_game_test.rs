//! Tests for the gomoku game state engine.

use strictly_gomoku::{
    BoardSize, Game, GameConfig, GameStatus, MoveError, ObstacleConfig, ObstacleSet, Player,
    Position,
};

const DRAW_SEQUENCE: [(usize, usize); 9] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (1, 1),
    (1, 0),
    (1, 2),
    (2, 1),
    (2, 0),
    (2, 2),
];

fn play(game: &mut Game, moves: &[(usize, usize)]) {
    for &(row, col) in moves {
        assert!(game.make_move(row, col), "move ({row}, {col}) should be accepted");
    }
}

#[test]
fn test_initial_state() {
    for size in [BoardSize::Three, BoardSize::Ten, BoardSize::Fifteen] {
        let game = Game::new(GameConfig::new(size)).unwrap();
        let n = size.dimension();
        assert_eq!(game.size(), n);
        assert_eq!(game.current_player(), Player::X);
        assert_eq!(game.status(), &GameStatus::InProgress);
        assert!(game.winning_cells().is_empty());
        assert!(game.winner().is_none());
        for row in 0..n {
            for col in 0..n {
                assert_eq!(game.cell_value(row, col), None);
            }
        }
    }
}

#[test]
fn test_cell_value_out_of_bounds() {
    let game = Game::new(GameConfig::new(BoardSize::Ten)).unwrap();
    assert_eq!(game.cell_value(10, 0), None);
    assert_eq!(game.cell_value(0, 10), None);
    assert_eq!(game.cell_value(usize::MAX, usize::MAX), None);
}

#[test]
fn test_turns_alternate() {
    let mut game = Game::new(GameConfig::default()).unwrap();
    assert!(game.make_move(7, 7));
    assert_eq!(game.current_player(), Player::O);
    assert!(game.make_move(7, 8));
    assert_eq!(game.current_player(), Player::X);
    assert_eq!(game.cell_value(7, 7), Some(Player::X));
    assert_eq!(game.cell_value(7, 8), Some(Player::O));
    assert_eq!(game.move_count(), 2);
}

#[test]
fn test_occupied_cell_rejected_without_side_effects() {
    let mut game = Game::new(GameConfig::default()).unwrap();
    assert!(game.make_move(3, 3));
    let before = game.snapshot();

    assert!(!game.make_move(3, 3));
    assert_eq!(game.snapshot(), before);
    assert_eq!(game.current_player(), Player::O);
    assert_eq!(
        game.try_move(3, 3),
        Err(MoveError::SquareOccupied(Position::new(3, 3)))
    );
}

#[test]
fn test_out_of_bounds_rejected() {
    let mut game = Game::new(GameConfig::default()).unwrap();
    assert!(!game.make_move(15, 0));
    assert!(!game.make_move(0, 15));
    assert_eq!(game.move_count(), 0);
    assert_eq!(game.current_player(), Player::X);
}

#[test]
fn test_horizontal_win_reports_first_five_cells() {
    let mut game = Game::new(GameConfig::new(BoardSize::Fifteen)).unwrap();
    play(
        &mut game,
        &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2), (0, 3), (1, 3)],
    );
    assert!(!game.is_game_over());

    assert!(game.make_move(0, 4));
    assert_eq!(game.winner(), Some(Player::X));
    assert_eq!(
        game.winning_cells(),
        &[
            Position::new(0, 0),
            Position::new(0, 1),
            Position::new(0, 2),
            Position::new(0, 3),
            Position::new(0, 4),
        ]
    );
}

#[test]
fn test_win_completed_in_the_middle() {
    let mut game = Game::new(GameConfig::new(BoardSize::Ten)).unwrap();
    // X builds (2,2) (3,3) _ (5,5) (6,6) and fills the gap last.
    play(
        &mut game,
        &[(2, 2), (0, 9), (3, 3), (1, 9), (5, 5), (2, 9), (6, 6), (9, 0)],
    );
    assert!(game.make_move(4, 4));
    assert_eq!(
        game.winning_cells(),
        &[
            Position::new(2, 2),
            Position::new(3, 3),
            Position::new(4, 4),
            Position::new(5, 5),
            Position::new(6, 6),
        ]
    );
}

#[test]
fn test_run_length_follows_board_size() {
    let mut small = Game::new(GameConfig::new(BoardSize::Three)).unwrap();
    play(&mut small, &[(0, 0), (1, 0), (1, 1), (2, 0), (2, 2)]);
    assert_eq!(small.winner(), Some(Player::X));
    assert_eq!(small.winning_cells().len(), 3);

    let mut large = Game::new(GameConfig::new(BoardSize::Ten)).unwrap();
    play(&mut large, &[(0, 0), (9, 0), (0, 1), (9, 1), (0, 2)]);
    assert!(!large.is_game_over());
}

#[test]
fn test_custom_run_length() {
    let config = GameConfig::new(BoardSize::Ten).with_run_length(4);
    let mut game = Game::new(config).unwrap();
    play(
        &mut game,
        &[(5, 0), (9, 9), (5, 1), (9, 8), (5, 2), (9, 7), (5, 3)],
    );
    assert_eq!(game.winner(), Some(Player::X));
    assert_eq!(game.winning_cells().len(), 4);
}

#[test]
fn test_win_on_last_cell_beats_draw() {
    let mut game = Game::new(GameConfig::new(BoardSize::Three)).unwrap();
    play(
        &mut game,
        &[(1, 2), (1, 0), (2, 0), (1, 1), (0, 0), (2, 1), (0, 2), (2, 2)],
    );
    assert!(!game.is_game_over());

    assert!(game.make_move(0, 1));
    assert_eq!(game.move_count(), 9);
    assert!(!game.is_draw());
    assert_eq!(game.winner(), Some(Player::X));
    assert_eq!(
        game.winning_cells(),
        &[Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)]
    );
}

#[test]
fn test_full_board_without_run_is_draw() {
    let mut game = Game::new(GameConfig::new(BoardSize::Three)).unwrap();
    play(&mut game, &DRAW_SEQUENCE);
    assert!(game.is_draw());
    assert!(game.winner().is_none());
    assert!(game.winning_cells().is_empty());
}

#[test]
fn test_no_moves_after_game_over() {
    let mut game = Game::new(GameConfig::new(BoardSize::Three)).unwrap();
    play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    let before = game.snapshot();

    assert!(!game.make_move(2, 2));
    assert_eq!(game.try_move(2, 2), Err(MoveError::GameOver));
    assert_eq!(game.cell_value(2, 2), None);
    assert_eq!(game.snapshot(), before);
}

#[test]
fn test_reset_clears_everything() {
    let mut game = Game::new(GameConfig::new(BoardSize::Three)).unwrap();
    play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    assert!(game.is_game_over());

    game.reset(GameConfig::new(BoardSize::Ten)).unwrap();
    assert_eq!(game.size(), 10);
    assert_eq!(game.run_length(), 5);
    assert_eq!(game.move_count(), 0);
    assert!(game.history().is_empty());
    assert_eq!(game.current_player(), Player::X);
    assert_eq!(game.status(), &GameStatus::InProgress);
    assert!(game.winning_cells().is_empty());
    assert!(game.obstacles().is_empty());
    assert!(game.make_move(0, 0));
}

#[test]
fn test_reset_after_draw() {
    let mut game = Game::new(GameConfig::new(BoardSize::Three)).unwrap();
    play(&mut game, &DRAW_SEQUENCE);
    assert!(game.is_draw());

    game.reset(GameConfig::new(BoardSize::Three)).unwrap();
    assert_fresh(&game);

    play(&mut game, &DRAW_SEQUENCE);
    assert!(game.is_draw());
    game.restart().unwrap();
    assert_fresh(&game);
}

fn assert_fresh(game: &Game) {
    assert!(!game.is_draw());
    assert!(!game.is_game_over());
    assert_eq!(game.status(), &GameStatus::InProgress);
    assert!(game.history().is_empty());
    assert_eq!(game.current_player(), Player::X);
    for row in 0..game.size() {
        for col in 0..game.size() {
            assert_eq!(game.cell_value(row, col), None);
        }
    }
}

#[test]
fn test_is_cell_occupied() {
    let layout = ObstacleSet::from_positions([Position::new(4, 4)], 10).unwrap();
    let mut game = Game::with_obstacles(GameConfig::new(BoardSize::Ten), layout).unwrap();
    assert!(!game.is_cell_occupied(2, 3));

    assert!(game.make_move(2, 3));
    assert!(game.is_cell_occupied(2, 3));

    assert!(game.is_obstacle(4, 4));
    assert!(!game.is_cell_occupied(4, 4));
    assert!(!game.is_cell_occupied(10, 0));
    assert!(!game.is_cell_occupied(usize::MAX, 0));
}

#[test]
fn test_invalid_reset_is_rejected_atomically() {
    let mut game = Game::new(GameConfig::new(BoardSize::Ten)).unwrap();
    assert!(game.make_move(4, 4));
    let before = game.snapshot();

    assert!(game.reset(GameConfig::new(BoardSize::Three).with_run_length(5)).is_err());
    let too_many = GameConfig::new(BoardSize::Three).with_obstacles(ObstacleConfig::on(10));
    assert!(game.reset(too_many).is_err());
    assert_eq!(game.snapshot(), before);
}

#[test]
fn test_restart_keeps_configuration() {
    let config = GameConfig::new(BoardSize::Ten).with_run_length(4);
    let mut game = Game::new(config).unwrap();
    play(&mut game, &[(0, 0), (1, 1)]);

    game.restart().unwrap();
    assert_eq!(game.config(), &config);
    assert_eq!(game.move_count(), 0);
}

#[test]
fn test_history_records_accepted_moves_only() {
    let mut game = Game::new(GameConfig::default()).unwrap();
    play(&mut game, &[(0, 0), (1, 1)]);
    assert!(!game.make_move(0, 0));

    let history = game.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].player(), Player::X);
    assert_eq!(history[0].position(), Position::new(0, 0));
    assert_eq!(history[1].player(), Player::O);
}
