//! Engine tests - moves, merges, spawning and game over on preset boards

use tui_2048::core::{Game, GameError, ScriptedSampler, TileSampler};
use tui_2048::types::Direction;

fn preset(size: usize, tiles: Vec<u64>) -> Game<ScriptedSampler> {
    Game::from_tiles(size, tiles, ScriptedSampler::new()).unwrap()
}

/// The board equals `expected` except for exactly one freshly spawned tile,
/// which must sit on a cell `expected` leaves empty.
fn assert_one_spawn(board: &[u64], expected: &[u64]) {
    let diffs: Vec<usize> = (0..board.len()).filter(|&i| board[i] != expected[i]).collect();
    assert_eq!(diffs.len(), 1, "board {:?} vs expected {:?}", board, expected);
    let i = diffs[0];
    assert_eq!(expected[i], 0);
    assert!(board[i] == 2 || board[i] == 4);
}

/// The tracked empty set equals the zero cells of the board.
fn assert_empty_consistent<S: TileSampler>(game: &Game<S>) {
    let zeros: Vec<usize> = (0..game.board().len())
        .filter(|&i| game.board()[i] == 0)
        .collect();
    assert_eq!(game.empty_cells().to_sorted_vec(), zeros);
}

#[test]
fn test_new_game_defaults() {
    for size in 2..=8 {
        let game = Game::seeded(size, 99).unwrap();
        assert_eq!(game.size(), size);
        assert_eq!(game.board().len(), size * size);
        assert_eq!(game.board().iter().filter(|&&v| v != 0).count(), 2);
        assert_eq!(game.empty_cells().len(), size * size - 2);
        assert_eq!(game.score(), 0);
        assert!(!game.is_over());
        assert_empty_consistent(&game);
    }
}

#[test]
fn test_size_below_two_is_invalid() {
    assert!(matches!(Game::new(1), Err(GameError::InvalidArgument(_))));
    assert!(matches!(Game::new(0), Err(GameError::InvalidArgument(_))));
}

#[test]
fn test_move_left_example() {
    let mut game = preset(
        4,
        vec![
            2, 2, 4, 4, //
            0, 2, 0, 4, //
            2, 0, 0, 0, //
            2, 0, 2, 4,
        ],
    );
    assert!(game.move_left().unwrap());
    assert_one_spawn(
        game.board(),
        &[
            4, 8, 0, 0, //
            2, 4, 0, 0, //
            2, 0, 0, 0, //
            4, 4, 0, 0,
        ],
    );
    assert_eq!(game.score(), 16);
    assert_empty_consistent(&game);
}

#[test]
fn test_move_up_example() {
    let mut game = preset(
        4,
        vec![
            4, 8, 0, 0, //
            2, 4, 0, 0, //
            2, 0, 0, 0, //
            4, 4, 0, 0,
        ],
    );
    assert!(game.move_up().unwrap());
    assert_one_spawn(
        game.board(),
        &[
            4, 8, 0, 0, //
            4, 8, 0, 0, //
            4, 0, 0, 0, //
            0, 0, 0, 0,
        ],
    );
    assert_eq!(game.score(), 12);
    assert_empty_consistent(&game);
}

#[test]
fn test_move_down_example() {
    let mut game = preset(
        4,
        vec![
            4, 8, 0, 0, //
            4, 8, 0, 0, //
            4, 0, 0, 0, //
            0, 0, 0, 0,
        ],
    );
    assert!(game.move_down().unwrap());
    assert_one_spawn(
        game.board(),
        &[
            0, 0, 0, 0, //
            0, 0, 0, 0, //
            4, 0, 0, 0, //
            8, 16, 0, 0,
        ],
    );
    assert_eq!(game.score(), 24);
    assert_empty_consistent(&game);
}

#[test]
fn test_move_right_slides_without_score() {
    let mut game = preset(
        4,
        vec![
            0, 0, 0, 0, //
            0, 0, 0, 0, //
            4, 0, 0, 0, //
            8, 16, 0, 0,
        ],
    );
    assert!(game.move_right().unwrap());
    assert_one_spawn(
        game.board(),
        &[
            0, 0, 0, 0, //
            0, 0, 0, 0, //
            0, 0, 0, 4, //
            0, 0, 8, 16,
        ],
    );
    assert_eq!(game.score(), 0);
    assert_empty_consistent(&game);
}

#[test]
fn test_full_board_without_match_ends_game() {
    let mut game = preset(
        4,
        vec![
            512, 256, 128, 64, //
            32, 16, 8, 4, //
            4, 8, 16, 32, //
            0, 128, 256, 512,
        ],
    );
    assert_eq!(game.empty_cells().to_sorted_vec(), vec![12]);

    assert!(game.move_down().unwrap());
    assert!(game.is_over());
    assert!(game.empty_cells().is_empty());
    // Column 0 slid down one; the spawn landed in the vacated top-left cell.
    assert_eq!(&game.board()[1..], &[256, 128, 64, 512, 16, 8, 4, 32, 8, 16, 32, 4, 128, 256, 512]);
    assert!(matches!(
        game.move_left(),
        Err(GameError::InvalidOperation(_))
    ));
}

#[test]
fn test_noop_moves_keep_state() {
    let mut game = preset(
        3,
        vec![
            2, 4, 2, //
            0, 0, 0, //
            0, 0, 0,
        ],
    );
    let before = game.board().to_vec();
    let empty_before = game.empty_cells().to_sorted_vec();

    for dir in [Direction::Left, Direction::Right, Direction::Up] {
        assert!(!game.move_in(dir).unwrap(), "{dir:?} should be a no-op");
        assert_eq!(game.board(), before.as_slice());
        assert_eq!(game.empty_cells().to_sorted_vec(), empty_before);
        assert_eq!(game.score(), 0);
    }
}

#[test]
fn test_merged_tile_merges_once_per_move() {
    let mut game = preset(
        4,
        vec![
            2, 2, 4, 8, //
            0, 0, 0, 0, //
            0, 0, 0, 0, //
            0, 0, 0, 0,
        ],
    );
    game.move_left().unwrap();
    assert_eq!(&game.board()[..4], &[4, 4, 8, 0]);
    assert_eq!(game.score(), 4);
}

#[test]
fn test_reset_after_game_over() {
    // The only free cell receives a 4, which matches neither neighbour.
    let sampler = ScriptedSampler::new().with_units([0.95]);
    let mut game = Game::from_tiles(2, vec![0, 2, 4, 8], sampler).unwrap();
    game.move_left().unwrap();
    assert!(game.is_over());

    game.reset();
    assert!(!game.is_over());
    assert_eq!(game.score(), 0);
    assert_eq!(game.board().iter().filter(|&&v| v != 0).count(), 2);
    assert_empty_consistent(&game);
}

#[test]
fn test_seeded_games_are_reproducible() {
    let mut a = Game::seeded(4, 2048).unwrap();
    let mut b = Game::seeded(4, 2048).unwrap();
    for dir in Direction::ALL.iter().cycle().take(40) {
        if a.is_over() {
            break;
        }
        assert_eq!(a.move_in(*dir), b.move_in(*dir));
        assert_eq!(a.board(), b.board());
        assert_eq!(a.score(), b.score());
    }
}

#[test]
fn test_largest_tiles_merge_without_wrapping() {
    use tui_2048::types::MAX_TILE;

    let mut game = preset(2, vec![MAX_TILE, MAX_TILE, 0, 0]);
    assert!(game.move_left().unwrap());
    assert_eq!(game.max_tile(), 1 << 63);
    assert_eq!(game.score(), 1 << 63);
    assert_eq!(game.board().iter().filter(|&&v| v != 0).count(), 2);
    assert_empty_consistent(&game);

    let too_big = Game::from_tiles(2, vec![1 << 63, 0, 0, 0], ScriptedSampler::new());
    assert!(matches!(too_big, Err(GameError::InvalidArgument(_))));
}
