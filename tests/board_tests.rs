//! Board tests - move engine, spawner and playability

use tui_2048::core::{Board, CoreError, ScriptedRng, SimpleRng};
use tui_2048::types::{CellLocation, Direction, Grid, BASE_TILE_POWER, BOARD_SIZE};

/// Cells that differ between two grids
fn diff(a: &Grid, b: &Grid) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    for y in 0..4 {
        for x in 0..4 {
            if a[y][x] != b[y][x] {
                out.push((x, y));
            }
        }
    }
    out
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), 4);
    assert_eq!(board.height(), 4);
    assert_eq!(board.empty_cells().len(), BOARD_SIZE);
    assert!(board.values().is_empty());
    assert!(board.playable());
    assert_eq!(board.goal(), 11);
}

#[test]
fn test_new_game_spawns_two_tiles() {
    let mut rng = SimpleRng::new(2024);
    let board = Board::new_game(&mut rng);
    assert_eq!(board.values().as_slice(), &[BASE_TILE_POWER, BASE_TILE_POWER]);
    assert_eq!(board.empty_cells().len(), BOARD_SIZE - 2);
}

#[test]
fn test_values_are_row_major_without_zeros() {
    let board = Board::from_cells([[0, 3, 0, 0], [1, 0, 2, 0], [2, 1, 1, 0], [0, 6, 5, 0]]);
    assert_eq!(board.values().as_slice(), &[3, 1, 2, 2, 1, 1, 6, 5]);
    assert_eq!(board.highest_power(), 6);
}

#[test]
fn test_move_left_resolves_rows() {
    let mut board = Board::from_cells([[1, 1, 0, 0], [0, 2, 0, 2], [3, 0, 3, 3], [0, 0, 0, 0]]);
    board.shift(Direction::Left);
    assert_eq!(
        board.cells(),
        &[[2, 0, 0, 0], [3, 0, 0, 0], [4, 3, 0, 0], [0, 0, 0, 0]]
    );
}

#[test]
fn test_move_down_resolves_columns() {
    let mut board = Board::from_cells([[1, 0, 0, 2], [1, 0, 0, 0], [0, 0, 0, 2], [0, 0, 0, 2]]);
    board.shift(Direction::Down);
    assert_eq!(
        board.cells(),
        &[[0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 2], [2, 0, 0, 3]]
    );
}

#[test]
fn test_move_up_and_right() {
    let mut board = Board::from_cells([[0, 0, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0], [0, 0, 0, 0]]);
    board.shift(Direction::Up);
    assert_eq!(board.get(1, 0), Some(2));
    board.shift(Direction::Right);
    assert_eq!(board.get(3, 0), Some(2));
    assert_eq!(board.values().as_slice(), &[2]);
}

#[test]
fn test_move_triggers_exactly_one_spawn() {
    let start = [[0, 0, 0, 0], [1, 0, 0, 0], [0, 0, 0, 0], [0, 0, 2, 0]];
    let mut board = Board::from_cells(start);
    let mut rng = SimpleRng::new(11);

    let outcome = board.apply_move(Direction::Right, &mut rng);
    assert!(outcome.changed);
    let spawned = outcome.spawned.expect("a changed, non-full board spawns");

    // Without the spawn the board would be the plain shift result.
    let mut shifted = Board::from_cells(start);
    shifted.shift(Direction::Right);
    assert_eq!(diff(shifted.cells(), board.cells()), vec![(spawned.x, spawned.y)]);
    assert_eq!(shifted.get(spawned.x, spawned.y), Some(0));
    assert_eq!(board.get(spawned.x, spawned.y), Some(BASE_TILE_POWER));
}

#[test]
fn test_noop_move_spawns_nothing() {
    let start = [[1, 2, 0, 0], [3, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]];
    let mut board = Board::from_cells(start);
    let mut rng = SimpleRng::new(5);

    let outcome = board.apply_move(Direction::Left, &mut rng);
    assert!(!outcome.changed);
    assert_eq!(outcome.spawned, None);
    assert_eq!(board.cells(), &start);
}

#[test]
fn test_merge_on_full_board_frees_the_spawn_cell() {
    // A changing move always leaves a hole; here the spawn fills the only one.
    let start = [[1, 1, 2, 3], [2, 3, 4, 5], [3, 4, 5, 6], [4, 5, 6, 7]];
    let mut board = Board::from_cells(start);
    let mut rng = SimpleRng::new(3);

    let outcome = board.apply_move(Direction::Left, &mut rng);
    assert!(outcome.changed);
    assert_eq!(outcome.spawned, Some(CellLocation::new(3, 0)));
    assert!(board.is_full());
    assert_eq!(board.row(0), Some(&[2, 2, 3, 1]));
}

#[test]
fn test_full_board_noop_spawns_nothing() {
    let start = [[1, 2, 1, 2], [2, 1, 2, 1], [1, 2, 1, 2], [2, 1, 2, 1]];
    let mut board = Board::from_cells(start);
    let mut rng = SimpleRng::new(3);
    for dir in Direction::ALL {
        let outcome = board.apply_move(dir, &mut rng);
        assert!(!outcome.changed);
        assert_eq!(outcome.spawned, None);
    }
    assert_eq!(board.cells(), &start);
}

#[test]
fn test_add_tile_on_full_board_is_an_error() {
    let start = [[1, 2, 1, 2], [2, 1, 2, 1], [1, 2, 1, 2], [2, 1, 2, 1]];
    let mut board = Board::from_cells(start);
    let mut rng = SimpleRng::new(1);
    assert_eq!(board.add_tile(&mut rng), Err(CoreError::BoardFull));
    assert_eq!(board.cells(), &start);
}

#[test]
fn test_add_tile_picks_from_empty_cells_only() {
    let mut board = Board::from_cells([[1, 0, 1, 1], [1, 1, 1, 1], [1, 1, 1, 0], [1, 1, 1, 1]]);
    let mut rng = ScriptedRng::new(vec![1]);
    assert_eq!(board.add_tile(&mut rng), Ok(CellLocation::new(3, 2)));
    assert_eq!(board.add_tile(&mut rng), Ok(CellLocation::new(1, 0)));
    assert!(board.is_full());
}

#[test]
fn test_spawn_distribution_is_uniform_enough() {
    let mut rng = SimpleRng::new(31337);
    let mut hits = [0u32; BOARD_SIZE];
    for _ in 0..1600 {
        let mut board = Board::new();
        let loc = board.add_tile(&mut rng).unwrap();
        hits[loc.y * 4 + loc.x] += 1;
    }
    // Expected 100 per cell.
    assert!(hits.iter().all(|&h| (50..=150).contains(&h)), "{:?}", hits);
}

#[test]
fn test_playable_with_empty_cell() {
    let board = Board::from_cells([[1, 2, 1, 2], [2, 1, 2, 1], [1, 2, 1, 2], [2, 1, 2, 0]]);
    assert!(board.playable());
}

#[test]
fn test_not_playable_when_full_and_no_pairs() {
    let board = Board::from_cells([[1, 2, 1, 2], [2, 1, 2, 1], [1, 2, 1, 2], [2, 1, 2, 1]]);
    assert!(board.is_full());
    assert!(!board.playable());
}

#[test]
fn test_playable_with_row_pair() {
    let board = Board::from_cells([[1, 2, 1, 2], [2, 1, 2, 1], [1, 2, 1, 2], [2, 1, 3, 3]]);
    assert!(board.playable());
}

#[test]
fn test_playable_with_column_pair() {
    let board = Board::from_cells([[1, 2, 1, 2], [2, 1, 2, 1], [1, 2, 1, 4], [2, 1, 2, 4]]);
    assert!(board.playable());
}
