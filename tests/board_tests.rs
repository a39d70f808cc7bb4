//! Board tests - bounds, occupancy, and line clearing

use blockfall::core::Board;
use blockfall::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(None));
            assert!(!board.is_occupied(x, y));
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(5, 10, Some(PieceKind::T)));
    assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));

    assert!(board.set(5, 10, None));
    assert_eq!(board.get(5, 10), Some(None));

    assert!(!board.set(-1, 0, Some(PieceKind::T)));
    assert!(!board.set(0, BOARD_HEIGHT as i8, Some(PieceKind::T)));
}

#[test]
fn test_collision_iff_out_of_bounds_or_overlap() {
    let mut board = Board::new();
    board.set(4, 10, Some(PieceKind::S));

    let single = [(0, 0)];

    // In bounds, empty: no collision.
    assert!(!board.collides(&single, 0, 0, 0, 0));
    assert!(!board.collides(&single, 9, 19, 0, 0));

    // Out of bounds left/right/bottom: collision.
    assert!(board.collides(&single, -1, 0, 0, 0));
    assert!(board.collides(&single, 10, 0, 0, 0));
    assert!(board.collides(&single, 0, 20, 0, 0));

    // Overlap with a filled cell: collision.
    assert!(board.collides(&single, 4, 10, 0, 0));

    // Offsets are applied before the check.
    assert!(board.collides(&single, 4, 9, 0, 1));
    assert!(!board.collides(&single, 4, 9, 1, 0));
}

#[test]
fn test_collision_skips_occupancy_above_board() {
    let mut board = Board::new();
    board.set(3, 0, Some(PieceKind::Z));

    let single = [(0, 0)];

    // Above the visible board only horizontal bounds apply.
    assert!(!board.collides(&single, 3, -2, 0, 0));
    assert!(board.collides(&single, -1, -2, 0, 0));
    assert!(board.collides(&single, 10, -2, 0, 0));
}

#[test]
fn test_place_then_rows_fill() {
    let mut board = Board::new();

    // Tile the bottom row with five 2x1 dominoes.
    let domino = [(0, 0), (1, 0)];
    for i in 0..5 {
        assert!(board.place(&domino, i * 2, 19, PieceKind::O));
    }

    assert!(board.is_row_full(19));
    assert!(!board.is_row_full(18));
}

#[test]
fn test_clear_one_full_row() {
    let mut board = Board::new();

    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, 19, Some(PieceKind::I));
    }
    board.set(4, 18, Some(PieceKind::T));

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.len(), 1);
    assert_eq!(cleared[0], 19);

    // One empty row entered at the top; the stray cell fell one row.
    assert!(!board.is_row_full(19));
    assert_eq!(board.get(4, 19), Some(Some(PieceKind::T)));
    assert!((0..BOARD_WIDTH as i8).all(|x| board.get(x, 0) == Some(None)));
}

#[test]
fn test_clear_adjacent_full_rows() {
    let mut board = Board::new();

    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, 18, Some(PieceKind::J));
        board.set(x, 19, Some(PieceKind::L));
    }
    board.set(7, 17, Some(PieceKind::I));

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.len(), 2);

    assert_eq!(board.get(7, 19), Some(Some(PieceKind::I)));
    assert_eq!(board.get(7, 17), Some(None));
}

#[test]
fn test_clear_separated_full_rows_keeps_order() {
    let mut board = Board::new();

    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, 10, Some(PieceKind::I));
        board.set(x, 15, Some(PieceKind::I));
    }
    board.set(0, 9, Some(PieceKind::L));
    board.set(0, 14, Some(PieceKind::S));

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.len(), 2);

    // L was above both cleared rows, S above one.
    assert_eq!(board.get(0, 11), Some(Some(PieceKind::L)));
    assert_eq!(board.get(0, 15), Some(Some(PieceKind::S)));
}

#[test]
fn test_partial_rows_do_not_clear() {
    let mut board = Board::new();

    // Fill row 19 except one column.
    for x in 0..(BOARD_WIDTH as i8 - 1) {
        board.set(x, 19, Some(PieceKind::I));
    }

    let cleared = board.clear_full_rows();
    assert!(cleared.is_empty());
    assert_eq!(board.get(0, 19), Some(Some(PieceKind::I)));
}
