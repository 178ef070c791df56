//! Adapter semantics of the reference board.

use crate::board::{Board, BoardAdapter, Cell, Color, Kind};

#[test]
fn test_place_tracks_cell() {
    let mut board = Board::empty();
    let rook = board.add_piece(Color::White, Kind::Rook);
    assert_eq!(board.piece(rook).and_then(|p| p.cell()), None);

    board.set_occupant(Cell(2, 3), Some(rook));
    assert_eq!(board.occupant(Cell(2, 3)), Some(rook));
    assert_eq!(board.piece(rook).and_then(|p| p.cell()), Some(Cell(2, 3)));
}

#[test]
fn test_moving_vacates_previous_cell() {
    let mut board = Board::empty();
    let knight = board.place(Color::Black, Kind::Knight, Cell(7, 1));

    board.set_occupant(Cell(5, 2), Some(knight));
    assert_eq!(board.occupant(Cell(7, 1)), None);
    assert_eq!(board.occupant(Cell(5, 2)), Some(knight));
    assert_eq!(board.pieces_in_play(), vec![knight]);
}

#[test]
fn test_displaced_piece_leaves_play() {
    let mut board = Board::empty();
    let rook = board.place(Color::White, Kind::Rook, Cell(0, 0));
    let pawn = board.place(Color::Black, Kind::Pawn, Cell(0, 5));

    board.set_occupant(Cell(0, 5), Some(rook));
    assert_eq!(board.piece(pawn).and_then(|p| p.cell()), None);
    assert_eq!(board.pieces_in_play(), vec![rook]);

    // Putting things back restores both pieces.
    board.set_occupant(Cell(0, 0), Some(rook));
    board.set_occupant(Cell(0, 5), Some(pawn));
    assert_eq!(board.piece_at(Cell(0, 0)), Some((Color::White, Kind::Rook)));
    assert_eq!(board.piece_at(Cell(0, 5)), Some((Color::Black, Kind::Pawn)));
    assert_eq!(board.pieces_in_play(), vec![rook, pawn]);
}

#[test]
fn test_clearing_keeps_tracked_cell() {
    let mut board = Board::empty();
    let queen = board.place(Color::White, Kind::Queen, Cell(3, 3));

    board.set_occupant(Cell(3, 3), None);
    assert!(board.is_empty(Cell(3, 3)));
    assert_eq!(board.piece(queen).and_then(|p| p.cell()), Some(Cell(3, 3)));
    assert!(board.pieces_in_play().is_empty());
}

#[test]
fn test_hash_returns_after_round_trip() {
    let mut board = Board::new();
    let original = board.hash();
    let knight = board.occupant(Cell(0, 6)).expect("knight on g1");

    board.set_occupant(Cell(2, 5), Some(knight));
    assert_ne!(board.hash(), original);
    board.set_occupant(Cell(0, 6), Some(knight));
    assert_eq!(board.hash(), original);
}

#[test]
fn test_hash_depends_on_occupancy_not_history() {
    let mut a = Board::empty();
    a.place(Color::White, Kind::King, Cell(0, 4));
    let rook = a.place(Color::White, Kind::Rook, Cell(0, 0));
    a.set_occupant(Cell(4, 0), Some(rook));

    let mut b = Board::empty();
    b.place(Color::White, Kind::King, Cell(0, 4));
    b.place(Color::White, Kind::Rook, Cell(4, 0));

    assert_eq!(a.hash(), b.hash());
}

#[test]
fn test_off_board_queries() {
    let mut board = Board::empty();
    let bishop = board.place(Color::White, Kind::Bishop, Cell(0, 0));

    for cell in [Cell(-1, 0), Cell(0, 8), Cell(8, 8), Cell(-3, -3)] {
        assert!(!board.is_cell_on_board(cell));
        assert!(!board.is_empty_and_on_board(cell));
        assert!(!board.is_enterable(bishop, cell));
        assert!(!board.is_capturable(bishop, cell));
        assert_eq!(board.occupant(cell), None);
    }
}

#[test]
fn test_enterable_and_capturable() {
    let mut board = Board::empty();
    let white = board.place(Color::White, Kind::Rook, Cell(0, 0));
    board.place(Color::White, Kind::Pawn, Cell(1, 0));
    board.place(Color::Black, Kind::Pawn, Cell(0, 1));

    assert!(board.is_enterable(white, Cell(2, 2)));
    assert!(!board.is_capturable(white, Cell(2, 2)));

    assert!(!board.is_enterable(white, Cell(1, 0)));
    assert!(!board.is_capturable(white, Cell(1, 0)));

    assert!(board.is_enterable(white, Cell(0, 1)));
    assert!(board.is_capturable(white, Cell(0, 1)));
    assert_eq!(board.occupant_color(Cell(0, 1)), Some(Color::Black));
}

#[test]
fn test_find_king() {
    let board = Board::new();
    assert_eq!(board.find_king(Color::White), Some(Cell(0, 4)));
    assert_eq!(board.find_king(Color::Black), Some(Cell(7, 4)));
    assert_eq!(Board::empty().find_king(Color::White), None);
}

#[test]
fn test_clone_is_independent() {
    let original = Board::new();
    let mut copy = original.clone();
    let pawn = copy.occupant(Cell(1, 0)).expect("pawn on a2");
    copy.set_occupant(Cell(2, 0), Some(pawn));

    assert_ne!(copy, original);
    assert_eq!(original.piece_at(Cell(1, 0)), Some((Color::White, Kind::Pawn)));
}
