//! Permanent move commit.

use crate::rules::legal_cells;

use super::error::BoardError;
use super::{Board, BoardAdapter, Cell, PieceId};

impl Board {
    /// Move the piece on `from` to `to`, capturing any enemy there.
    ///
    /// `to` must be one of the piece's legal cells. Returns the captured piece,
    /// which is taken out of play but keeps its handle.
    pub fn commit_move(&mut self, from: Cell, to: Cell) -> Result<Option<PieceId>, BoardError> {
        if !from.is_on_board() {
            return Err(BoardError::OffBoard { cell: from });
        }
        if !to.is_on_board() {
            return Err(BoardError::OffBoard { cell: to });
        }
        let mover = self
            .occupant(from)
            .ok_or(BoardError::EmptyCell { cell: from })?;

        if !legal_cells(self, mover).contains(&to) {
            return Err(BoardError::IllegalMove { from, to });
        }

        let captured = self.occupant(to);
        self.set_occupant(to, Some(mover));
        Ok(captured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Color, Kind};

    #[test]
    fn test_quiet_move() {
        let mut board = Board::new();
        let captured = board.commit_move(Cell(1, 4), Cell(3, 4)).expect("legal");
        assert_eq!(captured, None);
        assert!(board.is_empty(Cell(1, 4)));
        assert_eq!(board.piece_at(Cell(3, 4)), Some((Color::White, Kind::Pawn)));
    }

    #[test]
    fn test_capture_takes_piece_out_of_play() {
        let mut board = Board::empty();
        board.place(Color::White, Kind::King, Cell(0, 0));
        let rook = board.place(Color::White, Kind::Rook, Cell(3, 0));
        let knight = board.place(Color::Black, Kind::Knight, Cell(3, 6));

        let captured = board.commit_move(Cell(3, 0), Cell(3, 6)).expect("legal");
        assert_eq!(captured, Some(knight));
        assert_eq!(board.piece(knight).and_then(|p| p.cell()), None);
        assert_eq!(board.piece(rook).and_then(|p| p.cell()), Some(Cell(3, 6)));
        assert!(!board.pieces_in_play().contains(&knight));
    }

    #[test]
    fn test_rejects_bad_moves() {
        let mut board = Board::new();
        assert_eq!(
            board.commit_move(Cell(3, 3), Cell(4, 3)),
            Err(BoardError::EmptyCell { cell: Cell(3, 3) })
        );
        assert_eq!(
            board.commit_move(Cell(1, 4), Cell(4, 4)),
            Err(BoardError::IllegalMove {
                from: Cell(1, 4),
                to: Cell(4, 4)
            })
        );
        assert_eq!(
            board.commit_move(Cell(-1, 4), Cell(0, 4)),
            Err(BoardError::OffBoard { cell: Cell(-1, 4) })
        );
    }

    #[test]
    fn test_pinned_piece_cannot_commit() {
        let mut board = Board::from_placement("4r2k/8/8/8/8/8/4B3/4K3").expect("valid");
        let before = board.clone();
        assert_eq!(
            board.commit_move(Cell(1, 4), Cell(2, 5)),
            Err(BoardError::IllegalMove {
                from: Cell(1, 4),
                to: Cell(2, 5)
            })
        );
        assert_eq!(board, before);
    }
}
