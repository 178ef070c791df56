use crate::zobrist::ZOBRIST;

use super::check::CheckCache;
use super::{BoardAdapter, Cell, Color, Kind, Piece, PieceId};

/// Mailbox board: an 8x8 grid of piece handles over a piece arena.
///
/// Captured pieces stay in the arena with their cell unset, so handles remain
/// valid for the lifetime of the board.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) grid: [[Option<PieceId>; 8]; 8],
    pub(crate) pieces: Vec<Piece>,
    pub(crate) hash: u64, // Zobrist hash of the occupancy
    pub(crate) check_cache: CheckCache,
}

impl Board {
    /// The standard starting array.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Kind::Rook,
            Kind::Knight,
            Kind::Bishop,
            Kind::Queen,
            Kind::King,
            Kind::Bishop,
            Kind::Knight,
            Kind::Rook,
        ];
        for (col, kind) in back_rank.iter().enumerate() {
            let col = col as i8;
            board.place(Color::White, *kind, Cell(0, col));
            board.place(Color::White, Kind::Pawn, Cell(1, col));
            board.place(Color::Black, Kind::Pawn, Cell(6, col));
            board.place(Color::Black, *kind, Cell(7, col));
        }
        board
    }

    #[must_use]
    pub fn empty() -> Self {
        Board {
            grid: [[None; 8]; 8],
            pieces: Vec::new(),
            hash: 0,
            check_cache: CheckCache::new(),
        }
    }

    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// Create a piece without placing it.
    pub fn add_piece(&mut self, color: Color, kind: Kind) -> PieceId {
        let id = PieceId(self.pieces.len());
        self.pieces.push(Piece::new(color, kind));
        id
    }

    /// Create a piece and place it on `cell`, displacing any occupant.
    pub fn place(&mut self, color: Color, kind: Kind, cell: Cell) -> PieceId {
        let id = self.add_piece(color, kind);
        self.set_occupant(cell, Some(id));
        id
    }

    pub fn piece_at(&self, cell: Cell) -> Option<(Color, Kind)> {
        self.occupant(cell)
            .map(|id| self.pieces[id.index()])
            .map(|p| (p.color(), p.kind()))
    }

    pub fn is_empty(&self, cell: Cell) -> bool {
        self.occupant(cell).is_none()
    }

    pub fn find_king(&self, color: Color) -> Option<Cell> {
        self.pieces_in_play()
            .into_iter()
            .map(|id| self.pieces[id.index()])
            .find(|p| p.color() == color && p.kind() == Kind::King)
            .and_then(|p| p.cell())
    }

    /// Tracked cells of every piece in the arena, in handle order.
    pub fn tracked_cells(&self) -> Vec<Option<Cell>> {
        self.pieces.iter().map(Piece::cell).collect()
    }

    fn toggle(&mut self, id: PieceId, cell: Cell) {
        let piece = self.pieces[id.index()];
        self.hash ^= ZOBRIST.piece_key(piece.color(), piece.kind(), cell);
    }

    fn slot(&mut self, cell: Cell) -> &mut Option<PieceId> {
        &mut self.grid[cell.row() as usize][cell.col() as usize]
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.grid == other.grid && self.pieces == other.pieces && self.hash == other.hash
    }
}

impl Eq for Board {}

impl BoardAdapter for Board {
    fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.index())
    }

    fn occupant(&self, cell: Cell) -> Option<PieceId> {
        if !cell.is_on_board() {
            return None;
        }
        self.grid[cell.row() as usize][cell.col() as usize]
    }

    fn set_occupant(&mut self, cell: Cell, occupant: Option<PieceId>) {
        debug_assert!(cell.is_on_board(), "set_occupant on off-board cell {cell}");
        if !cell.is_on_board() {
            return;
        }

        let previous = *self.slot(cell);
        if previous == occupant {
            return;
        }

        if let Some(prev) = previous {
            self.toggle(prev, cell);
            if occupant.is_some() {
                self.pieces[prev.index()].set_cell(None);
            }
        }
        *self.slot(cell) = occupant;

        if let Some(id) = occupant {
            if let Some(old) = self.pieces[id.index()].cell() {
                if old != cell && self.occupant(old) == Some(id) {
                    *self.slot(old) = None;
                    self.toggle(id, old);
                }
            }
            self.pieces[id.index()].set_cell(Some(cell));
            self.toggle(id, cell);
        }
    }

    fn is_king_in_check(&self, color: Color) -> bool {
        self.check_cache
            .get_or_compute(self.hash, color, || self.compute_check(color))
    }

    fn pieces_in_play(&self) -> Vec<PieceId> {
        self.pieces
            .iter()
            .enumerate()
            .filter_map(|(idx, piece)| {
                let id = PieceId(idx);
                piece
                    .cell()
                    .filter(|&cell| self.occupant(cell) == Some(id))
                    .map(|_| id)
            })
            .collect()
    }
}
