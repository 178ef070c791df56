//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece rather than parsing placement strings.
//!
//! # Example
//! ```
//! use piece_rules::board::{BoardBuilder, Cell, Color, Kind};
//!
//! let board = BoardBuilder::new()
//!     .piece(Cell(0, 4), Color::White, Kind::King)
//!     .piece(Cell(7, 4), Color::Black, Kind::King)
//!     .piece(Cell(1, 0), Color::White, Kind::Pawn)
//!     .build();
//! assert_eq!(board.pieces_len(), 3);
//! ```

use super::{Board, Cell, Color, Kind};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Cell, Color, Kind)>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();

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
        for (col, &kind) in back_rank.iter().enumerate() {
            let col = col as i8;
            builder.pieces.push((Cell(0, col), Color::White, kind));
            builder.pieces.push((Cell(7, col), Color::Black, kind));
            builder.pieces.push((Cell(1, col), Color::White, Kind::Pawn));
            builder.pieces.push((Cell(6, col), Color::Black, Kind::Pawn));
        }
        builder
    }

    /// Place a piece, replacing whatever the builder had on that cell.
    /// Off-board cells are ignored.
    #[must_use]
    pub fn piece(mut self, cell: Cell, color: Color, kind: Kind) -> Self {
        if !cell.is_on_board() {
            return self;
        }
        self.pieces.retain(|(c, _, _)| *c != cell);
        self.pieces.push((cell, color, kind));
        self
    }

    /// Remove a piece from a cell.
    #[must_use]
    pub fn clear(mut self, cell: Cell) -> Self {
        self.pieces.retain(|(c, _, _)| *c != cell);
        self
    }

    /// Build the board. Piece handles follow insertion order.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (cell, color, kind) in self.pieces {
            board.place(color, kind, cell);
        }
        board
    }
}

impl Board {
    /// Number of pieces in the arena, captured ones included.
    pub fn pieces_len(&self) -> usize {
        self.pieces.len()
    }
}
