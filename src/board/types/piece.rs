//! Piece kind, color and piece record types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Cell;

/// The six piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Kind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Kind {
    /// All kinds in index order
    pub const ALL: [Kind; 6] = [
        Kind::Pawn,
        Kind::Knight,
        Kind::Bishop,
        Kind::Rook,
        Kind::Queen,
        Kind::King,
    ];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Kind::Pawn => 0,
            Kind::Knight => 1,
            Kind::Bishop => 2,
            Kind::Rook => 3,
            Kind::Queen => 4,
            Kind::King => 5,
        }
    }

    /// Parse a kind from a letter (p, n, b, r, q, k), case-insensitive
    #[must_use]
    pub fn from_char(c: char) -> Option<Kind> {
        match c.to_ascii_lowercase() {
            'p' => Some(Kind::Pawn),
            'n' => Some(Kind::Knight),
            'b' => Some(Kind::Bishop),
            'r' => Some(Kind::Rook),
            'q' => Some(Kind::Queen),
            'k' => Some(Kind::King),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Kind::Pawn => 'p',
            Kind::Knight => 'n',
            Kind::Bishop => 'b',
            Kind::Rook => 'r',
            Kind::Queen => 'q',
            Kind::King => 'k',
        }
    }

    /// Letter with case based on color (uppercase for White)
    #[inline]
    #[must_use]
    pub fn to_placement_char(self, color: Color) -> char {
        let c = self.to_char();
        if color == Color::White {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }

    /// Base material value.
    ///
    /// Pawn=1, Knight=3, Bishop=3, Rook=5, Queen=9, King=999999 (effectively infinite).
    #[inline]
    #[must_use]
    pub const fn material(self) -> f64 {
        match self {
            Kind::Pawn => 1.0,
            Kind::Knight => 3.0,
            Kind::Bishop => 3.0,
            Kind::Rook => 5.0,
            Kind::Queen => 9.0,
            Kind::King => 999_999.0,
        }
    }

    /// Returns true for Bishop, Rook and Queen
    #[inline]
    #[must_use]
    pub const fn is_slider(self) -> bool {
        matches!(self, Kind::Bishop | Kind::Rook | Kind::Queen)
    }
}

/// Piece colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors in index order (White=0, Black=1)
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Scoring sign for aggregation (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            Color::White => 1.0,
            Color::Black => -1.0,
        }
    }

    /// Pawn forward direction in rows (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Pawn home rank (1 for White, 6 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_home_row(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Handle of a piece in a board's piece arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PieceId(pub usize);

impl PieceId {
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A piece: fixed color and kind, plus the cell it currently stands on.
///
/// `cell` is `None` until setup places the piece, and again once it has been
/// captured.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    color: Color,
    kind: Kind,
    cell: Option<Cell>,
}

impl Piece {
    #[must_use]
    pub const fn new(color: Color, kind: Kind) -> Self {
        Piece {
            color,
            kind,
            cell: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> Kind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn cell(&self) -> Option<Cell> {
        self.cell
    }

    #[inline]
    #[must_use]
    pub fn is_white(&self) -> bool {
        self.color == Color::White
    }

    #[inline]
    pub(crate) fn set_cell(&mut self, cell: Option<Cell>) {
        self.cell = cell;
    }
}
