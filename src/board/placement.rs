//! Piece-placement strings (the first field of FEN).

use std::str::FromStr;

use super::error::BoardError;
use super::{Board, Cell, Color, Kind};

impl Board {
    /// Parse a board from a FEN piece-placement field.
    ///
    /// Only the first whitespace-separated field is read, so a full FEN string
    /// is accepted too. Ranks are listed from row 7 down to row 0.
    pub fn from_placement(placement: &str) -> Result<Self, BoardError> {
        let mut board = Board::empty();
        let field = placement.split_whitespace().next().unwrap_or("");
        let ranks: Vec<&str> = field.split('/').collect();

        if ranks.len() != 8 {
            return Err(BoardError::InvalidRankCount { found: ranks.len() });
        }

        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let row = 7 - rank_idx as i8;
            let mut files = 0usize;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    files += skip as usize;
                    continue;
                }
                let kind = Kind::from_char(c).ok_or(BoardError::InvalidPiece { char: c })?;
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                if files >= 8 {
                    return Err(BoardError::InvalidFileCount {
                        rank: rank_idx,
                        files: files + 1,
                    });
                }
                board.place(color, kind, Cell(row, files as i8));
                files += 1;
            }
            if files != 8 {
                return Err(BoardError::InvalidFileCount {
                    rank: rank_idx,
                    files,
                });
            }
        }

        Ok(board)
    }

    /// Render the occupancy as a FEN piece-placement field.
    pub fn to_placement(&self) -> String {
        let mut out = String::new();
        for row in (0..8).rev() {
            let mut empty = 0;
            for col in 0..8 {
                match self.piece_at(Cell(row, col)) {
                    Some((color, kind)) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(kind.to_placement_char(color));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if row > 0 {
                out.push('/');
            }
        }
        out
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_placement(s)
    }
}
