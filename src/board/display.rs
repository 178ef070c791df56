use std::fmt;

use super::{Board, Cell};

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        for row in (0..8).rev() {
            write!(f, "{} |", row + 1)?;
            for col in 0..8 {
                let ch = match self.piece_at(Cell(row, col)) {
                    Some((color, kind)) => kind.to_placement_char(color),
                    None => ' ',
                };
                write!(f, " {ch} |")?;
            }
            writeln!(f)?;
            writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        }
        write!(f, "    a   b   c   d   e   f   g   h")
    }
}
