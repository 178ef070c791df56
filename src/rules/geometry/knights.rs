use crate::board::{BoardAdapter, Cell, PieceId};

pub(super) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, 1),
    (-2, -1),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (1, 2),
    (-1, 2),
];

/// Fixed-offset movers (Knight, King): only the destination's occupancy matters.
pub(super) fn leaper_cells<B: BoardAdapter + ?Sized>(
    board: &B,
    id: PieceId,
    from: Cell,
    offsets: &[(i8, i8)],
    out: &mut Vec<Cell>,
) {
    for &(dr, dc) in offsets {
        let target = from.offset(dr, dc);
        if board.is_enterable(id, target) {
            out.push(target);
        }
    }
}
