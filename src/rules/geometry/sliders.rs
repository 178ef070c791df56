use crate::board::{BoardAdapter, Cell, PieceId};

/// Up, down, left, right.
pub(super) const ROOK_RAYS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, -1), (0, 1)];

pub(super) const BISHOP_RAYS: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

pub(super) const QUEEN_RAYS: [(i8, i8); 8] = [
    ROOK_RAYS[0],
    ROOK_RAYS[1],
    ROOK_RAYS[2],
    ROOK_RAYS[3],
    BISHOP_RAYS[0],
    BISHOP_RAYS[1],
    BISHOP_RAYS[2],
    BISHOP_RAYS[3],
];

/// Walk each ray over empty cells; the first occupied cell ends the ray and is
/// included only when it holds an enemy.
pub(super) fn slider_cells<B: BoardAdapter + ?Sized>(
    board: &B,
    id: PieceId,
    from: Cell,
    rays: &[(i8, i8)],
    out: &mut Vec<Cell>,
) {
    for &(dr, dc) in rays {
        let mut cell = from.offset(dr, dc);
        while board.is_empty_and_on_board(cell) {
            out.push(cell);
            cell = cell.offset(dr, dc);
        }
        if board.is_capturable(id, cell) {
            out.push(cell);
        }
    }
}
