use crate::board::{BoardAdapter, Cell, Color, PieceId};

/// Forward step, home-rank double step, then diagonal captures (right, left).
pub(super) fn pawn_cells<B: BoardAdapter + ?Sized>(
    board: &B,
    id: PieceId,
    from: Cell,
    color: Color,
    out: &mut Vec<Cell>,
) {
    let dir = color.pawn_direction();

    let forward = from.offset(dir, 0);
    if board.is_empty_and_on_board(forward) {
        out.push(forward);
        let double = from.offset(2 * dir, 0);
        if from.row() == color.pawn_home_row() && board.is_empty_and_on_board(double) {
            out.push(double);
        }
    }

    for dc in [1, -1] {
        let target = from.offset(dir, dc);
        if board.is_capturable(id, target) {
            out.push(target);
        }
    }
}
