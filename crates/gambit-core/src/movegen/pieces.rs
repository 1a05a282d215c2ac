//! Per-kind movement geometry.
//!
//! These rules say whether a piece of a given kind could travel from one
//! square to another on the current board. They ignore what stands on the
//! destination; the caller decides whether that square may be entered.

use crate::attacks::path_clear;
use crate::board::Board;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

#[inline]
fn deltas(from: Square, to: Square) -> (i8, i8) {
    (
        to.row() as i8 - from.row() as i8,
        to.col() as i8 - from.col() as i8,
    )
}

/// Same row or column, nothing in between.
pub(crate) fn rook_line(board: &Board, from: Square, to: Square) -> bool {
    from != to && (from.row() == to.row() || from.col() == to.col()) && path_clear(board, from, to)
}

/// Same diagonal, nothing in between.
pub(crate) fn bishop_line(board: &Board, from: Square, to: Square) -> bool {
    let (d_row, d_col) = deltas(from, to);
    d_row != 0 && d_row.abs() == d_col.abs() && path_clear(board, from, to)
}

pub(crate) fn knight_jump(from: Square, to: Square) -> bool {
    let (d_row, d_col) = deltas(from, to);
    matches!((d_row.abs(), d_col.abs()), (2, 1) | (1, 2))
}

/// One square in any direction.
pub(crate) fn king_step(from: Square, to: Square) -> bool {
    let (d_row, d_col) = deltas(from, to);
    from != to && d_row.abs() <= 1 && d_col.abs() <= 1
}

/// One square diagonally forward for `color`.
pub(crate) fn pawn_diagonal(color: Color, from: Square, to: Square) -> bool {
    let (d_row, d_col) = deltas(from, to);
    d_row == color.pawn_direction() && d_col.abs() == 1
}

/// Forward pawn advance of one step, or two steps from the starting row,
/// onto empty squares only.
pub(crate) fn pawn_advance(board: &Board, color: Color, from: Square, to: Square) -> bool {
    let (d_row, d_col) = deltas(from, to);
    let dir = color.pawn_direction();
    if d_col != 0 || !board.is_empty(to) {
        return false;
    }
    if d_row == dir {
        return true;
    }
    d_row == 2 * dir && from.row() == color.pawn_row() && path_clear(board, from, to)
}

/// Movement geometry of every non-pawn kind.
///
/// Pawns move and capture along different lines, so they are handled by
/// [`pawn_advance`] and [`pawn_diagonal`] instead.
pub(crate) fn reaches(board: &Board, kind: PieceKind, from: Square, to: Square) -> bool {
    match kind {
        PieceKind::Rook => rook_line(board, from, to),
        PieceKind::Bishop => bishop_line(board, from, to),
        PieceKind::Queen => rook_line(board, from, to) || bishop_line(board, from, to),
        PieceKind::Knight => knight_jump(from, to),
        PieceKind::King => king_step(from, to),
        PieceKind::Pawn => false,
    }
}
