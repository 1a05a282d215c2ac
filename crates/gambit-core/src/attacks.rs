//! Path clearance and attacked-square queries.

use crate::board::Board;
use crate::color::Color;
use crate::movegen::pieces;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Return `true` if every square strictly between `start` and `end` is empty.
///
/// Walks the unit step along the shared row, column or diagonal. Adjacent
/// squares have an empty path. Callers only use this for straight or
/// diagonal lines; knight offsets are never passed in.
pub fn path_clear(board: &Board, start: Square, end: Square) -> bool {
    let d_row = (end.row() as i8 - start.row() as i8).signum();
    let d_col = (end.col() as i8 - start.col() as i8).signum();

    let mut current = start.offset(d_row, d_col);
    while let Some(sq) = current {
        if sq == end {
            return true;
        }
        if !board.is_empty(sq) {
            return false;
        }
        current = sq.offset(d_row, d_col);
    }
    // Only reached when `end` is not on a line from `start`.
    false
}

/// Return `true` if `piece` standing on `from` attacks `target`.
///
/// Pawns attack their two forward diagonals whether or not anything stands
/// there; every other kind attacks exactly where it could move.
pub fn attacks(board: &Board, piece: Piece, from: Square, target: Square) -> bool {
    match piece.kind() {
        PieceKind::Pawn => pieces::pawn_diagonal(piece.color(), from, target),
        kind => pieces::reaches(board, kind, from, target),
    }
}

/// Return `true` if any piece of `by_color` attacks `sq`.
pub fn square_attacked(board: &Board, sq: Square, by_color: Color) -> bool {
    board
        .pieces(by_color)
        .any(|(from, piece)| from != sq && attacks(board, piece, from, sq))
}
