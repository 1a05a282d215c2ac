//! En-passant and castling legality.

use crate::attacks::square_attacked;
use crate::castle_rights::{CastleSide, KING_ORIGIN_COL};
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

use super::pieces::pawn_diagonal;

/// Square of the pawn removed by an en-passant capture from `from` to `to`:
/// beside the capturing pawn, on the destination's column.
#[inline]
pub(crate) fn en_passant_victim(from: Square, to: Square) -> Square {
    Square::at(from.row(), to.col())
}

/// Return `true` if a `color` pawn on `from` may capture en passant onto `to`.
///
/// The destination must be the live en-passant target and an opposing pawn
/// must stand behind it.
pub(crate) fn en_passant_ok(position: &Position, color: Color, from: Square, to: Square) -> bool {
    if position.en_passant() != Some(to) || !pawn_diagonal(color, from, to) {
        return false;
    }
    let board = position.board();
    board.is_empty(to)
        && board.piece_at(en_passant_victim(from, to))
            == Some(Piece::new(color.flip(), PieceKind::Pawn))
}

/// Return the castling move for `color` toward `side`, if it is legal.
///
/// Requires the right to be held, king and rook on their origin squares,
/// every square between them empty, and none of the squares the king stands
/// on, crosses or lands on attacked. Each king square is tested with the
/// king actually placed there.
pub(crate) fn castle_move(position: &Position, color: Color, side: CastleSide) -> Option<Move> {
    if !position.castling().has(color, side) {
        return None;
    }

    let board = position.board();
    let row = color.back_row();
    let king = Piece::new(color, PieceKind::King);
    let king_from = Square::at(row, KING_ORIGIN_COL);
    let rook_from = Square::at(row, side.rook_origin_col());
    if board.piece_at(king_from) != Some(king)
        || board.piece_at(rook_from) != Some(Piece::new(color, PieceKind::Rook))
    {
        return None;
    }

    let (low, high) = match side {
        CastleSide::KingSide => (KING_ORIGIN_COL, side.rook_origin_col()),
        CastleSide::QueenSide => (side.rook_origin_col(), KING_ORIGIN_COL),
    };
    if ((low + 1)..high).any(|col| !board.is_empty(Square::at(row, col))) {
        return None;
    }

    let target_col = side.king_target_col();
    let (first, last) = (KING_ORIGIN_COL.min(target_col), KING_ORIGIN_COL.max(target_col));
    for col in first..=last {
        let king_sq = Square::at(row, col);
        let mut scratch = *board;
        scratch.relocate(king_from, king_sq);
        if square_attacked(&scratch, king_sq, color.flip()) {
            return None;
        }
    }

    Some(Move::castle(king_from, Square::at(row, target_col), side))
}
