//! Legality filter and full legal-move enumeration.

use crate::attacks::square_attacked;
use crate::chess_move::Move;
use crate::color::Color;
use crate::position::Position;
use crate::square::Square;

use super::{MoveList, pseudo_legal_from};

/// Return `true` if playing `mv` does not leave `mover`'s king attacked.
///
/// Simulates the move on a scratch copy of the board. Castling-rights and
/// en-passant updates are not part of the simulation, and an undecided
/// promotion keeps its pawn in place, which blocks the same lines as any
/// promoted piece would.
pub fn leaves_king_safe(position: &Position, mover: Color, mv: Move) -> bool {
    let scratch = position.board().after_move(mv);
    match scratch.king_square(mover) {
        Some(king) => !square_attacked(&scratch, king, mover.flip()),
        // Kingless boards break the engine's invariants; there is nothing to protect.
        None => true,
    }
}

/// Push the legal moves of the piece on `from` for `mover` onto `list`.
fn push_legal_from(position: &Position, mover: Color, from: Square, list: &mut MoveList) {
    let mut candidates = MoveList::new();
    pseudo_legal_from(position, mover, from, &mut candidates);
    for &mv in &candidates {
        if leaves_king_safe(position, mover, mv) {
            list.push(mv);
        }
    }
}

/// Every legal move for `color`.
///
/// Promotions appear once per destination with the piece left undecided.
pub fn legal_moves(position: &Position, color: Color) -> MoveList {
    let mut list = MoveList::new();
    for (from, _) in position.board().pieces(color) {
        push_legal_from(position, color, from, &mut list);
    }
    list
}

/// Destination squares the piece on `from` may legally reach, with the side
/// to move as the mover. Empty for empty squares and for the opponent's pieces.
pub fn legal_destinations(position: &Position, from: Square) -> Vec<Square> {
    let mut list = MoveList::new();
    push_legal_from(position, position.side_to_move(), from, &mut list);
    list.as_slice().iter().map(|mv| mv.to()).collect()
}
