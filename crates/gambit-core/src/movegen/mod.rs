//! Move generation: pseudo-legal candidates, special moves and the legality filter.

mod legal;
pub(crate) mod pieces;
mod special;

use crate::castle_rights::CastleSide;
use crate::chess_move::{Move, MoveKind};
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

pub use self::legal::{leaves_king_safe, legal_destinations, legal_moves};
pub(crate) use self::special::en_passant_victim;

use self::pieces::{pawn_advance, pawn_diagonal, reaches};
use self::special::{castle_move, en_passant_ok};

/// Stack-allocated buffer for generated moves.
///
/// Capacity 256 covers the 218-move maximum of any chess position.
pub struct MoveList {
    moves: [Move; 256],
    len: u16,
}

impl MoveList {
    /// Create an empty move list.
    pub fn new() -> MoveList {
        MoveList {
            moves: [Move::PLACEHOLDER; 256],
            len: 0,
        }
    }

    /// Push a move onto the list.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        debug_assert!((self.len as usize) < 256);
        self.moves[self.len as usize] = mv;
        self.len += 1;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len as usize]
    }

    /// The move from `from` to `to`, if the list holds one.
    ///
    /// At most one exists: promotions are listed once with the piece
    /// undecided, and castling is keyed by the king's destination.
    pub fn find(&self, from: Square, to: Square) -> Option<Move> {
        self.as_slice()
            .iter()
            .copied()
            .find(|m| m.from() == from && m.to() == to)
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;
    #[inline]
    fn index(&self, index: usize) -> &Move {
        &self.as_slice()[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Classify a move of `mover`'s piece from `from` to `to`, ignoring self-check.
///
/// Returns the move kind when the move obeys the movement rules, else `None`.
/// Checks, in order: the source holds one of `mover`'s pieces, the squares
/// differ, the destination is not `mover`'s own piece, and the kind-specific
/// rule. Castling is not produced here; see [`castle_move`].
pub fn pseudo_legal_kind(
    position: &Position,
    mover: Color,
    from: Square,
    to: Square,
) -> Option<MoveKind> {
    let board = position.board();
    let piece = board.piece_at(from).filter(|p| p.color() == mover)?;
    if from == to {
        return None;
    }
    let target = board.piece_at(to);
    if target.is_some_and(|t| t.color() == mover) {
        return None;
    }

    match piece.kind() {
        PieceKind::Pawn => {
            let promotes = to.row() == mover.promotion_row();
            let plain = if promotes {
                MoveKind::Promotion(None)
            } else {
                MoveKind::Normal
            };
            if pawn_advance(board, mover, from, to) {
                Some(plain)
            } else if pawn_diagonal(mover, from, to) && target.is_some() {
                Some(plain)
            } else if en_passant_ok(position, mover, from, to) {
                Some(MoveKind::EnPassant)
            } else {
                None
            }
        }
        kind => reaches(board, kind, from, to).then_some(MoveKind::Normal),
    }
}

/// Push every pseudo-legal candidate for the piece on `from`, castling included.
pub(crate) fn pseudo_legal_from(position: &Position, mover: Color, from: Square, list: &mut MoveList) {
    for to in Square::all() {
        if let Some(kind) = pseudo_legal_kind(position, mover, from, to) {
            list.push(Move::new(from, to, kind));
        }
    }

    let is_king = position
        .board()
        .piece_at(from)
        .is_some_and(|p| p.is(mover, PieceKind::King));
    if is_king {
        for side in CastleSide::ALL {
            if let Some(mv) = castle_move(position, mover, side) {
                list.push(mv);
            }
        }
    }
}
