//! Error types for board validation and move submission.

use crate::color::Color;
use crate::chess_move::Move;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Errors from structural validation of a [`Board`](crate::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: Color,
        /// Number of kings found.
        count: usize,
    },
    /// A pawn stands on row 0 or row 7.
    #[error("pawn found on back rank at {square}")]
    PawnOnBackRank {
        /// Where the pawn was found.
        square: Square,
    },
    /// The en-passant target is not on a row a double step can skip.
    #[error("en passant target {square} is not on a skippable row")]
    InvalidEnPassant {
        /// The offending target.
        square: Square,
    },
}

/// Reasons a move or promotion choice is rejected.
///
/// A rejected request never changes the game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The move is not in the current legal set.
    #[error("illegal move: {mv}")]
    IllegalMove {
        /// The rejected move.
        mv: Move,
    },
    /// A pawn is waiting on a promotion choice; no other move is accepted.
    #[error("promotion pending on {square}")]
    PromotionPending {
        /// Square of the pawn awaiting promotion.
        square: Square,
    },
    /// A promotion choice arrived while nothing was pending.
    #[error("no promotion is pending")]
    NoPromotionPending,
    /// A promotion choice named a different square than the pending one.
    #[error("promotion pending on {pending}, not {requested}")]
    PromotionSquareMismatch {
        /// The square actually awaiting promotion.
        pending: Square,
        /// The square named by the caller.
        requested: Square,
    },
    /// Pawns may only become a queen, rook, bishop or knight.
    #[error("cannot promote to {kind}")]
    InvalidPromotionPiece {
        /// The rejected kind.
        kind: PieceKind,
    },
}

#[cfg(test)]
mod tests {
    use super::{BoardError, MoveError};
    use crate::chess_move::Move;
    use crate::color::Color;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    #[test]
    fn board_error_display() {
        let err = BoardError::InvalidKingCount {
            color: Color::Black,
            count: 0,
        };
        assert_eq!(err.to_string(), "expected 1 king for black, found 0");
    }

    #[test]
    fn move_error_display() {
        let e2 = Square::from_algebraic("e2").unwrap();
        let e5 = Square::from_algebraic("e5").unwrap();
        let err = MoveError::IllegalMove {
            mv: Move::normal(e2, e5),
        };
        assert_eq!(err.to_string(), "illegal move: e2e5");

        let err = MoveError::InvalidPromotionPiece {
            kind: PieceKind::King,
        };
        assert_eq!(err.to_string(), "cannot promote to k");
    }
}
