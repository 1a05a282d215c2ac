//! Move values exchanged between the engine and its callers.

use std::fmt;

use crate::castle_rights::CastleSide;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// The piece a pawn may promote to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromotionPiece {
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl PromotionPiece {
    /// All promotion choices, strongest first.
    pub const ALL: [PromotionPiece; 4] = [
        PromotionPiece::Queen,
        PromotionPiece::Rook,
        PromotionPiece::Bishop,
        PromotionPiece::Knight,
    ];

    /// Convert to the corresponding [`PieceKind`].
    pub const fn to_piece_kind(self) -> PieceKind {
        match self {
            PromotionPiece::Queen => PieceKind::Queen,
            PromotionPiece::Rook => PieceKind::Rook,
            PromotionPiece::Bishop => PieceKind::Bishop,
            PromotionPiece::Knight => PieceKind::Knight,
        }
    }

    /// Convert from a [`PieceKind`]; pawns and kings are not valid choices.
    pub const fn from_piece_kind(kind: PieceKind) -> Option<PromotionPiece> {
        match kind {
            PieceKind::Queen => Some(PromotionPiece::Queen),
            PieceKind::Rook => Some(PromotionPiece::Rook),
            PieceKind::Bishop => Some(PromotionPiece::Bishop),
            PieceKind::Knight => Some(PromotionPiece::Knight),
            PieceKind::Pawn | PieceKind::King => None,
        }
    }
}

/// The category of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// Quiet move or ordinary capture.
    Normal,
    /// Pawn capture onto the en-passant target.
    EnPassant,
    /// King move of two squares, with the rook jumping over it.
    Castle(CastleSide),
    /// Pawn move onto the far rank. `None` defers the choice to
    /// [`Game::resolve_promotion`](crate::Game::resolve_promotion).
    Promotion(Option<PromotionPiece>),
}

/// A move: start square, end square, and its kind.
///
/// Moves are transient values built by move generation or by the caller
/// and consumed by [`Game::apply_move`](crate::Game::apply_move).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    kind: MoveKind,
}

impl Move {
    /// Filler for unused move-list slots. Never legal.
    pub(crate) const PLACEHOLDER: Move = Move::normal(Square::at(0, 0), Square::at(0, 0));

    /// Create a move of the given kind.
    #[inline]
    pub const fn new(from: Square, to: Square, kind: MoveKind) -> Move {
        Move { from, to, kind }
    }

    /// Create a normal (quiet or capture) move.
    #[inline]
    pub const fn normal(from: Square, to: Square) -> Move {
        Move::new(from, to, MoveKind::Normal)
    }

    /// Create an en-passant capture.
    #[inline]
    pub const fn en_passant(from: Square, to: Square) -> Move {
        Move::new(from, to, MoveKind::EnPassant)
    }

    /// Create a castling move from the king's source and destination.
    #[inline]
    pub const fn castle(from: Square, to: Square, side: CastleSide) -> Move {
        Move::new(from, to, MoveKind::Castle(side))
    }

    /// Create a promotion, with or without the target already chosen.
    #[inline]
    pub const fn promotion(from: Square, to: Square, piece: Option<PromotionPiece>) -> Move {
        Move::new(from, to, MoveKind::Promotion(piece))
    }

    /// Source square.
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Destination square.
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Move kind.
    #[inline]
    pub const fn kind(self) -> MoveKind {
        self.kind
    }

    /// Chosen promotion piece, if this is a promotion with a decided target.
    #[inline]
    pub const fn promotion_piece(self) -> Option<PromotionPiece> {
        match self.kind {
            MoveKind::Promotion(piece) => piece,
            _ => None,
        }
    }

    #[inline]
    pub const fn is_promotion(self) -> bool {
        matches!(self.kind, MoveKind::Promotion(_))
    }

    /// Return the same move with its promotion target replaced.
    ///
    /// Non-promotion moves are returned unchanged.
    #[inline]
    pub const fn with_promotion(self, piece: Option<PromotionPiece>) -> Move {
        match self.kind {
            MoveKind::Promotion(_) => Move::promotion(self.from, self.to, piece),
            _ => self,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(piece) = self.promotion_piece() {
            write!(f, "{}", piece.to_piece_kind().letter())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self} kind={:?})", self.kind)
    }
}
