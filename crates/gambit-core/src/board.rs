//! The 8×8 piece grid.

use std::fmt;

use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Back-rank layout shared by both colors, a-file first.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Piece occupancy of every square.
///
/// `Board` is `Copy`: simulating a move on a scratch board is a plain value
/// copy, and the copy shares nothing with the original.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; Square::COUNT],
}

impl Board {
    /// A board with no pieces on it.
    pub const fn empty() -> Board {
        Board {
            squares: [None; Square::COUNT],
        }
    }

    /// The standard initial placement: Black on rows 0-1, White on rows 6-7.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for (col, kind) in BACK_RANK.into_iter().enumerate() {
            let col = col as u8;
            for color in Color::ALL {
                board.set(Square::at(color.back_row(), col), Some(Piece::new(color, kind)));
                board.set(
                    Square::at(color.pawn_row(), col),
                    Some(Piece::new(color, PieceKind::Pawn)),
                );
            }
        }
        board
    }

    /// Return a copy of this board with `piece` placed on `sq`.
    ///
    /// Intended for setting up positions before a game starts; the result is
    /// checked by [`Board::validate`] when it becomes part of a game.
    #[must_use]
    pub fn with_piece(mut self, sq: Square, piece: Piece) -> Board {
        self.set(sq, Some(piece));
        self
    }

    /// Return the piece on `sq`, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// Return `true` if nothing stands on `sq`.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_none()
    }

    /// Overwrite the occupancy of `sq`.
    #[inline]
    pub(crate) fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.index()] = piece;
    }

    /// Move whatever stands on `from` to `to`, replacing any occupant.
    #[inline]
    pub(crate) fn relocate(&mut self, from: Square, to: Square) {
        let piece = self.squares[from.index()].take();
        self.squares[to.index()] = piece;
    }

    /// Iterate over every occupied square with its piece.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Iterate over the squares and pieces of one color.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied().filter(move |(_, piece)| piece.color() == color)
    }

    /// Locate `color`'s king.
    ///
    /// Returns `None` only for boards that break the one-king-per-side
    /// invariant, which the engine never produces from a valid start.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(color, PieceKind::King);
        Square::all().find(|&sq| self.piece_at(sq) == Some(king))
    }

    /// Check the invariants the rules engine relies on.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let count = self
                .pieces(color)
                .filter(|(_, piece)| piece.kind() == PieceKind::King)
                .count();
            if count != 1 {
                return Err(BoardError::InvalidKingCount { color, count });
            }
        }

        if let Some((square, _)) = self
            .occupied()
            .find(|(sq, piece)| piece.kind() == PieceKind::Pawn && (sq.row() == 0 || sq.row() == 7))
        {
            return Err(BoardError::PawnOnBackRank { square });
        }

        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(")?;
        for row in 0..8u8 {
            if row > 0 {
                write!(f, "/")?;
            }
            for col in 0..8u8 {
                let c = self.piece_at(Square::at(row, col)).map_or('.', Piece::symbol);
                write!(f, "{c}")?;
            }
        }
        write!(f, ")")
    }
}

/// Wrapper for printing a board as an 8×8 grid with coordinates, row 0 on top.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8u8 {
            write!(f, "{}  ", 8 - row)?;
            for col in 0..8u8 {
                let c = self.0.piece_at(Square::at(row, col)).map_or('.', Piece::symbol);
                if col < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
