//! A full rules position: board plus the state the rules need beyond it.

use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::BoardError;
use crate::square::Square;

/// Board, side to move, castling rights and en-passant target.
///
/// Everything legality depends on lives here, so two equal positions have
/// exactly the same legal moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    board: Board,
    side_to_move: Color,
    castling: CastleRights,
    en_passant: Option<Square>,
}

impl Position {
    /// The standard starting position with White to move.
    pub fn starting() -> Position {
        Position {
            board: Board::starting_position(),
            side_to_move: Color::White,
            castling: CastleRights::ALL,
            en_passant: None,
        }
    }

    /// Assemble a position from its parts.
    ///
    /// Nothing is checked here; see [`Position::validate`].
    pub fn from_parts(
        board: Board,
        side_to_move: Color,
        castling: CastleRights,
        en_passant: Option<Square>,
    ) -> Position {
        Position {
            board,
            side_to_move,
            castling,
            en_passant,
        }
    }

    /// The piece placement.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The color whose turn it is.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// The castling rights still held by either side.
    #[inline]
    pub fn castling(&self) -> CastleRights {
        self.castling
    }

    /// The square skipped by the previous move's double pawn step, if any.
    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[inline]
    pub(crate) fn set_castling(&mut self, rights: CastleRights) {
        self.castling = rights;
    }

    #[inline]
    pub(crate) fn set_en_passant(&mut self, sq: Option<Square>) {
        self.en_passant = sq;
    }

    #[inline]
    pub(crate) fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    /// Check the board invariants and that the en-passant target sits on a
    /// row the opponent's double step could have skipped.
    pub fn validate(&self) -> Result<(), BoardError> {
        self.board.validate()?;
        if let Some(square) = self.en_passant {
            // White to move means Black just double-stepped over row 2.
            let skipped_row = match self.side_to_move {
                Color::White => 2,
                Color::Black => 5,
            };
            if square.row() != skipped_row {
                return Err(BoardError::InvalidEnPassant { square });
            }
        }
        Ok(())
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::starting()
    }
}
