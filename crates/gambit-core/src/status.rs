//! Check, checkmate and stalemate detection.

use std::fmt;

use crate::attacks::square_attacked;
use crate::color::Color;
use crate::movegen::legal_moves;
use crate::position::Position;

/// Terminal classification of a position for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    /// Return `true` once no further moves can be made.
    #[inline]
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameStatus::Ongoing => "ongoing",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
        };
        f.write_str(s)
    }
}

/// Return `true` if `color`'s king is attacked.
pub fn is_check(position: &Position, color: Color) -> bool {
    let board = position.board();
    board
        .king_square(color)
        .is_some_and(|king| square_attacked(board, king, color.flip()))
}

/// `color` is in check and has no legal move.
pub fn is_checkmate(position: &Position, color: Color) -> bool {
    is_check(position, color) && legal_moves(position, color).is_empty()
}

/// `color` is not in check and has no legal move.
pub fn is_stalemate(position: &Position, color: Color) -> bool {
    !is_check(position, color) && legal_moves(position, color).is_empty()
}

/// Classify the position for the side to move.
///
/// Runs the check test and the move enumeration once each.
pub fn status(position: &Position) -> GameStatus {
    let us = position.side_to_move();
    let in_check = is_check(position, us);
    let stuck = legal_moves(position, us).is_empty();
    match (in_check, stuck) {
        (true, true) => GameStatus::Checkmate,
        (true, false) => GameStatus::Check,
        (false, true) => GameStatus::Stalemate,
        (false, false) => GameStatus::Ongoing,
    }
}
