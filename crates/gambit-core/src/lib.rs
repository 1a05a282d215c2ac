//! Core chess rules: board representation, legal move generation, move
//! application and terminal-state detection.

mod attacks;
mod board;
mod castle_rights;
mod chess_move;
mod color;
mod error;
mod game;
mod make_move;
mod movegen;
mod perft;
mod piece;
mod piece_kind;
mod position;
mod square;
mod status;

pub use attacks::{attacks, path_clear, square_attacked};
pub use board::{Board, PrettyBoard};
pub use castle_rights::{CastleRights, CastleSide};
pub use chess_move::{Move, MoveKind, PromotionPiece};
pub use color::Color;
pub use error::{BoardError, MoveError};
pub use game::{Game, MoveOutcome};
pub use movegen::{
    MoveList, leaves_king_safe, legal_destinations, legal_moves, pseudo_legal_kind,
};
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use position::Position;
pub use square::Square;
pub use status::{GameStatus, is_check, is_checkmate, is_stalemate, status};
