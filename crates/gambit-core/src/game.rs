//! A game in progress: the position, its terminal status and the
//! two-phase promotion protocol.

use tracing::{debug, trace};

use crate::chess_move::{Move, MoveKind, PromotionPiece};
use crate::color::Color;
use crate::error::{BoardError, MoveError};
use crate::movegen::{MoveList, legal_destinations, legal_moves};
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;
use crate::status::{self, GameStatus};

/// Result of a successful [`Game::apply_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Status for the side to move after the move.
    ///
    /// While a promotion is pending nothing is re-evaluated and the status
    /// from before the move is repeated.
    pub status: GameStatus,
    /// Set when the move left a pawn on the far rank waiting for
    /// [`Game::resolve_promotion`].
    pub promotion: Option<Square>,
}

/// The single mutable value threaded through a game.
///
/// Every rejected request returns an error and leaves the game unchanged.
#[derive(Debug, Clone)]
pub struct Game {
    position: Position,
    status: GameStatus,
    pending: Option<Square>,
}

impl Game {
    /// A new game from the standard starting position.
    pub fn new() -> Game {
        Game {
            position: Position::starting(),
            status: GameStatus::Ongoing,
            pending: None,
        }
    }

    /// Start a game from an arbitrary position after validating it.
    pub fn from_position(position: Position) -> Result<Game, BoardError> {
        position.validate()?;
        Ok(Game {
            status: status::status(&position),
            position,
            pending: None,
        })
    }

    /// Return to the starting position, dropping any pending promotion.
    pub fn reset(&mut self) {
        debug!("game reset");
        *self = Game::new();
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move()
    }

    /// Square of the pawn awaiting a promotion choice, if any.
    #[inline]
    pub fn pending_promotion(&self) -> Option<Square> {
        self.pending
    }

    /// The side that delivered mate, once the game has ended in checkmate.
    pub fn winner(&self) -> Option<Color> {
        (self.status == GameStatus::Checkmate).then(|| self.side_to_move().flip())
    }

    /// Return `true` if `color`'s king is currently attacked.
    pub fn is_check(&self, color: Color) -> bool {
        status::is_check(&self.position, color)
    }

    /// Every legal move for the side to move. Empty while a promotion is pending.
    pub fn legal_moves(&self) -> MoveList {
        if self.pending.is_some() {
            return MoveList::new();
        }
        legal_moves(&self.position, self.side_to_move())
    }

    /// Destinations the piece on `square` may legally move to.
    ///
    /// Empty for an empty square, an opponent's piece, or while a promotion
    /// is pending.
    pub fn legal_destinations(&self, square: Square) -> Vec<Square> {
        if self.pending.is_some() {
            return Vec::new();
        }
        legal_destinations(&self.position, square)
    }

    /// Play `mv` for the side to move.
    ///
    /// The move is matched against the legal set by its squares. A
    /// [`MoveKind::Normal`] submission takes its kind from the legal set, so
    /// two squares are enough to castle, capture en passant or promote; any
    /// other kind must agree with the legal move. A promotion without a
    /// choice suspends the game until [`Game::resolve_promotion`] is called.
    pub fn apply_move(&mut self, mv: Move) -> Result<MoveOutcome, MoveError> {
        if let Some(square) = self.pending {
            trace!(%mv, %square, "move rejected, promotion pending");
            return Err(MoveError::PromotionPending { square });
        }

        let legal = legal_moves(&self.position, self.side_to_move())
            .find(mv.from(), mv.to())
            .filter(|legal| kind_agrees(mv.kind(), legal.kind()))
            .ok_or_else(|| {
                trace!(%mv, "illegal move rejected");
                MoveError::IllegalMove { mv }
            })?;

        if let MoveKind::Promotion(_) = legal.kind() {
            let to = legal.to();
            let Some(piece) = mv.promotion_piece() else {
                self.position = self.position.advance(legal);
                self.pending = Some(to);
                debug!(mv = %legal, "promotion pending");
                return Ok(MoveOutcome {
                    status: self.status,
                    promotion: Some(to),
                });
            };
            self.position = self.position.advance(legal).complete_promotion(to, piece);
        } else {
            self.position = self.position.make_move(legal);
        }

        let played = legal.with_promotion(mv.promotion_piece());
        self.status = status::status(&self.position);
        debug!(mv = %played, status = %self.status, "move applied");
        Ok(MoveOutcome {
            status: self.status,
            promotion: None,
        })
    }

    /// Finish a suspended promotion on `square` with `kind`, then pass the turn.
    ///
    /// On error the promotion stays pending.
    pub fn resolve_promotion(
        &mut self,
        square: Square,
        kind: PieceKind,
    ) -> Result<GameStatus, MoveError> {
        let pending = self.pending.ok_or(MoveError::NoPromotionPending)?;
        if pending != square {
            return Err(MoveError::PromotionSquareMismatch {
                pending,
                requested: square,
            });
        }
        let piece = PromotionPiece::from_piece_kind(kind)
            .ok_or(MoveError::InvalidPromotionPiece { kind })?;

        self.position = self.position.complete_promotion(square, piece);
        self.pending = None;
        self.status = status::status(&self.position);
        debug!(%square, %kind, status = %self.status, "promotion resolved");
        Ok(self.status)
    }
}

/// Return `true` if a submitted move kind is compatible with the legal one.
///
/// `Normal` stands for "whatever the squares mean"; the promotion choice
/// itself is not compared.
fn kind_agrees(submitted: MoveKind, legal: MoveKind) -> bool {
    match submitted {
        MoveKind::Normal => true,
        MoveKind::Promotion(_) => matches!(legal, MoveKind::Promotion(_)),
        other => other == legal,
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{Game, MoveOutcome};
    use crate::board::Board;
    use crate::castle_rights::{CastleRights, CastleSide};
    use crate::chess_move::{Move, PromotionPiece};
    use crate::color::Color;
    use crate::error::{BoardError, MoveError};
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::position::Position;
    use crate::square::Square;
    use crate::status::GameStatus;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn promotion_game() -> Game {
        let board = Board::empty()
            .with_piece(sq("e1"), Piece::WHITE_KING)
            .with_piece(sq("a1"), Piece::BLACK_KING)
            .with_piece(sq("g7"), Piece::WHITE_PAWN);
        Game::from_position(Position::from_parts(board, Color::White, CastleRights::NONE, None))
            .unwrap()
    }

    #[test]
    fn new_game_basics() {
        let game = Game::new();
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.status(), GameStatus::Ongoing);
        assert_eq!(game.legal_moves().len(), 20);
        assert_eq!(game.pending_promotion(), None);
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn illegal_move_leaves_game_untouched() {
        let mut game = Game::new();
        let err = game.apply_move(Move::normal(sq("e2"), sq("e5"))).unwrap_err();
        assert_eq!(
            err,
            MoveError::IllegalMove {
                mv: Move::normal(sq("e2"), sq("e5"))
            }
        );
        assert_eq!(*game.position(), Position::starting());

        // Black pieces cannot move on White's turn.
        assert!(game.apply_move(Move::normal(sq("e7"), sq("e5"))).is_err());
    }

    #[test]
    fn kind_is_taken_from_legal_set() {
        let mut game = Game::new();
        game.apply_move(Move::normal(sq("e2"), sq("e4"))).unwrap();
        game.apply_move(Move::normal(sq("a7"), sq("a6"))).unwrap();
        game.apply_move(Move::normal(sq("e4"), sq("e5"))).unwrap();
        game.apply_move(Move::normal(sq("d7"), sq("d5"))).unwrap();
        // Submitted as a plain move; played as en passant.
        game.apply_move(Move::normal(sq("e5"), sq("d6"))).unwrap();
        assert!(game.position().board().is_empty(sq("d5")));
    }

    #[test]
    fn mismatched_kind_is_rejected() {
        let mut game = Game::new();
        let tagged = Move::promotion(sq("e2"), sq("e4"), Some(PromotionPiece::Queen));
        assert_eq!(
            game.apply_move(tagged),
            Err(MoveError::IllegalMove { mv: tagged })
        );
        let fake_castle = Move::castle(sq("e2"), sq("e4"), CastleSide::KingSide);
        assert!(game.apply_move(fake_castle).is_err());
        let fake_en_passant = Move::en_passant(sq("g1"), sq("f3"));
        assert!(game.apply_move(fake_en_passant).is_err());
        assert_eq!(*game.position(), Position::starting());

        // The matching kind is accepted as well as the plain form.
        game.apply_move(Move::normal(sq("e2"), sq("e4"))).unwrap();
        assert_eq!(game.side_to_move(), Color::Black);
    }

    #[test]
    fn explicit_castle_must_name_the_right_side() {
        let board = Board::empty()
            .with_piece(sq("e1"), Piece::WHITE_KING)
            .with_piece(sq("h1"), Piece::WHITE_ROOK)
            .with_piece(sq("e8"), Piece::BLACK_KING);
        let position = Position::from_parts(board, Color::White, CastleRights::ALL, None);
        let mut game = Game::from_position(position).unwrap();

        let wrong = Move::castle(sq("e1"), sq("g1"), CastleSide::QueenSide);
        assert!(game.apply_move(wrong).is_err());
        game.apply_move(Move::castle(sq("e1"), sq("g1"), CastleSide::KingSide))
            .unwrap();
        assert_eq!(game.position().board().piece_at(sq("f1")), Some(Piece::WHITE_ROOK));
    }

    #[test]
    fn two_phase_promotion() {
        let mut game = promotion_game();
        let outcome = game.apply_move(Move::normal(sq("g7"), sq("g8"))).unwrap();
        assert_eq!(
            outcome,
            MoveOutcome {
                status: GameStatus::Ongoing,
                promotion: Some(sq("g8")),
            }
        );
        assert_eq!(game.pending_promotion(), Some(sq("g8")));
        assert_eq!(game.side_to_move(), Color::White);
        assert!(game.legal_moves().is_empty());
        assert!(game.legal_destinations(sq("e1")).is_empty());

        let err = game.apply_move(Move::normal(sq("e1"), sq("e2"))).unwrap_err();
        assert_eq!(err, MoveError::PromotionPending { square: sq("g8") });

        let err = game.resolve_promotion(sq("g8"), PieceKind::King).unwrap_err();
        assert_eq!(err, MoveError::InvalidPromotionPiece { kind: PieceKind::King });
        let err = game.resolve_promotion(sq("h8"), PieceKind::Queen).unwrap_err();
        assert_eq!(
            err,
            MoveError::PromotionSquareMismatch {
                pending: sq("g8"),
                requested: sq("h8"),
            }
        );
        assert_eq!(game.pending_promotion(), Some(sq("g8")));

        let status = game.resolve_promotion(sq("g8"), PieceKind::Knight).unwrap();
        assert_eq!(status, GameStatus::Ongoing);
        assert_eq!(game.position().board().piece_at(sq("g8")), Some(Piece::WHITE_KNIGHT));
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(
            game.resolve_promotion(sq("g8"), PieceKind::Queen),
            Err(MoveError::NoPromotionPending)
        );
    }

    #[test]
    fn decided_promotion_completes_at_once() {
        let mut game = promotion_game();
        let mv = Move::promotion(sq("g7"), sq("g8"), Some(PromotionPiece::Rook));
        let outcome = game.apply_move(mv).unwrap();
        assert_eq!(outcome.promotion, None);
        assert_eq!(game.position().board().piece_at(sq("g8")), Some(Piece::WHITE_ROOK));
        assert_eq!(game.side_to_move(), Color::Black);
    }

    #[test]
    fn fools_mate() {
        let mut game = Game::new();
        for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4")] {
            game.apply_move(Move::normal(sq(from), sq(to))).unwrap();
        }
        let outcome = game.apply_move(Move::normal(sq("d8"), sq("h4"))).unwrap();
        assert_eq!(outcome.status, GameStatus::Checkmate);
        assert!(game.is_check(Color::White));
        assert_eq!(game.winner(), Some(Color::Black));
        assert!(game.apply_move(Move::normal(sq("a2"), sq("a3"))).is_err());

        game.reset();
        assert_eq!(*game.position(), Position::starting());
        assert_eq!(game.status(), GameStatus::Ongoing);
    }

    #[test]
    fn from_position_rejects_missing_king() {
        let board = Board::empty().with_piece(sq("e1"), Piece::WHITE_KING);
        let err = Game::from_position(Position::from_parts(
            board,
            Color::White,
            CastleRights::NONE,
            None,
        ))
        .unwrap_err();
        assert_eq!(
            err,
            BoardError::InvalidKingCount {
                color: Color::Black,
                count: 0,
            }
        );
    }
}
