//! Move execution via copy-make.

use crate::board::Board;
use crate::chess_move::{Move, MoveKind, PromotionPiece};
use crate::movegen::en_passant_victim;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

impl Board {
    /// Return the board after the mechanical effect of `mv`. `self` is not modified.
    ///
    /// Moves whatever stands on the source; removes the pawn behind the
    /// destination for en passant; brings the rook across for castling; and
    /// places the chosen piece for a decided promotion. An undecided
    /// promotion leaves the pawn on the far rank. Nothing is validated.
    #[must_use]
    pub fn after_move(&self, mv: Move) -> Board {
        let mut b = *self;
        let (from, to) = (mv.from(), mv.to());

        match mv.kind() {
            MoveKind::Normal => b.relocate(from, to),

            MoveKind::EnPassant => {
                b.relocate(from, to);
                b.set(en_passant_victim(from, to), None);
            }

            MoveKind::Castle(side) => {
                b.relocate(from, to);
                let row = from.row();
                b.relocate(
                    Square::at(row, side.rook_origin_col()),
                    Square::at(row, side.rook_target_col()),
                );
            }

            MoveKind::Promotion(choice) => {
                let pawn = b.piece_at(from);
                b.relocate(from, to);
                if let (Some(pawn), Some(choice)) = (pawn, choice) {
                    b.set(to, Some(Piece::new(pawn.color(), choice.to_piece_kind())));
                }
            }
        }

        b
    }
}

impl Position {
    /// Apply `mv` to board, castling rights and en-passant target without
    /// passing the turn.
    ///
    /// Used on its own when a promotion is left undecided: the turn passes
    /// only once [`Position::complete_promotion`] places the new piece.
    #[must_use]
    pub(crate) fn advance(&self, mv: Move) -> Position {
        let mut next = *self;
        let (from, to) = (mv.from(), mv.to());
        let moved = self.board().piece_at(from);

        *next.board_mut() = self.board().after_move(mv);

        // A king leaving its origin (castling included) or any piece leaving
        // or landing on a rook origin forfeits the matching rights.
        next.set_castling(self.castling().touch(from).touch(to));

        let double_step = moved.is_some_and(|p| p.kind() == PieceKind::Pawn)
            && from.row().abs_diff(to.row()) == 2;
        next.set_en_passant(double_step.then(|| Square::at((from.row() + to.row()) / 2, from.col())));

        next
    }

    /// Put `piece` on the pawn waiting at `sq` and pass the turn.
    #[must_use]
    pub(crate) fn complete_promotion(&self, sq: Square, piece: PromotionPiece) -> Position {
        let mut next = *self;
        let mover = self.side_to_move();
        next.board_mut().set(sq, Some(Piece::new(mover, piece.to_piece_kind())));
        next.set_side_to_move(mover.flip());
        next
    }

    /// Apply a move and return the resulting position. Copy-make: `self` is not modified.
    ///
    /// The move is assumed legal; callers that need rejection go through
    /// [`Game::apply_move`](crate::Game::apply_move). An undecided promotion
    /// is completed with a queen.
    #[must_use]
    pub fn make_move(&self, mv: Move) -> Position {
        match mv.kind() {
            MoveKind::Promotion(choice) => self
                .advance(mv)
                .complete_promotion(mv.to(), choice.unwrap_or(PromotionPiece::Queen)),
            _ => {
                let mut next = self.advance(mv);
                next.set_side_to_move(self.side_to_move().flip());
                next
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::castle_rights::{CastleRights, CastleSide};
    use crate::chess_move::{Move, PromotionPiece};
    use crate::color::Color;
    use crate::piece::Piece;
    use crate::position::Position;
    use crate::square::Square;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn castling_position(side_to_move: Color) -> Position {
        let board = Board::empty()
            .with_piece(sq("e1"), Piece::WHITE_KING)
            .with_piece(sq("a1"), Piece::WHITE_ROOK)
            .with_piece(sq("h1"), Piece::WHITE_ROOK)
            .with_piece(sq("e8"), Piece::BLACK_KING)
            .with_piece(sq("a8"), Piece::BLACK_ROOK)
            .with_piece(sq("h8"), Piece::BLACK_ROOK);
        Position::from_parts(board, side_to_move, CastleRights::ALL, None)
    }

    #[test]
    fn pawn_double_step_sets_en_passant() {
        let after = Position::starting().make_move(Move::normal(sq("e2"), sq("e4")));
        assert_eq!(after.board().piece_at(sq("e4")), Some(Piece::WHITE_PAWN));
        assert!(after.board().is_empty(sq("e2")));
        assert_eq!(after.en_passant(), Some(sq("e3")));
        assert_eq!(after.side_to_move(), Color::Black);
    }

    #[test]
    fn other_moves_clear_en_passant() {
        let after = Position::starting()
            .make_move(Move::normal(sq("e2"), sq("e4")))
            .make_move(Move::normal(sq("g8"), sq("f6")));
        assert_eq!(after.en_passant(), None);

        let single = Position::starting().make_move(Move::normal(sq("e2"), sq("e3")));
        assert_eq!(single.en_passant(), None);
    }

    #[test]
    fn capture_replaces_occupant() {
        let after = Position::starting()
            .make_move(Move::normal(sq("e2"), sq("e4")))
            .make_move(Move::normal(sq("d7"), sq("d5")))
            .make_move(Move::normal(sq("e4"), sq("d5")));
        assert_eq!(after.board().piece_at(sq("d5")), Some(Piece::WHITE_PAWN));
        assert_eq!(after.board().occupied().count(), 31);
    }

    #[test]
    fn en_passant_removes_bypassed_pawn() {
        let before = Position::starting()
            .make_move(Move::normal(sq("e2"), sq("e4")))
            .make_move(Move::normal(sq("a7"), sq("a6")))
            .make_move(Move::normal(sq("e4"), sq("e5")))
            .make_move(Move::normal(sq("d7"), sq("d5")));
        assert_eq!(before.en_passant(), Some(sq("d6")));

        let after = before.make_move(Move::en_passant(sq("e5"), sq("d6")));
        assert_eq!(after.board().piece_at(sq("d6")), Some(Piece::WHITE_PAWN));
        assert!(after.board().is_empty(sq("d5")));
        assert!(after.board().is_empty(sq("e5")));
        assert_eq!(after.en_passant(), None);
    }

    #[test]
    fn king_side_castle_moves_rook() {
        let after = castling_position(Color::White)
            .make_move(Move::castle(sq("e1"), sq("g1"), CastleSide::KingSide));
        let board = after.board();
        assert_eq!(board.piece_at(sq("g1")), Some(Piece::WHITE_KING));
        assert_eq!(board.piece_at(sq("f1")), Some(Piece::WHITE_ROOK));
        assert!(board.is_empty(sq("e1")));
        assert!(board.is_empty(sq("h1")));
        assert!(!after.castling().has(Color::White, CastleSide::KingSide));
        assert!(!after.castling().has(Color::White, CastleSide::QueenSide));
        assert!(after.castling().has(Color::Black, CastleSide::KingSide));
    }

    #[test]
    fn queen_side_castle_moves_rook() {
        let after = castling_position(Color::Black)
            .make_move(Move::castle(sq("e8"), sq("c8"), CastleSide::QueenSide));
        let board = after.board();
        assert_eq!(board.piece_at(sq("c8")), Some(Piece::BLACK_KING));
        assert_eq!(board.piece_at(sq("d8")), Some(Piece::BLACK_ROOK));
        assert!(board.is_empty(sq("a8")));
        assert!(board.is_empty(sq("b8")));
        assert_eq!(after.castling(), CastleRights::from_flags(true, true, false, false));
    }

    #[test]
    fn rook_move_revokes_one_side() {
        let after = castling_position(Color::White).make_move(Move::normal(sq("h1"), sq("h4")));
        assert!(!after.castling().has(Color::White, CastleSide::KingSide));
        assert!(after.castling().has(Color::White, CastleSide::QueenSide));
    }

    #[test]
    fn capturing_a_rook_revokes_its_right() {
        let after = castling_position(Color::White).make_move(Move::normal(sq("h1"), sq("h8")));
        assert!(!after.castling().has(Color::Black, CastleSide::KingSide));
        assert!(after.castling().has(Color::Black, CastleSide::QueenSide));
    }

    #[test]
    fn decided_promotion_places_piece() {
        let board = Board::empty()
            .with_piece(sq("e1"), Piece::WHITE_KING)
            .with_piece(sq("h8"), Piece::BLACK_KING)
            .with_piece(sq("a7"), Piece::WHITE_PAWN);
        let pos = Position::from_parts(board, Color::White, CastleRights::NONE, None);
        let after = pos.make_move(Move::promotion(sq("a7"), sq("a8"), Some(PromotionPiece::Knight)));
        assert_eq!(after.board().piece_at(sq("a8")), Some(Piece::WHITE_KNIGHT));
        assert!(after.board().is_empty(sq("a7")));
        assert_eq!(after.side_to_move(), Color::Black);
    }

    #[test]
    fn undecided_promotion_keeps_pawn_and_turn() {
        let board = Board::empty()
            .with_piece(sq("e1"), Piece::WHITE_KING)
            .with_piece(sq("h8"), Piece::BLACK_KING)
            .with_piece(sq("h2"), Piece::BLACK_PAWN);
        let pos = Position::from_parts(board, Color::Black, CastleRights::NONE, None);
        let mv = Move::promotion(sq("h2"), sq("h1"), None);

        let pending = pos.advance(mv);
        assert_eq!(pending.board().piece_at(sq("h1")), Some(Piece::BLACK_PAWN));
        assert_eq!(pending.side_to_move(), Color::Black);

        let done = pending.complete_promotion(sq("h1"), PromotionPiece::Rook);
        assert_eq!(done.board().piece_at(sq("h1")), Some(Piece::BLACK_ROOK));
        assert_eq!(done.side_to_move(), Color::White);
    }

    #[test]
    fn make_move_is_deterministic() {
        let pos = Position::starting();
        let mv = Move::normal(sq("g1"), sq("f3"));
        assert_eq!(pos.make_move(mv), pos.make_move(mv));
        // The source position is untouched.
        assert_eq!(pos, Position::starting());
    }
}
