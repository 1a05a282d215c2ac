//! Perft (performance test) for move generation correctness verification.

use crate::chess_move::{Move, MoveKind, PromotionPiece};
use crate::movegen::legal_moves;
use crate::position::Position;

/// Expand an undecided promotion into its four concrete choices.
fn for_each_choice(mv: Move, mut f: impl FnMut(Move)) {
    match mv.kind() {
        MoveKind::Promotion(None) => {
            for piece in PromotionPiece::ALL {
                f(mv.with_promotion(Some(piece)));
            }
        }
        _ => f(mv),
    }
}

/// Count the number of leaf nodes at the given depth.
///
/// Depth 0 returns 1 (the current position). Each promotion counts once per
/// piece choice, matching published perft tables.
pub fn perft(position: &Position, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = legal_moves(position, position.side_to_move());
    let mut nodes = 0u64;
    for &mv in &moves {
        for_each_choice(mv, |choice| {
            nodes += if depth == 1 {
                1
            } else {
                perft(&position.make_move(choice), depth - 1)
            };
        });
    }
    nodes
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns a vector of `(coordinate_move, node_count)` pairs sorted alphabetically.
pub fn divide(position: &Position, depth: usize) -> Vec<(String, u64)> {
    let moves = legal_moves(position, position.side_to_move());
    let mut results = Vec::with_capacity(moves.len());
    for &mv in &moves {
        for_each_choice(mv, |choice| {
            let count = if depth <= 1 {
                1
            } else {
                perft(&position.make_move(choice), depth - 1)
            };
            results.push((choice.to_string(), count));
        });
    }
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
