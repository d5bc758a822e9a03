//! Move generation for casual play.
//!
//! The exact solver proves positions; this module serves the `genmove`
//! path, which only needs a playable move right away. The one policy
//! implemented here draws uniformly from the legal placements.

use crate::board::{Board, Color, Point};

/// Pick a uniformly random legal placement for `color`.
///
/// Returns `None` when the player has no legal move left, which under
/// these rules means the game is over and `color` has lost.
pub fn random_move(board: &Board, color: Color, rng: &mut fastrand::Rng) -> Option<Point> {
    let candidates = board.legal_moves(color);
    if candidates.is_empty() {
        return None;
    }
    Some(candidates[rng.usize(..candidates.len())])
}
