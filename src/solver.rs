//! Exact solver: memoized boolean negamax over NoGo positions.
//!
//! The solver decides, for the player to move on a given board, whether
//! that player can force a win under perfect play, and produces the
//! first winning move it finds. There is no heuristic evaluation
//! anywhere: every result is proved by exhausting the game tree.
//!
//! The search works on independent copies. Each candidate placement is
//! applied to a clone of the parent board, so every sibling is judged
//! from the same pre-move position and the caller's board is never
//! touched. Turn alternation comes from the board itself: after a
//! placement the clone's current player is the opponent, and a win for
//! the side to move in the child means the candidate loses for the side
//! to move in the parent.
//!
//! Results are memoized in a [`TranspositionTable`] keyed by the
//! canonical stone encoding. Stones are never removed in NoGo, so the
//! stone count pins the turn parity and a contents-only key is exact.
//!
//! Termination is structural: every ply fills one empty cell, so the
//! recursion is bounded by the number of empty cells at the root.

use std::fmt;
use std::time::Instant;

use crate::board::{Board, Color, Point, format_point};
use crate::tt::TranspositionTable;

/// Outcome proved for a position, as stored in the table and reported
/// over the protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveResult {
    /// True when the player to move at the solved position forces a win.
    pub win: bool,
    /// Protocol reply body: `"<color letter> <coordinate>"` in lower
    /// case (e.g. `b c4`) for a win, the literal `resign` for a loss.
    /// Only meaningful in combination with `win`.
    pub reply: String,
}

impl SolveResult {
    /// Win for `mover`, achieved by playing `pt` first.
    pub fn win(mover: Color, pt: Point, size: usize) -> Self {
        let coord = format_point(pt, size).to_ascii_lowercase();
        Self {
            win: true,
            reply: format!("{} {}", mover.letter(), coord),
        }
    }

    /// Loss for the mover: no placement avoids defeat.
    pub fn loss() -> Self {
        Self {
            win: false,
            reply: "resign".to_string(),
        }
    }
}

/// The soft deadline expired before the search finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTimeout;

impl fmt::Display for SearchTimeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "search aborted: time limit exceeded")
    }
}

impl std::error::Error for SearchTimeout {}

/// Exact solver for the player to move.
///
/// A solver owns the transposition table for one search session. The
/// protocol layer builds a fresh solver per `solve` command, so results
/// never leak between sessions; callers that keep a solver around reuse
/// its table across invocations instead.
pub struct Solver {
    table: TranspositionTable,
    deadline: Option<Instant>,
    nodes: u64,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a solver with no deadline. The search runs to completion
    /// regardless of how long it takes.
    pub fn new() -> Self {
        Self {
            table: TranspositionTable::new(),
            deadline: None,
            nodes: 0,
        }
    }

    /// Create a solver that aborts with [`SearchTimeout`] once
    /// `deadline` has passed. The deadline is consulted between
    /// candidate evaluations, so the abort is prompt but not exact.
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            table: TranspositionTable::new(),
            deadline: Some(deadline),
            nodes: 0,
        }
    }

    /// Positions expanded so far (transposition-table hits not included).
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Distinct positions currently memoized.
    pub fn table_len(&self) -> usize {
        self.table.len()
    }

    /// Decide the position for the player to move on `board`.
    ///
    /// Returns the proved result, or [`SearchTimeout`] if the deadline
    /// passed first. The caller's board is never modified; every branch
    /// is explored on its own copy. Nothing is stored for a position
    /// the search had to abandon, so a timed-out solver's table stays
    /// sound for reuse.
    pub fn solve(&mut self, board: &Board) -> Result<SolveResult, SearchTimeout> {
        let code = board.code();
        if let Some(hit) = self.table.lookup(&code) {
            return Ok(hit.clone());
        }
        if self.deadline.is_some_and(|d| Instant::now() >= d) {
            return Err(SearchTimeout);
        }
        self.nodes += 1;

        let mover = board.current_player();
        for pt in board.empty_points() {
            let mut child = board.clone();
            if child.play(pt, mover).is_err() {
                continue;
            }
            let answer = self.solve(&child)?;
            if !answer.win {
                // The opponent, to move after `pt`, has no winning
                // line; the first such candidate decides the parent.
                let result = SolveResult::win(mover, pt, board.size());
                self.table.store(code, result.clone());
                return Ok(result);
            }
        }

        // Every candidate hands the opponent a win, or no placement was
        // legal at all. Either way the mover loses.
        let result = SolveResult::loss();
        self.table.store(code, result.clone());
        Ok(result)
    }
}
