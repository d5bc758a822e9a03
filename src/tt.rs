//! Transposition table for memoizing solved positions.
//!
//! The table maps a board's canonical encoding (see
//! [`Board::code`](crate::board::Board::code)) to the result the solver
//! proved for it. A position's outcome depends only on its stone
//! configuration, not on the path that reached it, so a result stored
//! under one line of play is valid for every transposition into the
//! same stones.
//!
//! Entries are never evicted. A table belongs to one solver, and the
//! protocol layer builds a fresh solver per `solve` command, so growth
//! is bounded by the distinct positions a single search session visits.

use std::collections::HashMap;

use crate::solver::SolveResult;

/// Memoization store for the exact solver.
#[derive(Debug, Default)]
pub struct TranspositionTable {
    table: HashMap<String, SolveResult>,
}

impl TranspositionTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the result stored for an encoding. Pure read.
    pub fn lookup(&self, code: &str) -> Option<&SolveResult> {
        self.table.get(code)
    }

    /// Insert or overwrite the entry for an encoding. The last write
    /// for a given key wins; there is no merge policy.
    pub fn store(&mut self, code: String, result: SolveResult) {
        self.table.insert(code, result);
    }

    /// Number of stored positions.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
