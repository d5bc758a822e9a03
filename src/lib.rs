//! NoGo-Rust: an exact solver and GTP engine for NoGo.
//!
//! NoGo is the Go variant in which stones are never captured: any
//! placement that would capture an opposing group, or leave the
//! placer's own group without liberties, is illegal, and the first
//! player with no legal placement loses. That makes small boards
//! exactly solvable, and this crate ships a memoized negamax solver
//! that proves positions outright instead of estimating them.
//!
//! ## Modules
//!
//! - [`constants`] - Board limits and session defaults
//! - [`board`] - Board state, NoGo legality, coordinate conversion
//! - [`tt`] - Transposition table of solved positions
//! - [`solver`] - Memoized boolean negamax proving win or loss
//! - [`policy`] - Random move generation for casual play
//! - [`gtp`] - Go Text Protocol front end
//!
//! ## Example
//!
//! ```
//! use nogo_rust::board::Board;
//! use nogo_rust::solver::Solver;
//!
//! // On a single point the only placement is suicide, so the first
//! // player has no legal move and loses.
//! let board = Board::new(1);
//! let mut solver = Solver::new();
//! let result = solver.solve(&board).unwrap();
//! assert!(!result.win);
//! assert_eq!(result.reply, "resign");
//! ```

pub mod board;
pub mod constants;
pub mod gtp;
pub mod policy;
pub mod solver;
pub mod tt;
