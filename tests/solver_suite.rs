//! Solver regression suite
//!
//! Each numbered scenario is a small position whose game-theoretic
//! outcome is known exactly, checked against the solver's full reply
//! string. Witness moves are pinned where the first winning candidate
//! in ascending point order is forced, so these tests also lock in the
//! enumeration order.

use std::time::{Duration, Instant};

use nogo_rust::board::{Board, parse_point};
use nogo_rust::solver::{SearchTimeout, Solver};

// =============================================================================
// Helper functions
// =============================================================================

/// Build a board by playing the given coordinates in alternating order,
/// Black first.
fn setpos(size: usize, moves: &[&str]) -> Board {
    let mut board = Board::new(size);
    for mv in moves {
        let pt = parse_point(mv, size).unwrap_or_else(|| panic!("bad coordinate {mv} in setpos"));
        let color = board.current_player();
        if let Err(err) = board.play(pt, color) {
            panic!("illegal move {mv} in setpos: {err}");
        }
    }
    board
}

/// Solve `board` with a fresh solver and return the reply string.
fn solve_reply(board: &Board) -> String {
    let mut solver = Solver::new();
    solver.solve(board).expect("search has no deadline").reply
}

// =============================================================================
// Scenario 10: 1x1 board - the lone point is suicide
// =============================================================================

#[test]
fn test_10_single_point_board() {
    let board = Board::new(1);
    assert_eq!(solve_reply(&board), "resign");
}

// =============================================================================
// Scenario 20: empty 2x2 - first player wins, A1 found first
// =============================================================================

#[test]
fn test_20_empty_two_by_two() {
    let board = Board::new(2);
    assert_eq!(solve_reply(&board), "b a1");
}

// =============================================================================
// Scenario 30: 2x2 after Black A1 - every White reply loses
// =============================================================================

#[test]
fn test_30_two_by_two_after_first_move() {
    let board = setpos(2, &["A1"]);
    assert_eq!(solve_reply(&board), "resign");
}

// =============================================================================
// Scenario 40: Black connects underneath and wins with B1
// =============================================================================

#[test]
fn test_40_black_wins_with_b1() {
    // A1=X B2=O, Black to move. B1 wins and is enumerated before A2,
    // so it must be the reported witness.
    let board = setpos(2, &["A1", "B2"]);
    assert_eq!(solve_reply(&board), "b b1");
}

// =============================================================================
// Scenario 50: continuation of 40 - White is left without a move
// =============================================================================

#[test]
fn test_50_white_cannot_answer() {
    let board = setpos(2, &["A1", "B2", "B1"]);
    assert_eq!(solve_reply(&board), "resign");
}

// =============================================================================
// Scenario 60: boxed-in White - the only empty point captures
// =============================================================================

#[test]
fn test_60_boxed_in_white_resigns() {
    let board = setpos(2, &["A1", "B1", "A2"]);
    assert_eq!(solve_reply(&board), "resign");
}

// =============================================================================
// Scenario 70: transpositions share one table entry
// =============================================================================

#[test]
fn test_70_transposition_is_answered_from_the_table() {
    // Two move orders reaching the same four stones with Black to move.
    let first = setpos(3, &["A1", "C1", "B2", "C3"]);
    let second = setpos(3, &["B2", "C3", "A1", "C1"]);
    assert_eq!(first.code(), second.code());

    let mut solver = Solver::new();
    let a = solver.solve(&first).unwrap();
    let expanded = solver.nodes();

    let b = solver.solve(&second).unwrap();
    assert_eq!(a, b);
    // The second board is the same position, so nothing new is expanded.
    assert_eq!(solver.nodes(), expanded);
}

// =============================================================================
// Scenario 80: determinism across independent solvers
// =============================================================================

#[test]
fn test_80_independent_solvers_agree() {
    let board = setpos(3, &["B2", "A1", "C2"]);
    let a = Solver::new().solve(&board).unwrap();
    let b = Solver::new().solve(&board).unwrap();
    assert_eq!(a, b);
}

// =============================================================================
// Scenario 90: a win witness is playable on the original board
// =============================================================================

#[test]
fn test_90_witness_is_playable() {
    let board = Board::new(3);
    let result = Solver::new().solve(&board).unwrap();

    if result.win {
        let coord = result
            .reply
            .strip_prefix("b ")
            .expect("witness carries the mover's letter");
        let pt = parse_point(coord, board.size()).expect("witness coordinate parses");
        assert!(board.is_legal(pt, board.current_player()));
    } else {
        assert_eq!(result.reply, "resign");
    }
}

// =============================================================================
// Scenario 100: an expired deadline aborts without poisoning the table
// =============================================================================

#[test]
fn test_100_expired_deadline() {
    let board = Board::new(4);
    let mut solver = Solver::with_deadline(Instant::now() - Duration::from_millis(1));

    assert_eq!(solver.solve(&board), Err(SearchTimeout));
    assert_eq!(solver.table_len(), 0);

    // With a real budget the search finishes.
    let mut fresh = Solver::with_deadline(Instant::now() + Duration::from_secs(60));
    let result = fresh.solve(&Board::new(2)).unwrap();
    assert_eq!(result.reply, "b a1");
}
