//! NoGo board representation and move execution.
//!
//! This module provides the core game logic for NoGo:
//! - Board state as a flat vector of cells, sized at runtime
//! - Legality checking under NoGo rules (no captures, no suicide)
//! - Flood-fill liberty counting for stone groups
//! - GTP coordinate parsing and formatting
//!
//! NoGo differs from Go in exactly one rule: stones are never removed.
//! A placement that would capture an opposing group is illegal, as is a
//! placement that leaves the placer's own group without liberties. The
//! player to move who has no legal placement loses the game.

use std::fmt;

use crate::constants::{COLUMN_LETTERS, MAX_SIZE};

/// A point on the board, as an index into the flat cell vector.
///
/// Index 0 is column A, row 1 (the bottom-left corner); indices ascend
/// left to right, then bottom to top.
pub type Point = usize;

/// Stone color. Black moves first on a fresh board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// The other color.
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// One-letter GTP color code (`b` / `w`).
    pub fn letter(self) -> char {
        match self {
            Color::Black => 'b',
            Color::White => 'w',
        }
    }

    /// Full GTP color name (`black` / `white`).
    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::White => "white",
        }
    }

    /// Board glyph used in text renderings and encodings (`X` / `O`).
    pub fn glyph(self) -> char {
        match self {
            Color::Black => 'X',
            Color::White => 'O',
        }
    }
}

/// Result of attempting to play an illegal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Point index is outside the board
    OffBoard,
    /// Point is not empty
    Occupied,
    /// Placement would capture an opposing group (forbidden in NoGo)
    Capture,
    /// Placement would leave the placer's own group without liberties
    Suicide,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OffBoard => write!(f, "illegal move: point off the board"),
            MoveError::Occupied => write!(f, "illegal move: point not empty"),
            MoveError::Capture => write!(f, "illegal move: capture is forbidden"),
            MoveError::Suicide => write!(f, "illegal move: suicide"),
        }
    }
}

impl std::error::Error for MoveError {}

/// A NoGo board.
///
/// Cells are stored in ascending [`Point`] order. `Clone` produces a
/// fully independent copy, which is how search branches and legality
/// probes get a board they may freely mutate.
#[derive(Clone)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Color>>,
    current: Color,
    last: Option<Point>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_SIZE)
    }
}

impl Board {
    /// Create an empty board. `size` must be in `1..=MAX_SIZE`; the GTP
    /// layer validates sizes before they reach here.
    pub fn new(size: usize) -> Self {
        debug_assert!((1..=MAX_SIZE).contains(&size), "unsupported board size {size}");
        Self {
            size,
            cells: vec![None; size * size],
            current: Color::Black,
            last: None,
        }
    }

    /// Reset to an empty board of the given size.
    pub fn reset(&mut self, size: usize) {
        *self = Board::new(size);
    }

    /// Board side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> Color {
        self.current
    }

    /// The most recently played point, if any move has been made.
    pub fn last_move(&self) -> Option<Point> {
        self.last
    }

    /// Stone at a point, or `None` for an empty or out-of-range point.
    pub fn stone_at(&self, pt: Point) -> Option<Color> {
        self.cells.get(pt).copied().flatten()
    }

    /// The 2-4 orthogonal neighbors of a point.
    fn neighbors(&self, pt: Point) -> impl Iterator<Item = Point> + '_ {
        let s = self.size;
        let col = pt % s;
        let mut v = Vec::with_capacity(4);
        if col > 0 {
            v.push(pt - 1);
        }
        if col + 1 < s {
            v.push(pt + 1);
        }
        if pt >= s {
            v.push(pt - s);
        }
        if pt + s < s * s {
            v.push(pt + s);
        }
        v.into_iter()
    }

    /// Count the liberties (empty adjacent points) of the group at `start`.
    ///
    /// Uses flood-fill over same-colored stones, deduplicating shared
    /// liberties. Returns 0 for an empty point.
    fn group_liberties(&self, start: Point) -> usize {
        let Some(color) = self.cells[start] else {
            return 0;
        };
        let mut stack = vec![start];
        let mut visited = vec![false; self.cells.len()];
        let mut liberty_visited = vec![false; self.cells.len()];
        let mut liberties = 0;

        while let Some(pt) = stack.pop() {
            if visited[pt] {
                continue;
            }
            visited[pt] = true;
            for n in self.neighbors(pt) {
                match self.cells[n] {
                    None => {
                        if !liberty_visited[n] {
                            liberty_visited[n] = true;
                            liberties += 1;
                        }
                    }
                    Some(c) if c == color && !visited[n] => stack.push(n),
                    _ => {}
                }
            }
        }
        liberties
    }

    /// Play a stone of `color` at `pt`.
    ///
    /// On success the stone is placed, the turn passes to the opponent
    /// of `color`, and the last-move marker is updated. On any rule
    /// violation the board is left exactly as it was.
    ///
    /// # Errors
    /// - [`MoveError::OffBoard`] - point index outside the board
    /// - [`MoveError::Occupied`] - point already carries a stone
    /// - [`MoveError::Capture`] - an adjacent opposing group would lose
    ///   its last liberty
    /// - [`MoveError::Suicide`] - the placed stone's own group would
    ///   have no liberties
    pub fn play(&mut self, pt: Point, color: Color) -> Result<(), MoveError> {
        if pt >= self.cells.len() {
            return Err(MoveError::OffBoard);
        }
        if self.cells[pt].is_some() {
            return Err(MoveError::Occupied);
        }

        self.cells[pt] = Some(color);

        let captures = self
            .neighbors(pt)
            .any(|n| self.cells[n] == Some(color.opponent()) && self.group_liberties(n) == 0);
        if captures {
            self.cells[pt] = None;
            return Err(MoveError::Capture);
        }

        if self.group_liberties(pt) == 0 {
            self.cells[pt] = None;
            return Err(MoveError::Suicide);
        }

        self.current = color.opponent();
        self.last = Some(pt);
        Ok(())
    }

    /// Check whether `color` may play at `pt`, without touching the board.
    /// Probes a scratch copy.
    pub fn is_legal(&self, pt: Point, color: Color) -> bool {
        self.clone().play(pt, color).is_ok()
    }

    /// All empty points, in ascending index order.
    pub fn empty_points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.cells.len()).filter(|&pt| self.cells[pt].is_none())
    }

    /// All legal placements for `color`, in ascending index order.
    pub fn legal_moves(&self, color: Color) -> Vec<Point> {
        self.empty_points()
            .filter(|&pt| self.is_legal(pt, color))
            .collect()
    }

    /// Canonical encoding of the stone configuration: one glyph per cell
    /// in ascending point order.
    ///
    /// The encoding depends only on cell contents, never on move history
    /// or whose turn it is, so move orders that transpose into the same
    /// stones encode identically. In a capture-free game the stone count
    /// fixes the turn parity, which is what makes a contents-only key
    /// sound for memoization within one search.
    pub fn code(&self) -> String {
        self.cells
            .iter()
            .map(|c| match c {
                Some(color) => color.glyph(),
                None => '.',
            })
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (1..=self.size).rev() {
            for col in 1..=self.size {
                let pt = (row - 1) * self.size + (col - 1);
                let glyph = match self.cells[pt] {
                    Some(c) => c.glyph(),
                    None => '.',
                };
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Convert a point to its GTP coordinate string, e.g. `C4`.
///
/// Columns use `A..H,J..Z` (the letter `I` is skipped by convention)
/// and rows are 1-based from the bottom. Downstream tooling parses
/// these strings, so the mapping must not drift.
pub fn format_point(pt: Point, size: usize) -> String {
    let row = pt / size + 1;
    let col = pt % size + 1;
    format!("{}{}", COLUMN_LETTERS[col - 1] as char, row)
}

/// Parse a GTP coordinate string such as `C4` or `c4` into a point.
///
/// Returns `None` for anything that is not a coordinate on a board of
/// the given size, including the conventionally unused column `I`.
pub fn parse_point(s: &str, size: usize) -> Option<Point> {
    let mut chars = s.trim().chars();
    let col_char = chars.next()?.to_ascii_uppercase();
    if !col_char.is_ascii_uppercase() || col_char == 'I' {
        return None;
    }
    let mut col = (col_char as u8 - b'A' + 1) as usize;
    if col_char > 'I' {
        col -= 1;
    }
    let row: usize = chars.as_str().parse().ok()?;
    if row == 0 || row > size || col > size {
        return None;
    }
    Some((row - 1) * size + (col - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(board: &Board, coord: &str) -> Point {
        parse_point(coord, board.size()).unwrap()
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(7);
        assert_eq!(board.size(), 7);
        assert_eq!(board.current_player(), Color::Black);
        assert_eq!(board.empty_points().count(), 49);
        assert_eq!(board.last_move(), None);
    }

    #[test]
    fn test_play_places_stone_and_alternates() {
        let mut board = Board::new(5);
        let c3 = pt(&board, "C3");
        board.play(c3, Color::Black).unwrap();
        assert_eq!(board.stone_at(c3), Some(Color::Black));
        assert_eq!(board.current_player(), Color::White);
        assert_eq!(board.last_move(), Some(c3));
    }

    #[test]
    fn test_play_occupied() {
        let mut board = Board::new(5);
        let c3 = pt(&board, "C3");
        board.play(c3, Color::Black).unwrap();
        assert_eq!(board.play(c3, Color::White), Err(MoveError::Occupied));
    }

    #[test]
    fn test_play_off_board() {
        let mut board = Board::new(3);
        assert_eq!(board.play(9, Color::Black), Err(MoveError::OffBoard));
    }

    #[test]
    fn test_single_point_board_is_suicide() {
        let mut board = Board::new(1);
        assert_eq!(board.play(0, Color::Black), Err(MoveError::Suicide));
        // Nothing changed: the point is still empty and it is still
        // Black's turn.
        assert_eq!(board.current_player(), Color::Black);
        assert_eq!(board.empty_points().count(), 1);
    }

    #[test]
    fn test_suicide_in_corner() {
        let mut board = Board::new(5);
        board.play(pt(&board, "A2"), Color::Black).unwrap();
        board.play(pt(&board, "B1"), Color::Black).unwrap();
        let a1 = pt(&board, "A1");
        assert_eq!(board.play(a1, Color::White), Err(MoveError::Suicide));
        assert_eq!(board.stone_at(a1), None);
    }

    #[test]
    fn test_capture_is_forbidden() {
        let mut board = Board::new(3);
        board.play(pt(&board, "A1"), Color::White).unwrap();
        board.play(pt(&board, "B1"), Color::Black).unwrap();
        // A2 is White's last liberty; filling it would capture, which
        // NoGo forbids.
        let a2 = pt(&board, "A2");
        assert_eq!(board.play(a2, Color::Black), Err(MoveError::Capture));
        assert_eq!(board.stone_at(a2), None);
    }

    #[test]
    fn test_group_liberties_shared_are_counted_once() {
        let mut board = Board::new(5);
        board.play(pt(&board, "B2"), Color::Black).unwrap();
        board.play(pt(&board, "C2"), Color::Black).unwrap();
        // Two connected stones in open space: 6 distinct liberties.
        assert_eq!(board.group_liberties(pt(&board, "B2")), 6);
    }

    #[test]
    fn test_is_legal_does_not_mutate() {
        let mut board = Board::new(3);
        board.play(pt(&board, "B2"), Color::Black).unwrap();
        let before = board.code();
        let a1 = pt(&board, "A1");
        assert!(board.is_legal(a1, Color::White));
        assert!(!board.is_legal(pt(&board, "B2"), Color::White));
        assert_eq!(board.code(), before);
        assert_eq!(board.current_player(), Color::White);
    }

    #[test]
    fn test_empty_points_ascending() {
        let mut board = Board::new(2);
        board.play(pt(&board, "B1"), Color::Black).unwrap();
        let empties: Vec<Point> = board.empty_points().collect();
        assert_eq!(empties, vec![0, 2, 3]); // A1, A2, B2
    }

    #[test]
    fn test_no_legal_moves_when_boxed_in() {
        // A1=B B1=W A2=B leaves only B2, illegal for White both as
        // suicide and as a capture of the black group.
        let mut board = Board::new(2);
        board.play(pt(&board, "A1"), Color::Black).unwrap();
        board.play(pt(&board, "B1"), Color::White).unwrap();
        board.play(pt(&board, "A2"), Color::Black).unwrap();
        assert_eq!(board.current_player(), Color::White);
        assert!(board.legal_moves(Color::White).is_empty());
    }

    #[test]
    fn test_code_ignores_move_order() {
        let mut a = Board::new(3);
        a.play(pt(&a, "A1"), Color::Black).unwrap();
        a.play(pt(&a, "C3"), Color::White).unwrap();
        a.play(pt(&a, "B1"), Color::Black).unwrap();

        let mut b = Board::new(3);
        b.play(pt(&b, "B1"), Color::Black).unwrap();
        b.play(pt(&b, "C3"), Color::White).unwrap();
        b.play(pt(&b, "A1"), Color::Black).unwrap();

        assert_eq!(a.code(), b.code());

        let mut c = Board::new(3);
        c.play(pt(&c, "A1"), Color::Black).unwrap();
        assert_ne!(a.code(), c.code());
    }

    #[test]
    fn test_display_renders_top_row_first() {
        let mut board = Board::new(2);
        board.play(pt(&board, "A1"), Color::Black).unwrap();
        board.play(pt(&board, "B2"), Color::White).unwrap();
        assert_eq!(board.to_string(), ".O\nX.\n");
    }

    #[test]
    fn test_reset_clears_board() {
        let mut board = Board::new(3);
        board.play(pt(&board, "B2"), Color::Black).unwrap();
        board.reset(5);
        assert_eq!(board.size(), 5);
        assert_eq!(board.current_player(), Color::Black);
        assert_eq!(board.empty_points().count(), 25);
    }

    #[test]
    fn test_format_point_skips_i() {
        // Column 9 is J, not I.
        assert_eq!(format_point(8, 9), "J1");
        assert_eq!(format_point(0, 9), "A1");
        assert_eq!(format_point(80, 9), "J9");
    }

    #[test]
    fn test_parse_point_rejects_bad_input() {
        assert_eq!(parse_point("I5", 9), None);
        assert_eq!(parse_point("K1", 9), None); // column 10 on a 9x9
        assert_eq!(parse_point("A0", 9), None);
        assert_eq!(parse_point("A10", 9), None);
        assert_eq!(parse_point("", 9), None);
        assert_eq!(parse_point("4C", 9), None);
        assert_eq!(parse_point("pass", 9), None);
    }

    #[test]
    fn test_parse_format_roundtrip() {
        for size in [1, 2, 5, 9, 13, 19, 25] {
            let board = Board::new(size);
            for p in board.empty_points() {
                let s = format_point(p, size);
                assert_eq!(parse_point(&s, size), Some(p), "failed roundtrip for {s}");
                assert_eq!(parse_point(&s.to_ascii_lowercase(), size), Some(p));
            }
        }
    }
}
