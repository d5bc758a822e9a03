//! Go Text Protocol (GTP) front end.
//!
//! GTP is a line-oriented text protocol for driving board-game engines.
//! This module implements the command surface expected by graphical
//! clients such as GoGui, plus the solver entry point: a client sends
//! one command per line and receives a single framed response,
//! `= <body>` on success or `? <body>` on failure, each terminated by a
//! blank line.
//!
//! ## Supported commands
//!
//! - `name`, `version`, `protocol_version` - Engine identification
//! - `list_commands`, `known_command <cmd>` - Command discovery
//! - `boardsize <n>`, `clear_board`, `komi <value>` - Game setup
//! - `play <color> <vertex>` - Place a stone
//! - `genmove <color>` - Generate and play a random legal move
//! - `legal_moves <color>`, `showboard` - Inspection
//! - `timelimit <seconds>` - Search budget for `solve`
//! - `solve` - Prove the current position for the player to move
//! - `gogui-*` - Rules surface for the GoGui client
//! - `quit` - Exit the loop
//!
//! ## Example
//!
//! ```ignore
//! use nogo_rust::gtp::GtpEngine;
//! let mut engine = GtpEngine::new();
//! engine.run().unwrap();
//! ```

use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

use tracing::debug;

use crate::board::{Board, Color, format_point, parse_point};
use crate::constants::{
    DEFAULT_KOMI, DEFAULT_SIZE, DEFAULT_TIME_LIMIT, MAX_SIZE, MAX_TIME_LIMIT, MIN_TIME_LIMIT,
};
use crate::policy;
use crate::solver::{SearchTimeout, Solver};

/// The list of known GTP commands.
const KNOWN_COMMANDS: &[&str] = &[
    "boardsize",
    "clear_board",
    "genmove",
    "gogui-analyze_commands",
    "gogui-rules_board",
    "gogui-rules_board_size",
    "gogui-rules_final_result",
    "gogui-rules_game_id",
    "gogui-rules_legal_moves",
    "gogui-rules_side_to_move",
    "known_command",
    "komi",
    "legal_moves",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "showboard",
    "solve",
    "timelimit",
    "version",
];

/// Required argument counts, checked before dispatch. A mismatch is
/// answered with the usage string instead of running the command.
const ARG_USAGE: &[(&str, usize, &str)] = &[
    ("boardsize", 1, "Usage: boardsize INT"),
    ("genmove", 1, "Usage: genmove {w,b}"),
    ("known_command", 1, "Usage: known_command CMD_NAME"),
    ("komi", 1, "Usage: komi FLOAT"),
    ("legal_moves", 1, "Usage: legal_moves {w,b}"),
    ("play", 2, "Usage: play {b,w} MOVE"),
    ("timelimit", 1, "Usage: timelimit INT"),
];

/// Analyze configuration handed to GoGui so it can offer the rules
/// commands in its menus.
const ANALYZE_COMMANDS: &str = "pstring/Legal Moves For ToPlay/gogui-rules_legal_moves\n\
    pstring/Side to Play/gogui-rules_side_to_move\n\
    pstring/Final Result/gogui-rules_final_result\n\
    pstring/Board Size/gogui-rules_board_size\n\
    pstring/Rules GameID/gogui-rules_game_id\n\
    pstring/Show Board/gogui-rules_board\n";

/// GTP engine state.
pub struct GtpEngine {
    /// Live game board shared by every command.
    board: Board,
    /// Komi kept for clients that set it. The game has no draws, so it
    /// is informational only.
    komi: f32,
    /// Soft search budget for `solve`, in seconds.
    time_limit: u64,
    /// Move source for `genmove`.
    rng: fastrand::Rng,
}

impl Default for GtpEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GtpEngine {
    /// Create a new GTP engine with default settings.
    pub fn new() -> Self {
        Self::with_settings(DEFAULT_SIZE, DEFAULT_KOMI, DEFAULT_TIME_LIMIT)
    }

    /// Create a new GTP engine with the given board size, komi, and
    /// solve budget in seconds.
    pub fn with_settings(size: usize, komi: f32, time_limit: u64) -> Self {
        Self {
            board: Board::new(size),
            komi,
            time_limit,
            rng: fastrand::Rng::new(),
        }
    }

    /// Run the GTP command loop, reading from stdin and writing to stdout.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        for line in stdin.lock().lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            // Regression suites prefix commands with a numeric id;
            // strip it and never echo it back.
            let parts: Vec<&str> = strip_id(line).split_whitespace().collect();
            let Some((&name, args)) = parts.split_first() else {
                continue;
            };
            let command = name.to_lowercase();
            debug!(command = %command, ?args, "Dispatching");

            let (success, body) = self.execute(&command, args);
            let prefix = if success { '=' } else { '?' };
            write!(stdout, "{prefix} {body}\n\n")?;
            stdout.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Execute a GTP command and return (success, response body).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        if let Some(usage) = arg_mismatch(command, args.len()) {
            return (false, usage.to_string());
        }

        match command {
            "name" => (true, "nogo-rust".to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "2".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join(" ")),

            "known_command" => {
                let known = KNOWN_COMMANDS.contains(&args[0].to_lowercase().as_str());
                (true, if known { "true" } else { "false" }.to_string())
            }

            "quit" => (true, String::new()),

            "boardsize" => match args[0].parse::<usize>() {
                Ok(size) if (1..=MAX_SIZE).contains(&size) => {
                    self.board.reset(size);
                    (true, String::new())
                }
                Ok(_) => (false, "unacceptable size".to_string()),
                Err(_) => (false, "invalid size".to_string()),
            },

            "clear_board" => {
                self.board.reset(self.board.size());
                (true, String::new())
            }

            "komi" => match args[0].parse::<f32>() {
                Ok(komi) => {
                    self.komi = komi;
                    (true, String::new())
                }
                Err(_) => (false, "invalid komi".to_string()),
            },

            "timelimit" => match args[0].parse::<u64>() {
                Ok(limit) if (MIN_TIME_LIMIT..=MAX_TIME_LIMIT).contains(&limit) => {
                    self.time_limit = limit;
                    (true, String::new())
                }
                _ => (
                    false,
                    format!("time limit must be an integer between {MIN_TIME_LIMIT} and {MAX_TIME_LIMIT}"),
                ),
            },

            "showboard" => (true, format!("\n{}", self.board)),

            "play" => {
                let Some(color) = parse_color(args[0]) else {
                    return (false, format!("invalid color: {}", args[0]));
                };
                let Some(pt) = parse_point(args[1], self.board.size()) else {
                    return (false, format!("invalid coordinate: {}", args[1]));
                };
                match self.board.play(pt, color) {
                    Ok(()) => {
                        debug!(color = %color.letter(), vertex = %args[1], "Played");
                        (true, String::new())
                    }
                    Err(err) => {
                        debug!(vertex = %args[1], reason = %err, "Rejected move");
                        (false, "illegal move".to_string())
                    }
                }
            }

            "genmove" => {
                let Some(color) = parse_color(args[0]) else {
                    return (false, format!("invalid color: {}", args[0]));
                };
                match policy::random_move(&self.board, color, &mut self.rng) {
                    Some(pt) => {
                        let coord = format_point(pt, self.board.size());
                        if self.board.play(pt, color).is_err() {
                            return (false, format!("illegal move: {coord}"));
                        }
                        (true, coord)
                    }
                    None => (true, "resign".to_string()),
                }
            }

            "legal_moves" => {
                let Some(color) = parse_color(args[0]) else {
                    return (false, format!("invalid color: {}", args[0]));
                };
                (true, self.sorted_moves(color))
            }

            "solve" => {
                let deadline = Instant::now() + Duration::from_secs(self.time_limit);
                let mut solver = Solver::with_deadline(deadline);
                match solver.solve(&self.board) {
                    Ok(result) => {
                        debug!(
                            nodes = solver.nodes(),
                            memoized = solver.table_len(),
                            win = result.win,
                            "Search finished"
                        );
                        (true, result.reply)
                    }
                    Err(SearchTimeout) => (true, "unknown".to_string()),
                }
            }

            "gogui-analyze_commands" => (true, ANALYZE_COMMANDS.to_string()),

            "gogui-rules_game_id" => (true, "NoGo".to_string()),

            "gogui-rules_board_size" => (true, self.board.size().to_string()),

            "gogui-rules_side_to_move" => {
                (true, self.board.current_player().name().to_string())
            }

            "gogui-rules_board" => (true, self.board.to_string()),

            "gogui-rules_legal_moves" => {
                (true, self.sorted_moves(self.board.current_player()))
            }

            "gogui-rules_final_result" => {
                let mover = self.board.current_player();
                if self.board.legal_moves(mover).is_empty() {
                    // A player with no legal placement has lost.
                    (true, mover.opponent().name().to_uppercase())
                } else {
                    (true, "unknown".to_string())
                }
            }

            _ => (false, "Unknown command".to_string()),
        }
    }

    /// All legal moves for `color` as sorted uppercase coordinates.
    fn sorted_moves(&self, color: Color) -> String {
        let mut coords: Vec<String> = self
            .board
            .legal_moves(color)
            .into_iter()
            .map(|pt| format_point(pt, self.board.size()))
            .collect();
        coords.sort();
        coords.join(" ")
    }
}

/// Look up the usage string for `command` when `given` does not match
/// its required argument count.
fn arg_mismatch(command: &str, given: usize) -> Option<&'static str> {
    ARG_USAGE
        .iter()
        .find(|(name, _, _)| *name == command)
        .filter(|(_, required, _)| *required != given)
        .map(|(_, _, usage)| *usage)
}

/// Strip the optional numeric id some test harnesses prefix commands
/// with. Responses never echo the id.
fn strip_id(line: &str) -> &str {
    line.trim_start_matches(|c: char| c.is_ascii_digit()).trim_start()
}

/// Parse a GTP color argument. Accepts single letters and full names,
/// case-insensitively.
fn parse_color(s: &str) -> Option<Color> {
    match s.to_lowercase().as_str() {
        "b" | "black" => Some(Color::Black),
        "w" | "white" => Some(Color::White),
        _ => None,
    }
}
