//! NoGo-Rust: exact NoGo solver with a GTP front end.
//!
//! ## Usage
//!
//! - `nogo-rust` - Show a demo
//! - `nogo-rust gtp` - Start the GTP server for GUI integration
//! - `nogo-rust demo` - Run the demo
//!
//! `--size`, `--komi` and `--timelimit` configure the session;
//! `--debug` turns on diagnostic logging to stderr.

use anyhow::{Result, ensure};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use nogo_rust::board::{Board, format_point};
use nogo_rust::constants::{DEFAULT_KOMI, DEFAULT_SIZE, DEFAULT_TIME_LIMIT, MAX_SIZE};
use nogo_rust::gtp::GtpEngine;
use nogo_rust::policy;
use nogo_rust::solver::Solver;

/// NoGo-Rust: an exact NoGo solver speaking GTP
#[derive(Parser)]
#[command(name = "nogo-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board size
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Komi (informational; the game has no draws)
    #[arg(long, default_value_t = DEFAULT_KOMI)]
    komi: f32,

    /// Soft time budget for the solve command, in seconds
    #[arg(long, default_value_t = DEFAULT_TIME_LIMIT)]
    timelimit: u64,

    /// Log engine diagnostics to stderr
    #[arg(long)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the GTP server for use with GUI applications
    Gtp,
    /// Play a short random opening and solve a small board
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    ensure!(
        (1..=MAX_SIZE).contains(&cli.size),
        "board size must be between 1 and {MAX_SIZE}"
    );

    let default_filter = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    match cli.command {
        Some(Commands::Gtp) => {
            let mut engine = GtpEngine::with_settings(cli.size, cli.komi, cli.timelimit);
            engine.run()?;
        }
        Some(Commands::Demo) | None => {
            run_demo(cli.size)?;
        }
    }
    Ok(())
}

fn run_demo(size: usize) -> Result<()> {
    println!("NoGo-Rust: exact NoGo solver\n");

    println!("=== Random opening on {size}x{size} ===");
    let mut board = Board::new(size);
    let mut rng = fastrand::Rng::new();
    for _ in 0..6 {
        let color = board.current_player();
        let Some(pt) = policy::random_move(&board, color, &mut rng) else {
            println!("{} has no legal move and loses", color.name());
            break;
        };
        board.play(pt, color)?;
        println!("{} plays {}", color.name(), format_point(pt, size));
    }
    println!("{board}");

    println!("=== Solving 3x3 from the empty board ===");
    let start = std::time::Instant::now();
    let mut solver = Solver::new();
    let result = solver.solve(&Board::new(3))?;
    let verdict = if result.win {
        "first player wins"
    } else {
        "first player loses"
    };
    println!("Result: {} ({verdict})", result.reply);
    println!(
        "Expanded {} positions, memoized {}, in {:.2?}",
        solver.nodes(),
        solver.table_len(),
        start.elapsed()
    );
    Ok(())
}
