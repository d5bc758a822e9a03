//! Shared limits and defaults for the engine.
//!
//! NoGo is played on square boards of runtime-selectable size; the GTP
//! `boardsize` command can pick any size the coordinate alphabet covers.
//! The defaults here match a fresh engine before any configuration
//! command has been received.

// =============================================================================
// Board Geometry
// =============================================================================

/// Largest supported board side. The coordinate alphabet has 25 letters
/// (A-Z with I skipped), so columns beyond 25 cannot be named.
pub const MAX_SIZE: usize = 25;

/// Board side used until a `boardsize` command arrives. 7x7 is the usual
/// competitive NoGo size.
pub const DEFAULT_SIZE: usize = 7;

// =============================================================================
// Engine Defaults
// =============================================================================

/// Default komi. NoGo has no territory count, but the GTP command exists
/// and the value is kept as session state.
pub const DEFAULT_KOMI: f32 = 0.0;

/// Default soft deadline for the exact solver, in seconds. The
/// `timelimit` command overrides it within [`MIN_TIME_LIMIT`],
/// [`MAX_TIME_LIMIT`].
pub const DEFAULT_TIME_LIMIT: u64 = 15;

/// Smallest accepted `timelimit` argument, in seconds.
pub const MIN_TIME_LIMIT: u64 = 1;

/// Largest accepted `timelimit` argument, in seconds.
pub const MAX_TIME_LIMIT: u64 = 100;

// =============================================================================
// Coordinate Alphabet
// =============================================================================

/// Column letters in board order. `I` is skipped by Go convention to
/// avoid confusion with `J`.
pub const COLUMN_LETTERS: &[u8; 25] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";
