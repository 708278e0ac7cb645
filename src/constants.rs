//! Constants for board geometry, search parameters, and heuristic weights.
//!
//! Board geometry and the evaluation weights live here so that the board
//! model, the evaluator, the search, and the CLI all share one source of
//! truth. The weights are contract values carried over from the original
//! gamearena engine, not tunables.

// =============================================================================
// Board Geometry
// =============================================================================

/// Number of rows (row 0 is the top of the grid).
pub const ROWS: usize = 6;

/// Number of columns (moves are column indices in `0..COLS`).
pub const COLS: usize = 7;

/// Run length required to win.
pub const WIN_LEN: usize = 4;

// =============================================================================
// Search Parameters
// =============================================================================

/// Default minimax search depth in plies.
pub const DEFAULT_SEARCH_DEPTH: usize = 4;

/// Hard cap on the search depth accepted by [`crate::search::search_scores`].
///
/// The move tree branches up to 7 ways per ply, so depth bounds the work;
/// this cap keeps pathological inputs from running unbounded.
pub const MAX_SEARCH_DEPTH: usize = 12;

// =============================================================================
// Rollout Parameters
// =============================================================================

/// Default number of random rollouts per estimate.
pub const DEFAULT_SIMULATIONS: usize = 10_000;

/// Hard cap on the rollout count accepted by
/// [`crate::rollout::estimate_win_probabilities`].
pub const MAX_SIMULATIONS: usize = 1_000_000;

// =============================================================================
// Heuristic Weights
// =============================================================================

/// Score for a length-4 window holding exactly two of a color.
pub const PAIR_SCORE: f64 = 0.2;

/// Score for a length-4 window holding exactly three of a color.
pub const TRIPLE_SCORE: f64 = 0.5;

/// Flat bonus when a color has at least one immediate threat
/// (three in a window with the fourth cell empty). Applied once,
/// no matter how many threats exist.
pub const THREAT_BONUS: f64 = 0.3;

/// Evaluation of a position with no scorable lines for either color.
pub const NEUTRAL_SCORE: f64 = 0.5;

// =============================================================================
// Direction Vectors
// =============================================================================

/// Forward probe directions as (row, col) deltas: east, south,
/// south-east, south-west. Every four-in-a-row contains a cell from which
/// the whole run lies along one of these, so no backward pass is needed.
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];
