//! Engine error taxonomy.
//!
//! Every engine operation is a pure computation; a failure is immediate and
//! local to the call. There is no retry or recovery path inside the engine,
//! the caller decides whether to try again with different input.

use crate::constants::COLS;

/// Errors returned by the analysis engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The column index lies outside the board.
    #[error("column {0} is out of range (the board has {cols} columns)", cols = COLS)]
    InvalidColumn(usize),

    /// The column has no empty cell left.
    #[error("column {0} is full")]
    ColumnFull(usize),

    /// A rollout estimate was requested with zero simulations.
    #[error("simulation count must be at least 1")]
    InvalidSimulationCount,

    /// The requested search depth exceeds the latency budget.
    #[error("search depth {requested} exceeds the maximum of {max}")]
    DepthBudgetExceeded { requested: usize, max: usize },

    /// The requested rollout count exceeds the latency budget.
    #[error("simulation count {requested} exceeds the maximum of {max}")]
    SimulationBudgetExceeded { requested: usize, max: usize },
}
