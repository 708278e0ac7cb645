//! Monte Carlo win-probability estimation (random rollouts).
//!
//! Each rollout plays uniformly random legal moves from its own copy of
//! the input position until someone wins or the board fills up. The
//! aggregate win counts over many rollouts give an empirical win-rate
//! estimate per color; the unreported remainder is the draw rate.
//!
//! The random source is injected by the caller so tests can seed it and
//! assert exact aggregate outcomes.

use tracing::debug;

use crate::board::{Board, Color, apply_move, check_win, valid_moves};
use crate::constants::MAX_SIMULATIONS;
use crate::error::EngineError;

/// Empirical win frequencies from a batch of rollouts.
///
/// The two values need not sum to 1; the remainder is the draw rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WinEstimate {
    pub red: f64,
    pub yellow: f64,
}

/// Outcome of a single rollout.
enum Rollout {
    Won(Color),
    Draw,
}

/// Estimate win probabilities for both colors by random playout.
///
/// Runs `simulations` independent rollouts from copies of `board`, with
/// `to_move` making the first move in each.
///
/// # Errors
/// - [`EngineError::InvalidSimulationCount`] when `simulations` is 0
/// - [`EngineError::SimulationBudgetExceeded`] when `simulations` is above
///   [`MAX_SIMULATIONS`]
pub fn estimate_win_probabilities(
    board: &Board,
    to_move: Color,
    simulations: usize,
    rng: &mut fastrand::Rng,
) -> Result<WinEstimate, EngineError> {
    if simulations == 0 {
        return Err(EngineError::InvalidSimulationCount);
    }
    if simulations > MAX_SIMULATIONS {
        return Err(EngineError::SimulationBudgetExceeded {
            requested: simulations,
            max: MAX_SIMULATIONS,
        });
    }

    let mut red_wins = 0usize;
    let mut yellow_wins = 0usize;

    for _ in 0..simulations {
        match run_rollout(*board, to_move, rng) {
            Rollout::Won(Color::Red) => red_wins += 1,
            Rollout::Won(Color::Yellow) => yellow_wins += 1,
            Rollout::Draw => {}
        }
    }

    debug!(simulations, red_wins, yellow_wins, "rollout batch complete");
    Ok(WinEstimate {
        red: red_wins as f64 / simulations as f64,
        yellow: yellow_wins as f64 / simulations as f64,
    })
}

/// Play one game of uniformly random moves to its end.
///
/// The win check runs right after each move for the mover only, so a
/// four-in-a-row already on the entry board is credited the first time
/// its owner moves.
fn run_rollout(mut board: Board, to_move: Color, rng: &mut fastrand::Rng) -> Rollout {
    let mut mover = to_move;
    loop {
        let moves = valid_moves(&board);
        if moves.is_empty() {
            return Rollout::Draw;
        }
        let col = moves[rng.usize(..moves.len())];
        // the column came from valid_moves
        board = apply_move(&board, col, mover).expect("open column");
        if check_win(&board, mover) {
            return Rollout::Won(mover);
        }
        mover = mover.opponent();
    }
}
