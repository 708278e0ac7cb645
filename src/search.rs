//! Bounded-depth alpha-beta minimax search.
//!
//! The search explores the move tree depth-first in ascending column order
//! and scores leaves with the static evaluator. [`search_scores`] runs one
//! independent search per color, each assuming its own color moves first
//! and maximizes at the root — two decoupled single-agent projections
//! rather than a single turn-aware adversarial evaluation. That is the
//! original gamearena contract and is preserved as-is.

use tracing::debug;

use crate::board::{Board, Color, apply_move, is_terminal, valid_moves};
use crate::constants::MAX_SEARCH_DEPTH;
use crate::error::EngineError;
use crate::eval::evaluate_board;

/// Minimax scores for both colors, each rounded to 3 decimal digits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerScores {
    pub red: f64,
    pub yellow: f64,
}

/// Minimax with alpha-beta pruning.
///
/// The score is always taken from `color`'s perspective, whatever the
/// depth. On a maximizing ply the mover is `color`; on a minimizing ply
/// the mover is the opponent. Sibling moves stop being explored once
/// `beta <= alpha`.
pub fn minimax(
    board: &Board,
    depth: usize,
    mut alpha: f64,
    mut beta: f64,
    maximizing: bool,
    color: Color,
) -> f64 {
    if depth == 0 || is_terminal(board) {
        return evaluate_board(board, color);
    }

    // Columns come back in ascending order, which fixes the tie-break:
    // among equal-scoring moves the leftmost wins.
    let moves = valid_moves(board);

    if maximizing {
        let mut best = f64::NEG_INFINITY;
        for col in moves {
            // valid_moves only yields open columns
            let child = apply_move(board, col, color).expect("open column");
            let value = minimax(&child, depth - 1, alpha, beta, false, color);
            best = best.max(value);
            alpha = alpha.max(value);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let opponent = color.opponent();
        let mut worst = f64::INFINITY;
        for col in moves {
            let child = apply_move(board, col, opponent).expect("open column");
            let value = minimax(&child, depth - 1, alpha, beta, true, color);
            worst = worst.min(value);
            beta = beta.min(value);
            if beta <= alpha {
                break;
            }
        }
        worst
    }
}

/// Compute the minimax score of the position for each color.
///
/// Runs two independent searches with a full (-inf, +inf) window, one per
/// color, each maximizing for its own color from the root. Scores are
/// rounded to 3 decimals.
///
/// # Errors
/// [`EngineError::DepthBudgetExceeded`] when `depth` is above
/// [`MAX_SEARCH_DEPTH`].
pub fn search_scores(board: &Board, depth: usize) -> Result<PlayerScores, EngineError> {
    if depth > MAX_SEARCH_DEPTH {
        return Err(EngineError::DepthBudgetExceeded {
            requested: depth,
            max: MAX_SEARCH_DEPTH,
        });
    }

    let red = minimax(
        board,
        depth,
        f64::NEG_INFINITY,
        f64::INFINITY,
        true,
        Color::Red,
    );
    let yellow = minimax(
        board,
        depth,
        f64::NEG_INFINITY,
        f64::INFINITY,
        true,
        Color::Yellow,
    );

    let scores = PlayerScores {
        red: round3(red),
        yellow: round3(yellow),
    };
    debug!(depth, red = scores.red, yellow = scores.yellow, "search complete");
    Ok(scores)
}

#[inline]
fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
