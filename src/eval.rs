//! Static position evaluation.
//!
//! The evaluator scores a position for one color on a [0, 1] scale by
//! scanning every length-4 window on the board (horizontal, vertical, and
//! both diagonals — 69 windows in total on a 6x7 grid). The weights are
//! contract values from the original gamearena engine: a window holding
//! exactly two of a color is worth 0.2 to that color, exactly three is
//! worth 0.5, a window blocked by both colors is worth nothing, and a
//! single flat 0.3 bonus rewards having at least one immediate threat.

use crate::board::{Board, Color, check_win};
use crate::constants::{
    COLS, NEUTRAL_SCORE, PAIR_SCORE, ROWS, THREAT_BONUS, TRIPLE_SCORE, WIN_LEN,
};

/// Running totals for one window scan.
#[derive(Default)]
struct LineTotals {
    score: f64,
    threats: u32,
}

/// Evaluate the board from `color`'s perspective.
///
/// Returns a value in [0, 1]:
/// - exactly 1.0 if `color` already has four in a row
/// - exactly 0.0 if the opponent does
/// - otherwise `color`'s accumulated window score normalized against the
///   sum of both colors' totals, or 0.5 when neither color has any
///   scorable line (e.g. the empty board)
pub fn evaluate_board(board: &Board, color: Color) -> f64 {
    let opponent = color.opponent();

    if check_win(board, color) {
        return 1.0;
    }
    if check_win(board, opponent) {
        return 0.0;
    }

    let mut own = LineTotals::default();
    let mut theirs = LineTotals::default();

    for (anchor_rows, anchor_cols, dr, dc) in window_orientations() {
        for row in anchor_rows.clone() {
            for col in anchor_cols.clone() {
                score_window(board, row, col, dr, dc, color, &mut own, &mut theirs);
            }
        }
    }

    if own.threats > 0 {
        own.score += THREAT_BONUS;
    }
    if theirs.threats > 0 {
        theirs.score += THREAT_BONUS;
    }

    let total = own.score + theirs.score;
    if total == 0.0 {
        return NEUTRAL_SCORE;
    }
    own.score / total
}

/// Anchor ranges and step deltas for the four window orientations.
/// Anchors are chosen so every window stays on the board.
fn window_orientations() -> [(std::ops::Range<usize>, std::ops::Range<usize>, isize, isize); 4] {
    let short_rows = 0..ROWS - (WIN_LEN - 1);
    let short_cols = 0..COLS - (WIN_LEN - 1);
    [
        (0..ROWS, short_cols.clone(), 0, 1),             // horizontal
        (short_rows.clone(), 0..COLS, 1, 0),             // vertical
        (short_rows.clone(), short_cols, 1, 1),          // diagonal down-right
        (short_rows, WIN_LEN - 1..COLS, 1, -1),          // diagonal down-left
    ]
}

/// Score a single window anchored at `(row, col)` stepping by `(dr, dc)`.
fn score_window(
    board: &Board,
    row: usize,
    col: usize,
    dr: isize,
    dc: isize,
    color: Color,
    own: &mut LineTotals,
    theirs: &mut LineTotals,
) {
    let mut count_own = 0usize;
    let mut count_theirs = 0usize;
    let mut count_empty = 0usize;

    for i in 0..WIN_LEN {
        let r = (row as isize + dr * i as isize) as usize;
        let c = (col as isize + dc * i as isize) as usize;
        match board.get(r, c) {
            Some(cell) if cell == color => count_own += 1,
            Some(_) => count_theirs += 1,
            None => count_empty += 1,
        }
    }

    // A window contested by both colors scores nothing for either.
    if count_own > 0 && count_theirs > 0 {
        return;
    }

    if count_own == 3 && count_empty == 1 {
        own.threats += 1;
    }
    if count_theirs == 3 && count_empty == 1 {
        theirs.threats += 1;
    }

    own.score += match count_own {
        2 => PAIR_SCORE,
        3 => TRIPLE_SCORE,
        _ => 0.0,
    };
    theirs.score += match count_theirs {
        2 => PAIR_SCORE,
        3 => TRIPLE_SCORE,
        _ => 0.0,
    };
}
