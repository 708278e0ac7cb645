//! Integration tests for the gamearena-rust analysis engine.
//!
//! These cover the engine's public contract end to end: the move model,
//! win detection, the heuristic evaluator, minimax scoring, and the
//! rollout estimator with a seeded random source.

use gamearena_rust::board::{Board, Color, apply_move, check_win, is_terminal, valid_moves};
use gamearena_rust::error::EngineError;
use gamearena_rust::eval::evaluate_board;
use gamearena_rust::rollout::estimate_win_probabilities;
use gamearena_rust::search::search_scores;

// =============================================================================
// Helper functions for setting up test positions
// =============================================================================

/// Replay a sequence of (column, color) drops onto an empty board.
fn setup_position(drops: &[(usize, Color)]) -> Board {
    drops.iter().fold(Board::new(), |board, &(col, color)| {
        apply_move(&board, col, color).unwrap()
    })
}

/// Stack discs bottom-up in one column.
fn fill_column(board: Board, col: usize, discs: &[Color]) -> Board {
    discs
        .iter()
        .fold(board, |b, &color| apply_move(&b, col, color).unwrap())
}

// =============================================================================
// Move model
// =============================================================================

#[test]
fn valid_moves_track_open_columns_in_ascending_order() {
    let mut board = Board::new();
    assert_eq!(valid_moves(&board), vec![0, 1, 2, 3, 4, 5, 6]);

    // Fill columns 1 and 5 to the top.
    for col in [1, 5] {
        for i in 0..6 {
            let color = if i % 2 == 0 { Color::Red } else { Color::Yellow };
            board = apply_move(&board, col, color).unwrap();
        }
    }

    let moves = valid_moves(&board);
    assert_eq!(moves, vec![0, 2, 3, 4, 6]);
    assert!(moves.windows(2).all(|w| w[0] < w[1]));
    for col in 0..7 {
        assert_eq!(moves.contains(&col), board.get(0, col).is_none());
    }
}

#[test]
fn column_zero_stacks_alternating_discs() {
    let board = setup_position(&[
        (0, Color::Red),
        (0, Color::Yellow),
        (0, Color::Red),
        (0, Color::Yellow),
    ]);

    // Bottom to top: Red, Yellow, Red, Yellow, then two empties.
    assert_eq!(board.get(5, 0), Some(Color::Red));
    assert_eq!(board.get(4, 0), Some(Color::Yellow));
    assert_eq!(board.get(3, 0), Some(Color::Red));
    assert_eq!(board.get(2, 0), Some(Color::Yellow));
    assert_eq!(board.get(1, 0), None);
    assert_eq!(board.get(0, 0), None);
    assert!(valid_moves(&board).contains(&0));
    assert_eq!(board.occupied(), 4);
}

#[test]
fn each_move_adds_exactly_one_disc() {
    let mut board = Board::new();
    for (i, col) in [3, 3, 2, 4, 4, 1].into_iter().enumerate() {
        let color = if i % 2 == 0 { Color::Red } else { Color::Yellow };
        let next = apply_move(&board, col, color).unwrap();
        assert_eq!(next.occupied(), board.occupied() + 1);
        board = next;
    }
}

#[test]
fn out_of_range_and_full_columns_fail() {
    let board = Board::new();
    assert_eq!(
        apply_move(&board, 9, Color::Red),
        Err(EngineError::InvalidColumn(9))
    );

    let full = fill_column(
        board,
        4,
        &[
            Color::Red,
            Color::Yellow,
            Color::Red,
            Color::Yellow,
            Color::Red,
            Color::Yellow,
        ],
    );
    assert_eq!(
        apply_move(&full, 4, Color::Red),
        Err(EngineError::ColumnFull(4))
    );
}

// =============================================================================
// Win detection and terminal positions
// =============================================================================

#[test]
fn completing_the_bottom_row_wins() {
    let board = setup_position(&[(0, Color::Red), (1, Color::Red), (2, Color::Red)]);
    assert!(!check_win(&board, Color::Red));
    assert!(!is_terminal(&board));

    let board = apply_move(&board, 3, Color::Red).unwrap();
    assert!(check_win(&board, Color::Red));
    assert!(is_terminal(&board));
}

#[test]
fn a_full_board_without_a_winner_is_terminal() {
    // Column fill patterns chosen so no four-in-a-row forms anywhere:
    // columns 0-2 and 3-5 pair off, column 6 breaks the diagonals.
    use Color::{Red as R, Yellow as Y};
    let columns = [
        [R, Y, R, Y, R, Y],
        [R, Y, R, Y, R, Y],
        [Y, R, Y, R, Y, R],
        [Y, R, Y, R, Y, R],
        [R, Y, R, Y, R, Y],
        [R, Y, R, Y, R, Y],
        [Y, R, Y, R, Y, R],
    ];
    let mut board = Board::new();
    for (col, discs) in columns.iter().enumerate() {
        board = fill_column(board, col, discs);
    }

    assert!(valid_moves(&board).is_empty());
    assert!(!check_win(&board, Color::Red));
    assert!(!check_win(&board, Color::Yellow));
    assert!(is_terminal(&board));
}

// =============================================================================
// Evaluation and search
// =============================================================================

#[test]
fn evaluation_stays_in_the_unit_interval() {
    let board = setup_position(&[
        (3, Color::Red),
        (3, Color::Yellow),
        (2, Color::Red),
        (4, Color::Yellow),
        (1, Color::Red),
    ]);
    for color in [Color::Red, Color::Yellow] {
        let score = evaluate_board(&board, color);
        assert!((0.0..=1.0).contains(&score));
    }
}

#[test]
fn empty_board_search_is_color_symmetric() {
    for depth in [0, 2, 4] {
        let scores = search_scores(&Board::new(), depth).unwrap();
        assert_eq!(scores.red, scores.yellow, "depth {depth}");
    }
}

#[test]
fn search_sees_an_immediate_red_win() {
    let board = setup_position(&[
        (0, Color::Red),
        (0, Color::Yellow),
        (1, Color::Red),
        (1, Color::Yellow),
        (2, Color::Red),
        (2, Color::Yellow),
    ]);
    let scores = search_scores(&board, 4).unwrap();
    assert_eq!(scores.red, 1.0);
}

// =============================================================================
// Rollout estimation
// =============================================================================

#[test]
fn zero_simulations_fail_and_positive_counts_return_frequencies() {
    let board = Board::new();
    let mut rng = fastrand::Rng::with_seed(99);

    assert_eq!(
        estimate_win_probabilities(&board, Color::Red, 0, &mut rng),
        Err(EngineError::InvalidSimulationCount)
    );

    for sims in [1, 10, 1000] {
        let estimate =
            estimate_win_probabilities(&board, Color::Red, sims, &mut rng).unwrap();
        assert!((0.0..=1.0).contains(&estimate.red));
        assert!((0.0..=1.0).contains(&estimate.yellow));
        assert!(estimate.red + estimate.yellow <= 1.0);
    }
}

#[test]
fn dominant_red_position_wins_at_least_ninety_percent_of_rollouts() {
    // Red to move with three winning columns at once: completing the open
    // three on the bottom row at either end (columns 1 and 5), or topping
    // the vertical three in column 3. A random opponent almost never
    // blocks all of them in time; the bound is a regression check, not an
    // exact equality.
    let board = Board::new();
    let board = fill_column(board, 3, &[Color::Red, Color::Red, Color::Red]);
    let board = fill_column(board, 2, &[Color::Red, Color::Yellow]);
    let board = fill_column(board, 4, &[Color::Red, Color::Yellow]);
    assert!(!check_win(&board, Color::Red));

    let mut rng = fastrand::Rng::with_seed(20240817);
    let estimate =
        estimate_win_probabilities(&board, Color::Red, 10_000, &mut rng).unwrap();
    assert!(
        estimate.red >= 0.9,
        "expected a dominant red win rate, got {}",
        estimate.red
    );
}
