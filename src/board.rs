//! Board representation and move execution.
//!
//! This module provides the core game model for connect four:
//! - Grid state as a 6x7 value type (row 0 is the top)
//! - Gravity-respecting move application
//! - Column-validity queries
//! - Four-in-a-row and terminal-position detection
//!
//! A [`Board`] is `Copy` with structural identity. Moves never mutate in
//! place; [`apply_move`] returns a fresh board so that sibling search
//! branches and concurrent rollouts can never observe each other's moves.

use std::fmt;

use crate::constants::{COLS, DIRECTIONS, ROWS, WIN_LEN};
use crate::error::EngineError;

/// One of the two players.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Yellow,
}

impl Color {
    /// The other player.
    #[inline]
    pub fn opponent(self) -> Color {
        match self {
            Color::Red => Color::Yellow,
            Color::Yellow => Color::Red,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "red"),
            Color::Yellow => write!(f, "yellow"),
        }
    }
}

/// A connect-four position.
///
/// Each cell holds `Some(color)` or `None` (empty). Within a column the
/// occupied cells always form a contiguous run up from the bottom row;
/// [`apply_move`] is the only way discs enter the board, so the invariant
/// holds for every board built through the public API.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Color>; COLS]; ROWS],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Self {
            cells: [[None; COLS]; ROWS],
        }
    }

    /// Cell at `(row, col)`, row 0 at the top. Out-of-bounds reads as empty.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Color> {
        if row >= ROWS || col >= COLS {
            return None;
        }
        self.cells[row][col]
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_some())
            .count()
    }
}

/// Columns that can still receive a disc, in ascending order.
///
/// Ascending order is part of the contract: the search explores moves in
/// this order, so ties between equal-scoring moves break toward the
/// leftmost column.
pub fn valid_moves(board: &Board) -> Vec<usize> {
    (0..COLS).filter(|&col| board.get(0, col).is_none()).collect()
}

/// Drop a disc of `color` into `col`, returning the resulting board.
///
/// The disc lands in the lowest empty cell of the column. The input board
/// is left untouched.
///
/// # Errors
/// - [`EngineError::InvalidColumn`] if `col` is not in `0..7`
/// - [`EngineError::ColumnFull`] if the column has no empty cell
pub fn apply_move(board: &Board, col: usize, color: Color) -> Result<Board, EngineError> {
    if col >= COLS {
        return Err(EngineError::InvalidColumn(col));
    }
    let mut next = *board;
    for row in (0..ROWS).rev() {
        if next.cells[row][col].is_none() {
            next.cells[row][col] = Some(color);
            return Ok(next);
        }
    }
    Err(EngineError::ColumnFull(col))
}

/// Check whether `color` has four in a row anywhere on the board.
///
/// Probes the four forward directions (east, south, and both down
/// diagonals) from every cell occupied by `color`, counting consecutive
/// same-color cells. Any winning line is seen from at least one of its
/// cells along a forward direction, so no backward probes are needed.
pub fn check_win(board: &Board, color: Color) -> bool {
    for row in 0..ROWS {
        for col in 0..COLS {
            if board.get(row, col) != Some(color) {
                continue;
            }
            for (dr, dc) in DIRECTIONS {
                let mut run = 0;
                let mut r = row as isize;
                let mut c = col as isize;
                while r >= 0
                    && r < ROWS as isize
                    && c >= 0
                    && c < COLS as isize
                    && board.get(r as usize, c as usize) == Some(color)
                {
                    run += 1;
                    if run >= WIN_LEN {
                        return true;
                    }
                    r += dr;
                    c += dc;
                }
            }
        }
    }
    false
}

/// Check whether the position is over: either color has won, or the top
/// row has no empty cell left (draw).
pub fn is_terminal(board: &Board) -> bool {
    check_win(board, Color::Red)
        || check_win(board, Color::Yellow)
        || (0..COLS).all(|col| board.get(0, col).is_some())
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..ROWS {
            for col in 0..COLS {
                let ch = match self.get(row, col) {
                    Some(Color::Red) => 'R',
                    Some(Color::Yellow) => 'Y',
                    None => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
