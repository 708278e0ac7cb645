//! Gamearena-Rust: a connect-four position-analysis engine.
//!
//! This crate reimplements the analysis core of the original gamearena
//! project in Rust: given a 6x7 board snapshot it computes bounded-depth
//! heuristic scores via alpha-beta minimax and estimates win probabilities
//! via random rollouts. The engine is fully stateless; every operation is
//! a pure function over immutable board values.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, search parameters, heuristic weights
//! - [`board`] - Board state, move application, win detection
//! - [`eval`] - Static position scoring
//! - [`search`] - Alpha-beta minimax search
//! - [`rollout`] - Random-playout win-probability estimation
//! - [`error`] - Engine error taxonomy
//!
//! ## Example
//!
//! ```
//! use gamearena_rust::board::{Board, Color, apply_move};
//! use gamearena_rust::rollout::estimate_win_probabilities;
//! use gamearena_rust::search::search_scores;
//!
//! // Red opens in the center column.
//! let board = Board::new();
//! let board = apply_move(&board, 3, Color::Red)?;
//!
//! // Minimax scores for both colors at depth 4.
//! let scores = search_scores(&board, 4)?;
//! println!("red {:.3}  yellow {:.3}", scores.red, scores.yellow);
//!
//! // Seeded rollout estimate with Yellow to move.
//! let mut rng = fastrand::Rng::with_seed(1);
//! let estimate = estimate_win_probabilities(&board, Color::Yellow, 1000, &mut rng)?;
//! assert!(estimate.red + estimate.yellow <= 1.0);
//! # Ok::<(), gamearena_rust::error::EngineError>(())
//! ```

pub mod board;
pub mod constants;
pub mod error;
pub mod eval;
pub mod rollout;
pub mod search;
