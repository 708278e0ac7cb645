//! Gamearena-Rust: connect-four position analysis from the command line.
//!
//! ## Usage
//!
//! - `gamearena-rust` - Analyze a short demo opening
//! - `gamearena-rust demo` - Same as above
//! - `gamearena-rust analyze --moves 4435 --depth 4 --sims 10000 --seed 7`
//!   - Replay a 1-indexed column string (Red first, alternating) and print
//!     the board, minimax scores, and rollout win estimates

use anyhow::{Context, bail};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use gamearena_rust::board::{Board, Color, apply_move};
use gamearena_rust::constants::{DEFAULT_SEARCH_DEPTH, DEFAULT_SIMULATIONS};
use gamearena_rust::rollout::estimate_win_probabilities;
use gamearena_rust::search::search_scores;

/// Gamearena-Rust: a connect-four position-analysis engine
#[derive(Parser)]
#[command(name = "gamearena-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a short demo opening
    Demo,
    /// Replay a move sequence and analyze the resulting position
    Analyze {
        /// Columns as 1-indexed digits, Red moving first (e.g. "4435")
        #[arg(long, default_value = "")]
        moves: String,
        /// Minimax search depth in plies
        #[arg(long, default_value_t = DEFAULT_SEARCH_DEPTH)]
        depth: usize,
        /// Number of random rollouts
        #[arg(long, default_value_t = DEFAULT_SIMULATIONS)]
        sims: usize,
        /// Seed for the rollout random source (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
        /// Color to move in the rollouts (defaults to the replay turn)
        #[arg(long, value_enum)]
        to_move: Option<CliColor>,
    },
}

#[derive(Copy, Clone, ValueEnum)]
enum CliColor {
    Red,
    Yellow,
}

impl From<CliColor> for Color {
    fn from(color: CliColor) -> Self {
        match color {
            CliColor::Red => Color::Red,
            CliColor::Yellow => Color::Yellow,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Analyze {
            moves,
            depth,
            sims,
            seed,
            to_move,
        }) => analyze(&moves, depth, sims, seed, to_move.map(Color::from)),
        Some(Commands::Demo) | None => analyze("4435", DEFAULT_SEARCH_DEPTH, 2000, None, None),
    }
}

/// Replay a 1-indexed column string, Red moving first.
///
/// Returns the final board and the color whose turn it is afterwards.
fn replay(moves: &str) -> anyhow::Result<(Board, Color)> {
    let mut board = Board::new();
    let mut mover = Color::Red;
    for (i, ch) in moves.chars().enumerate() {
        let col = match ch.to_digit(10) {
            Some(d @ 1..=7) => (d - 1) as usize,
            _ => bail!("move {}: '{ch}' is not a column in 1..=7", i + 1),
        };
        board = apply_move(&board, col, mover)
            .with_context(|| format!("move {}: cannot play column {}", i + 1, col + 1))?;
        mover = mover.opponent();
    }
    Ok((board, mover))
}

fn analyze(
    moves: &str,
    depth: usize,
    sims: usize,
    seed: Option<u64>,
    to_move: Option<Color>,
) -> anyhow::Result<()> {
    let (board, turn) = replay(moves)?;
    let to_move = to_move.unwrap_or(turn);

    println!("{board}");

    let scores = search_scores(&board, depth).context("minimax search failed")?;
    println!("minimax (depth {depth}):");
    println!("  red:    {:.3}", scores.red);
    println!("  yellow: {:.3}", scores.yellow);

    let mut rng = match seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    let estimate = estimate_win_probabilities(&board, to_move, sims, &mut rng)
        .context("rollout estimation failed")?;
    println!("rollouts ({sims} games, {to_move} to move):");
    println!("  red:    {:.3}", estimate.red);
    println!("  yellow: {:.3}", estimate.yellow);
    println!("  draw:   {:.3}", 1.0 - estimate.red - estimate.yellow);

    Ok(())
}
