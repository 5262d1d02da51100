//! Streak-analysis move heuristic for Connect Four
//!
//! Picks the next column from the current board by looking at the runs of
//! same-colored discs next to every cell a disc could land in:
//! - The board is wired into a grid of linked cells on the first request
//! - Every landing cell is scanned from both sides of four axes (horizontal,
//!   vertical, two diagonals); each scan walks its side and then the other
//! - Each run is scored; runs of three are critical, shorter runs scale
//! - The landing cell with the best-scoring run wins
//!
//! There is no lookahead. The heuristic only sees the geometry around each
//! candidate cell.
//!
//! # Architecture
//!
//! - [`board`]: Discs, directions, linked grid and its lifecycle
//! - [`eval`]: Streak scanning and the scoring policy
//! - [`engine`]: Candidate ranking and move selection
//! - [`rules`]: Drop/win helpers for a game runner
//! - [`ui`]: egui front end for playing against the heuristic
//!
//! # Quick Start
//!
//! ```
//! use connect_four_streaks::{rules, Disc, StreakHeuristic};
//!
//! let mut board = rules::empty_board(rules::COLUMNS, rules::ROWS);
//! let mut heuristic = StreakHeuristic::new(Disc::Yellow).unwrap();
//!
//! rules::drop_disc(&mut board, 3, Disc::Red);
//!
//! let available = rules::available_columns(&board);
//! let column = heuristic.choose_column(&available, &board).unwrap();
//! rules::drop_disc(&mut board, column, Disc::Yellow);
//! ```

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Axis, Direction, Disc, Grid};
pub use engine::{Candidate, DecisionKind, MoveDecision, StreakHeuristic};
pub use error::{Error, Result};
pub use eval::{ScoringConfig, Streak};
