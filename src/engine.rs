//! Move selection by streak analysis
//!
//! One [`StreakHeuristic`] lives for the length of a game. Each call:
//!
//! 1. **Normalize**: validate the raw board and flip it bottom-up
//! 2. **Prepare**: build the linked grid on the first call, refresh discs after
//! 3. **Opening**: on a board with no discs, play the middle available column
//! 4. **Candidates**: the landing cell of every available, non-full column
//! 5. **Rank**: score a streak from each side of every axis, keep the best, sort
//! 6. **Fallback**: no candidate at all falls back to a centered column
//!
//! # Example
//!
//! ```
//! use connect_four_streaks::{Disc, StreakHeuristic};
//!
//! let mut heuristic = StreakHeuristic::new(Disc::Yellow).unwrap();
//!
//! // 7 columns of 6 rows, each column listed top to bottom
//! let mut board = vec![vec![Disc::Empty; 6]; 7];
//! board[3][5] = Disc::Red;
//!
//! let available: Vec<usize> = (0..7).collect();
//! let column = heuristic.choose_column(&available, &board).unwrap();
//! assert!(column < 7);
//! ```

use tracing::{debug, warn};

use crate::board::{Axis, BoardState, CellId, Disc, Grid, Prepared, Snapshot};
use crate::error::Result;
use crate::eval::{ScoringConfig, Streak};

/// How the chosen column was arrived at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionKind {
    /// Empty board; the middle available column was played without analysis
    Opening,
    /// Top-ranked candidate by streak threshold
    Streak,
    /// No candidate could be formed; centered fallback
    Fallback,
}

/// A legal landing cell with its best-scoring streak
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub column: usize,
    pub cell: CellId,
    /// Best streak through `cell`, earliest scan on ties
    pub streak: Streak,
    /// Score of `streak`
    pub threshold: f64,
}

/// Result of a move request with the data behind it
#[derive(Debug, Clone, PartialEq)]
pub struct MoveDecision {
    pub column: usize,
    pub kind: DecisionKind,
    /// Winning candidate, present for [`DecisionKind::Streak`]
    pub best: Option<Candidate>,
    /// Number of candidates that were ranked
    pub candidates: usize,
}

impl MoveDecision {
    #[inline]
    fn opening(column: usize) -> Self {
        Self {
            column,
            kind: DecisionKind::Opening,
            best: None,
            candidates: 0,
        }
    }

    #[inline]
    fn fallback(column: usize) -> Self {
        Self {
            column,
            kind: DecisionKind::Fallback,
            best: None,
            candidates: 0,
        }
    }

    #[inline]
    fn streak(best: Candidate, candidates: usize) -> Self {
        Self {
            column: best.column,
            kind: DecisionKind::Streak,
            best: Some(best),
            candidates,
        }
    }

    /// Threshold of the winning candidate, if any
    pub fn threshold(&self) -> Option<f64> {
        self.best.as_ref().map(|c| c.threshold)
    }
}

/// Streak-analysis move selector for one game.
///
/// Not meant to be shared between games: the grid it builds on the first
/// call is reused for every later call.
#[derive(Debug, Clone)]
pub struct StreakHeuristic {
    config: ScoringConfig,
    state: BoardState,
}

impl StreakHeuristic {
    /// Heuristic with the default weights, favoring `priority` streaks
    pub fn new(priority: Disc) -> Result<Self> {
        Self::with_config(ScoringConfig::new(priority))
    }

    /// Heuristic with custom scoring weights
    pub fn with_config(config: ScoringConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            state: BoardState::Uninitialized,
        })
    }

    #[inline]
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Grid built from the first board, once a move has been requested
    #[inline]
    pub fn grid(&self) -> Option<&Grid> {
        self.state.grid()
    }

    /// Column to play next.
    ///
    /// `raw_board` is column-major with each column listed top to bottom.
    /// Only a malformed board is an error; everything else resolves to some
    /// column.
    pub fn choose_column(&mut self, available: &[usize], raw_board: &[Vec<Disc>]) -> Result<usize> {
        self.choose_column_with_stats(available, raw_board)
            .map(|decision| decision.column)
    }

    /// Column to play next, with the candidate that won it
    pub fn choose_column_with_stats(
        &mut self,
        available: &[usize],
        raw_board: &[Vec<Disc>],
    ) -> Result<MoveDecision> {
        let snapshot = Snapshot::from_raw(raw_board)?;

        if self.state.prepare(&snapshot)? == Prepared::Opening {
            let column = centered(available, available.len() / 2, snapshot.cols());
            debug!(column, "opening move");
            return Ok(MoveDecision::opening(column));
        }

        let ranked = self.rank_candidates(available);
        let count = ranked.len();
        match ranked.into_iter().next() {
            Some(best) => {
                debug!(
                    column = best.column,
                    threshold = best.threshold,
                    axis = ?best.streak.axis,
                    candidates = count,
                    "selected move"
                );
                Ok(MoveDecision::streak(best, count))
            }
            None => {
                let column = centered(available, (available.len() + 1) / 2, snapshot.cols());
                warn!(column, "no playable candidate, using fallback column");
                Ok(MoveDecision::fallback(column))
            }
        }
    }

    /// Candidates for `available`, best first.
    ///
    /// Equal thresholds keep the order of `available`. Empty until the grid
    /// has been built by a move request.
    pub fn rank_candidates(&self, available: &[usize]) -> Vec<Candidate> {
        let Some(grid) = self.state.grid() else {
            return Vec::new();
        };

        let mut candidates: Vec<Candidate> = available
            .iter()
            .filter_map(|&column| {
                if column >= grid.cols() {
                    warn!(column, cols = grid.cols(), "ignoring column outside the board");
                    return None;
                }
                let cell = grid.landing_cell(column)?;
                Some(self.analyze(grid, column, cell))
            })
            .collect();

        candidates.sort_by(|a, b| b.threshold.total_cmp(&a.threshold));

        for candidate in &candidates {
            debug!(
                column = candidate.column,
                threshold = candidate.threshold,
                size = candidate.streak.size(),
                disc = ?candidate.streak.disc,
                "ranked candidate"
            );
        }

        candidates
    }

    /// Best-scoring streak through a landing cell, over every start side
    fn analyze(&self, grid: &Grid, column: usize, cell: CellId) -> Candidate {
        let [first, rest @ ..] = Axis::SCAN_ORDER;
        let mut streak = grid.streak_along(cell, first);
        let mut threshold = self.config.threshold(&streak);

        for start in rest {
            let next = grid.streak_along(cell, start);
            let score = self.config.threshold(&next);
            if score > threshold {
                streak = next;
                threshold = score;
            }
        }

        Candidate {
            column,
            cell,
            streak,
            threshold,
        }
    }
}

/// Entry `index` of `available`, clamped; the board's middle column when
/// `available` is empty
fn centered(available: &[usize], index: usize, cols: usize) -> usize {
    match available.len() {
        0 => {
            warn!(cols, "no available columns given");
            cols / 2
        }
        len => available[index.min(len - 1)],
    }
}
