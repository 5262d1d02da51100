//! Lifecycle of the heuristic's grid

use super::{Grid, Snapshot};
use crate::error::Result;
use tracing::info;

/// Outcome of bringing the grid up to date with a new snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prepared {
    /// No disc has been played yet
    Opening,
    /// Grid is current and ready for analysis
    Ready,
}

/// Grid owned by one heuristic instance for the length of a game.
///
/// Transitions from `Uninitialized` to `Ready` exactly once, on the first
/// snapshot. Later snapshots only refresh discs.
#[derive(Debug, Clone, Default)]
pub enum BoardState {
    #[default]
    Uninitialized,
    Ready(Grid),
}

impl BoardState {
    /// Build or refresh the grid from `snapshot`
    pub fn prepare(&mut self, snapshot: &Snapshot) -> Result<Prepared> {
        match self {
            BoardState::Uninitialized => {
                let grid = Grid::build(snapshot);
                info!(cols = grid.cols(), rows = grid.rows(), "built board grid");
                let opening = grid.is_empty();
                *self = BoardState::Ready(grid);
                Ok(if opening { Prepared::Opening } else { Prepared::Ready })
            }
            BoardState::Ready(grid) => {
                grid.refresh(snapshot)?;
                Ok(if grid.is_empty() { Prepared::Opening } else { Prepared::Ready })
            }
        }
    }

    pub fn grid(&self) -> Option<&Grid> {
        match self {
            BoardState::Uninitialized => None,
            BoardState::Ready(grid) => Some(grid),
        }
    }
}
