//! Streak scanning from one side of a candidate

use crate::board::{Axis, CellId, Direction, Disc, Grid};

/// Contiguous same-owner run next to a candidate cell.
///
/// Built by walking `start` and then its opposite from `origin`. The origin
/// itself is never part of `cells`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Streak {
    /// Collected cells, `start` side first, each side ordered outward
    pub cells: Vec<CellId>,
    /// Owner shared by every collected cell; `None` when nothing was collected
    pub disc: Option<Disc>,
    /// Side the scan started from; its first disc fixes the owner
    pub start: Direction,
    pub axis: Axis,
    /// Candidate cell the scan started from
    pub origin: CellId,
}

impl Streak {
    /// Scan `grid` through `origin`, walking `start` first.
    ///
    /// The first occupied neighbor fixes the owner; the walk on either side
    /// stops at an empty cell, the board edge, or a disc of another owner.
    pub fn scan(grid: &Grid, origin: CellId, start: Direction) -> Self {
        let mut cells = Vec::new();
        let mut value: Option<Disc> = None;

        for direction in [start, start.opposite()] {
            let mut current = origin;
            while let Some(next) = grid.neighbor(current, direction) {
                let disc = grid.disc(next);
                if disc.is_empty() {
                    break;
                }
                if *value.get_or_insert(disc) != disc {
                    break;
                }
                cells.push(next);
                current = next;
            }
        }

        Self {
            cells,
            disc: value,
            start,
            axis: start.axis(),
            origin,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }
}
