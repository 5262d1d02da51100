//! Arena of linked cells

use super::cell::{Cell, CellId, Link};
use super::{Direction, Disc, Snapshot};
use crate::error::{Error, Result};
use crate::eval::Streak;

/// Linked grid of cells, addressable by column then row.
///
/// Neighbor links are wired once in [`Grid::build`]; afterwards only the
/// discs change, through [`Grid::refresh`].
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Vec<Cell>,
    cols: usize,
    rows: usize,
}

impl Grid {
    /// Build and link the grid from a normalized snapshot
    pub fn build(snapshot: &Snapshot) -> Self {
        let cols = snapshot.cols();
        let rows = snapshot.rows();
        let mut grid = Self {
            cells: Vec::with_capacity(cols * rows),
            cols,
            rows,
        };

        for col in 0..cols {
            for row in 0..rows {
                let id = CellId(grid.cells.len());
                grid.cells.push(Cell::new(snapshot.get(col, row), col, row));
                if col > 0 {
                    grid.link(id, grid.id(col - 1, row), Link::Left);
                }
                if row > 0 {
                    grid.link(id, grid.id(col, row - 1), Link::Below);
                }
            }
        }

        grid
    }

    /// Wire `id` to `other` and back. `other` must lie on the given side.
    fn link(&mut self, id: CellId, other: CellId, side: Link) {
        match side {
            Link::Left => {
                self.cells[id.0].left = Some(other);
                self.cells[other.0].right = Some(id);
            }
            Link::Below => {
                self.cells[id.0].down = Some(other);
                self.cells[other.0].up = Some(id);
            }
        }
    }

    /// Copy the snapshot's discs into the existing cells
    pub fn refresh(&mut self, snapshot: &Snapshot) -> Result<()> {
        if (snapshot.cols(), snapshot.rows()) != (self.cols, self.rows) {
            return Err(Error::DimensionMismatch {
                expected: (self.cols, self.rows),
                got: (snapshot.cols(), snapshot.rows()),
            });
        }
        for cell in &mut self.cells {
            cell.disc = snapshot.get(cell.col(), cell.row());
        }
        Ok(())
    }

    #[inline]
    fn id(&self, col: usize, row: usize) -> CellId {
        CellId(col * self.rows + row)
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Handle of the cell at (col, row), if on the board
    #[inline]
    pub fn cell_at(&self, col: usize, row: usize) -> Option<CellId> {
        (col < self.cols && row < self.rows).then(|| self.id(col, row))
    }

    /// Cell behind a handle issued by this grid.
    ///
    /// # Panics
    ///
    /// If `id` came from a grid with more cells than this one.
    #[inline]
    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id.0]
    }

    /// Owner of the cell behind `id`; panics like [`Grid::cell`]
    #[inline]
    pub fn disc(&self, id: CellId) -> Disc {
        self.cells[id.0].disc
    }

    pub fn cells(&self) -> impl Iterator<Item = (CellId, &Cell)> {
        self.cells.iter().enumerate().map(|(i, c)| (CellId(i), c))
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Cell::is_empty)
    }

    /// Lowest empty cell of a column, where a dropped disc would land.
    ///
    /// `None` for a full column or a column index off the board.
    pub fn landing_cell(&self, col: usize) -> Option<CellId> {
        let mut current = self.cell_at(col, 0);
        while let Some(id) = current {
            if self.cell(id).is_empty() {
                return Some(id);
            }
            current = self.cell(id).up();
        }
        None
    }

    #[inline]
    pub fn up_left(&self, id: CellId) -> Option<CellId> {
        self.cell(id).up().and_then(|up| self.cell(up).left())
    }

    #[inline]
    pub fn up_right(&self, id: CellId) -> Option<CellId> {
        self.cell(id).up().and_then(|up| self.cell(up).right())
    }

    #[inline]
    pub fn down_left(&self, id: CellId) -> Option<CellId> {
        self.cell(id).down().and_then(|down| self.cell(down).left())
    }

    #[inline]
    pub fn down_right(&self, id: CellId) -> Option<CellId> {
        self.cell(id).down().and_then(|down| self.cell(down).right())
    }

    /// Neighbor of `id` in any of the eight directions
    pub fn neighbor(&self, id: CellId, direction: Direction) -> Option<CellId> {
        let cell = self.cell(id);
        match direction {
            Direction::Up => cell.up(),
            Direction::Down => cell.down(),
            Direction::Left => cell.left(),
            Direction::Right => cell.right(),
            Direction::UpLeft => self.up_left(id),
            Direction::UpRight => self.up_right(id),
            Direction::DownLeft => self.down_left(id),
            Direction::DownRight => self.down_right(id),
        }
    }

    /// Same-owner run through `id` starting on the `start` side, `id` itself
    /// excluded
    pub fn streak_along(&self, id: CellId, start: Direction) -> Streak {
        Streak::scan(self, id, start)
    }
}
