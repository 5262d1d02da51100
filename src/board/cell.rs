//! Grid node with orthogonal neighbor handles

use super::Disc;

/// Handle to a cell inside its owning [`Grid`](super::Grid).
///
/// Cells never own their neighbors; they only hold handles into the grid's
/// arena. A handle is only meaningful for the grid that issued it; looking it
/// up in another grid reads an unrelated cell or panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(pub(crate) usize);

impl CellId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Axis along which two cells are linked during construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Link {
    /// The other cell sits directly left of this one
    Left,
    /// The other cell sits directly below this one
    Below,
}

/// A single board slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub(crate) disc: Disc,
    col: usize,
    row: usize,
    pub(crate) up: Option<CellId>,
    pub(crate) down: Option<CellId>,
    pub(crate) left: Option<CellId>,
    pub(crate) right: Option<CellId>,
}

impl Cell {
    pub(crate) fn new(disc: Disc, col: usize, row: usize) -> Self {
        Self {
            disc,
            col,
            row,
            up: None,
            down: None,
            left: None,
            right: None,
        }
    }

    #[inline]
    pub fn disc(&self) -> Disc {
        self.disc
    }

    #[inline]
    pub fn col(&self) -> usize {
        self.col
    }

    /// Row index, 0 being the bottom row
    #[inline]
    pub fn row(&self) -> usize {
        self.row
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.disc.is_empty()
    }

    #[inline]
    pub fn up(&self) -> Option<CellId> {
        self.up
    }

    #[inline]
    pub fn down(&self) -> Option<CellId> {
        self.down
    }

    #[inline]
    pub fn left(&self) -> Option<CellId> {
        self.left
    }

    #[inline]
    pub fn right(&self) -> Option<CellId> {
        self.right
    }
}
