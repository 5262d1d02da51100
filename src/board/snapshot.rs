//! Validated, bottom-up copy of the caller's raw board

use super::Disc;
use crate::error::{Error, Result};

/// A rectangular board with row 0 at the bottom.
///
/// The caller hands over columns listed top to bottom; each column is
/// reversed here so every other module can count rows upward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    columns: Vec<Vec<Disc>>,
    rows: usize,
}

impl Snapshot {
    /// Validate and normalize a column-major raw board.
    ///
    /// Fails on a board with no columns, with zero rows, or with columns of
    /// differing lengths.
    pub fn from_raw(raw: &[Vec<Disc>]) -> Result<Self> {
        let first = raw.first().ok_or(Error::EmptyBoard)?;
        let rows = first.len();
        if rows == 0 {
            return Err(Error::NoRows);
        }

        let columns = raw
            .iter()
            .enumerate()
            .map(|(column, discs)| {
                if discs.len() != rows {
                    return Err(Error::RaggedBoard {
                        column,
                        expected: rows,
                        got: discs.len(),
                    });
                }
                Ok(discs.iter().rev().copied().collect())
            })
            .collect::<Result<Vec<Vec<Disc>>>>()?;

        Ok(Self { columns, rows })
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.columns.len()
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Disc at (col, row) counted from the bottom
    #[inline]
    pub fn get(&self, col: usize, row: usize) -> Disc {
        self.columns
            .get(col)
            .and_then(|c| c.get(row))
            .copied()
            .unwrap_or(Disc::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverses_each_column() {
        let raw = vec![
            vec![Disc::Empty, Disc::Yellow, Disc::Red],
            vec![Disc::Empty, Disc::Empty, Disc::Yellow],
        ];
        let snap = Snapshot::from_raw(&raw).unwrap();
        assert_eq!(snap.cols(), 2);
        assert_eq!(snap.rows(), 3);
        assert_eq!(snap.get(0, 0), Disc::Red);
        assert_eq!(snap.get(0, 1), Disc::Yellow);
        assert_eq!(snap.get(0, 2), Disc::Empty);
        assert_eq!(snap.get(1, 0), Disc::Yellow);
    }

    #[test]
    fn test_does_not_touch_caller_board() {
        let raw = vec![vec![Disc::Empty, Disc::Red]];
        let _ = Snapshot::from_raw(&raw).unwrap();
        assert_eq!(raw[0], vec![Disc::Empty, Disc::Red]);
    }

    #[test]
    fn test_rejects_empty_board() {
        assert_eq!(Snapshot::from_raw(&[]), Err(Error::EmptyBoard));
        assert_eq!(Snapshot::from_raw(&[vec![]]), Err(Error::NoRows));
    }

    #[test]
    fn test_rejects_ragged_board() {
        let raw = vec![vec![Disc::Empty; 6], vec![Disc::Empty; 6], vec![Disc::Empty; 5]];
        assert_eq!(
            Snapshot::from_raw(&raw),
            Err(Error::RaggedBoard {
                column: 2,
                expected: 6,
                got: 5
            })
        );
    }

    #[test]
    fn test_out_of_range_reads_empty() {
        let snap = Snapshot::from_raw(&[vec![Disc::Red]]).unwrap();
        assert_eq!(snap.get(4, 0), Disc::Empty);
        assert_eq!(snap.get(0, 9), Disc::Empty);
    }
}
