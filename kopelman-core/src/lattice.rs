//! Rectangular occupancy lattices.
//!
//! A [`Lattice`] stores its cells in row-major order so that index
//! `row * cols + col` addresses cell `(row, col)`. Zero-sized dimensions are
//! permitted and describe an empty lattice.

use crate::error::{LatticeError, Result};

/// Immutable row-major grid of cells.
///
/// # Examples
/// ```
/// use kopelman_core::Lattice;
///
/// let lattice = Lattice::from_rows(vec![vec![1, 0], vec![0, 1]])?;
/// assert_eq!((lattice.rows(), lattice.cols()), (2, 2));
/// assert_eq!(lattice.get(1, 1), Some(&1));
/// assert_eq!(lattice.get(2, 0), None);
/// # Ok::<(), kopelman_core::LatticeError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lattice<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T> Lattice<T> {
    /// Builds a lattice from row-major `cells`.
    ///
    /// # Errors
    /// Returns [`LatticeError::SizeOverflow`] when `rows * cols` overflows and
    /// [`LatticeError::ShapeMismatch`] when `cells` does not hold exactly
    /// `rows * cols` entries.
    ///
    /// # Examples
    /// ```
    /// use kopelman_core::{Lattice, LatticeError};
    ///
    /// let lattice = Lattice::new(1, 3, vec![0, 1, 0])?;
    /// assert_eq!(lattice.len(), 3);
    ///
    /// let err = Lattice::new(2, 2, vec![0, 1, 0]).expect_err("three cells cannot fill 2x2");
    /// assert!(matches!(err, LatticeError::ShapeMismatch { cells: 3, .. }));
    /// # Ok::<(), LatticeError>(())
    /// ```
    pub fn new(rows: usize, cols: usize, cells: Vec<T>) -> Result<Self> {
        let expected = rows
            .checked_mul(cols)
            .ok_or(LatticeError::SizeOverflow { rows, cols })?;
        if cells.len() != expected {
            return Err(LatticeError::ShapeMismatch {
                rows,
                cols,
                cells: cells.len(),
            });
        }
        Ok(Self { rows, cols, cells })
    }

    /// Builds a lattice from nested rows.
    ///
    /// The width is taken from the first row; an empty outer vector yields a
    /// `0 x 0` lattice.
    ///
    /// # Errors
    /// Returns [`LatticeError::RaggedRow`] when any row differs in width from
    /// the first.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(height.saturating_mul(width));
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != width {
                return Err(LatticeError::RaggedRow {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
            cells.extend(values);
        }
        Self::new(height, width, cells)
    }

    /// Builds a lattice by evaluating `cell` for every `(row, col)` in
    /// row-major order.
    ///
    /// # Errors
    /// Returns [`LatticeError::SizeOverflow`] when `rows * cols` overflows.
    ///
    /// # Examples
    /// ```
    /// use kopelman_core::Lattice;
    ///
    /// let diagonal = Lattice::from_fn(3, 3, |row, col| u8::from(row == col))?;
    /// assert_eq!(diagonal.as_slice(), &[1, 0, 0, 0, 1, 0, 0, 0, 1]);
    /// # Ok::<(), kopelman_core::LatticeError>(())
    /// ```
    pub fn from_fn(rows: usize, cols: usize, mut cell: impl FnMut(usize, usize) -> T) -> Result<Self> {
        let size = rows
            .checked_mul(cols)
            .ok_or(LatticeError::SizeOverflow { rows, cols })?;
        let mut cells = Vec::with_capacity(size);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(cell(row, col));
            }
        }
        Self::new(rows, cols, cells)
    }

    /// Number of rows.
    #[must_use]
    #[rustfmt::skip]
    pub fn rows(&self) -> usize { self.rows }

    /// Number of columns.
    #[must_use]
    #[rustfmt::skip]
    pub fn cols(&self) -> usize { self.cols }

    /// Total number of cells.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.cells.len() }

    /// Returns whether the lattice has no cells.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.cells.is_empty() }

    /// Returns the cell at `(row, col)`, or `None` outside the lattice.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells.get(row * self.cols + col)
    }

    /// Cells in row-major order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    /// Iterates over the rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        // `chunks_exact` rejects a zero width, and a zero-width lattice has no cells.
        self.cells.chunks_exact(self.cols.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(0, 0)]
    #[case(0, 5)]
    #[case(4, 0)]
    fn zero_sized_dimensions_are_empty(#[case] rows: usize, #[case] cols: usize) {
        let lattice = Lattice::<u8>::new(rows, cols, Vec::new()).expect("empty lattice is valid");
        assert!(lattice.is_empty());
        assert_eq!(lattice.iter_rows().count(), 0);
        assert_eq!(lattice.get(0, 0), None);
    }

    #[test]
    fn new_rejects_overflowing_dimensions() {
        let err = Lattice::<u8>::new(usize::MAX, 2, Vec::new()).expect_err("overflow must fail");
        assert_eq!(
            err,
            LatticeError::SizeOverflow {
                rows: usize::MAX,
                cols: 2
            }
        );
    }

    #[test]
    fn from_rows_rejects_ragged_rows() {
        let err = Lattice::from_rows(vec![vec![1, 0, 1], vec![0, 1, 0], vec![1]])
            .expect_err("ragged rows must fail");
        assert_eq!(
            err,
            LatticeError::RaggedRow {
                row: 2,
                expected: 3,
                found: 1
            }
        );
    }

    #[test]
    fn from_rows_of_nothing_is_empty() {
        let lattice = Lattice::<i32>::from_rows(Vec::new()).expect("empty input is valid");
        assert_eq!((lattice.rows(), lattice.cols()), (0, 0));
    }

    #[test]
    fn get_addresses_row_major_cells() {
        let lattice = Lattice::new(2, 3, vec!['a', 'b', 'c', 'd', 'e', 'f']).expect("valid shape");
        assert_eq!(lattice.get(0, 2), Some(&'c'));
        assert_eq!(lattice.get(1, 0), Some(&'d'));
        assert_eq!(lattice.get(0, 3), None);
        let rows: Vec<&[char]> = lattice.iter_rows().collect();
        assert_eq!(rows, vec![&['a', 'b', 'c'][..], &['d', 'e', 'f'][..]]);
    }
}
