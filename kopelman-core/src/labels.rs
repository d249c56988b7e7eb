//! Result type for lattice labelling.
//!
//! Provides the canonical label grid produced by [`crate::Labeller`] together
//! with its cluster count.

/// Canonical cluster labels for every cell of a lattice.
///
/// Background cells carry `0`; foreground cells carry an id in `1..=K` where
/// `K` is [`Self::cluster_count`]. Ids are dense and appear in first-occurrence
/// row-major order.
///
/// # Examples
/// ```
/// use kopelman_core::{Labeller, Lattice};
///
/// let lattice = Lattice::from_rows(vec![vec![1, 0, 1], vec![1, 0, 1]])?;
/// let labels = Labeller::default().label(&lattice, &1);
/// assert_eq!(labels.cluster_count(), 2);
/// assert_eq!(labels.row(0), Some(&[1, 0, 2][..]));
/// assert_eq!(labels.get(1, 2), Some(2));
/// # Ok::<(), kopelman_core::LatticeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterLabels {
    rows: usize,
    cols: usize,
    labels: Vec<usize>,
    cluster_count: usize,
}

impl ClusterLabels {
    pub(crate) fn new(rows: usize, cols: usize, labels: Vec<usize>, cluster_count: usize) -> Self {
        debug_assert_eq!(labels.len(), rows * cols);
        Self {
            rows,
            cols,
            labels,
            cluster_count,
        }
    }

    /// Number of rows in the labelled lattice.
    #[must_use]
    #[rustfmt::skip]
    pub fn rows(&self) -> usize { self.rows }

    /// Number of columns in the labelled lattice.
    #[must_use]
    #[rustfmt::skip]
    pub fn cols(&self) -> usize { self.cols }

    /// Number of distinct clusters `K`.
    #[must_use]
    #[rustfmt::skip]
    pub fn cluster_count(&self) -> usize { self.cluster_count }

    /// Labels in row-major order.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.labels
    }

    /// Label of `(row, col)`, or `None` outside the lattice.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.labels.get(row * self.cols + col).copied()
    }

    /// Labels of a single row, or `None` past the last row.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[usize]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        self.labels.get(start..start + self.cols)
    }

    /// Iterates over the label rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[usize]> {
        (0..self.rows).filter_map(|row| self.row(row))
    }

    /// Consumes the result, returning the row-major labels.
    #[must_use]
    pub fn into_vec(self) -> Vec<usize> {
        self.labels
    }
}
