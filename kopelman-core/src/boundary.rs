//! Periodic boundary merging.
//!
//! After the raster scan, clusters touching opposite edges are joined in the
//! forest so the lattice behaves as a cylinder or torus. Unions commute, so
//! the row and column passes may run in either order.

use crate::{forest::ClassForest, lattice::Lattice, scan::Connectivity};

/// Selects which lattice axes wrap around.
///
/// # Examples
/// ```
/// use kopelman_core::Periodicity;
///
/// let torus = Periodicity::TORUS;
/// assert!(torus.rows && torus.cols);
/// assert!(!Periodicity::default().is_periodic());
/// assert_eq!(Periodicity::new(true, false), Periodicity { rows: true, cols: false });
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Periodicity {
    /// The first and last rows are adjacent.
    pub rows: bool,
    /// The first and last columns are adjacent.
    pub cols: bool,
}

impl Periodicity {
    /// Open boundaries on both axes.
    pub const OPEN: Self = Self::new(false, false);

    /// Both axes wrap.
    pub const TORUS: Self = Self::new(true, true);

    /// Creates a periodicity from per-axis flags.
    #[must_use]
    pub const fn new(rows: bool, cols: bool) -> Self {
        Self { rows, cols }
    }

    /// Whether any axis wraps.
    #[must_use]
    pub const fn is_periodic(self) -> bool {
        self.rows || self.cols
    }
}

/// Unions classes across every wrapped edge, returning how many opposite
/// cell pairs were joined.
pub(crate) fn merge_boundaries<T, R>(
    lattice: &Lattice<T>,
    sites: &[usize],
    rule: &R,
    forest: &mut ClassForest,
    periodicity: Periodicity,
) -> usize
where
    R: Connectivity<T>,
{
    let (rows, cols) = (lattice.rows(), lattice.cols());
    if lattice.is_empty() {
        return 0;
    }

    let cells = lattice.as_slice();
    let mut join = |first: usize, second: usize| -> bool {
        let (a, b) = (sites[first], sites[second]);
        if a == 0 || b == 0 || !rule.connects(&cells[first], &cells[second]) {
            return false;
        }
        forest.union(a, b);
        true
    };

    let mut joined = 0;
    // An axis of length one is already its own neighbour across the wrap.
    if periodicity.rows && rows > 1 {
        let last_row = (rows - 1) * cols;
        for col in 0..cols {
            joined += usize::from(join(col, last_row + col));
        }
    }
    if periodicity.cols && cols > 1 {
        for row in 0..rows {
            let first = row * cols;
            joined += usize::from(join(first, first + cols - 1));
        }
    }
    joined
}
