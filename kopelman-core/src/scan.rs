//! Single raster pass assigning provisional class ids.
//!
//! Each foreground cell looks only at its upper and left neighbours. Two
//! labelled neighbours are merged in the forest rather than rewritten, so the
//! pass never revisits a cell; the relabeller resolves the equivalences later.

use crate::{forest::ClassForest, lattice::Lattice};

/// Decides which cells take part in clustering and which neighbours join.
pub(crate) trait Connectivity<T> {
    /// Whether `cell` belongs to any cluster at all.
    fn is_foreground(&self, cell: &T) -> bool;

    /// Whether two adjacent foreground cells share a cluster.
    fn connects(&self, cell: &T, neighbour: &T) -> bool;
}

/// Foreground cells equal the target; all foreground neighbours connect.
pub(crate) struct Target<'a, T>(pub(crate) &'a T);

impl<T: PartialEq> Connectivity<T> for Target<'_, T> {
    fn is_foreground(&self, cell: &T) -> bool {
        cell == self.0
    }

    fn connects(&self, _cell: &T, _neighbour: &T) -> bool {
        true
    }
}

/// Foreground cells satisfy the predicate; all foreground neighbours connect.
pub(crate) struct Predicate<F>(pub(crate) F);

impl<T, F: Fn(&T) -> bool> Connectivity<T> for Predicate<F> {
    fn is_foreground(&self, cell: &T) -> bool {
        (self.0)(cell)
    }

    fn connects(&self, _cell: &T, _neighbour: &T) -> bool {
        true
    }
}

/// Every cell is foreground; neighbours connect when their states are equal.
pub(crate) struct EqualStates;

impl<T: PartialEq> Connectivity<T> for EqualStates {
    fn is_foreground(&self, _cell: &T) -> bool {
        true
    }

    fn connects(&self, cell: &T, neighbour: &T) -> bool {
        cell == neighbour
    }
}

/// Labels every foreground cell with a provisional class id, `0` elsewhere.
pub(crate) fn scan<T, R>(lattice: &Lattice<T>, rule: &R, forest: &mut ClassForest) -> Vec<usize>
where
    R: Connectivity<T>,
{
    let cols = lattice.cols();
    let cells = lattice.as_slice();
    let mut sites = vec![0; cells.len()];

    for (index, cell) in cells.iter().enumerate() {
        if !rule.is_foreground(cell) {
            continue;
        }

        // Cells exist, so `cols` is non-zero.
        let up = if index >= cols {
            joined_label(&sites, cells, index - cols, cell, rule)
        } else {
            0
        };
        let left = if index % cols > 0 {
            joined_label(&sites, cells, index - 1, cell, rule)
        } else {
            0
        };

        sites[index] = match (up, left) {
            (0, 0) => forest.make_set(),
            (label, 0) | (0, label) => label,
            (up, left) => forest.union(up, left),
        };
    }

    sites
}

fn joined_label<T, R>(sites: &[usize], cells: &[T], neighbour: usize, cell: &T, rule: &R) -> usize
where
    R: Connectivity<T>,
{
    let label = sites[neighbour];
    if label != 0 && rule.connects(cell, &cells[neighbour]) {
        label
    } else {
        0
    }
}
