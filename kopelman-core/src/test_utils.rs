//! Shared test utilities for `kopelman-core`.

use std::collections::VecDeque;

use kopelman_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::{Lattice, Periodicity};

/// Builds a standard proptest configuration from the shared CI profile.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Breadth-first flood fill used as a trusted reference labelling.
///
/// Returns per-cell component ids (`0` for background, `1..` in
/// first-occurrence order) and the component count. Cells connect when both
/// are foreground and `connects` accepts them.
pub(crate) fn flood_fill<T>(
    lattice: &Lattice<T>,
    periodicity: Periodicity,
    is_foreground: impl Fn(&T) -> bool,
    connects: impl Fn(&T, &T) -> bool,
) -> (Vec<usize>, usize) {
    let (rows, cols) = (lattice.rows(), lattice.cols());
    let cells = lattice.as_slice();
    let mut labels = vec![0; cells.len()];
    let mut components = 0;
    let mut queue = VecDeque::new();

    for start in 0..cells.len() {
        if labels[start] != 0 || !is_foreground(&cells[start]) {
            continue;
        }
        components += 1;
        labels[start] = components;
        queue.push_back(start);

        while let Some(index) = queue.pop_front() {
            for neighbour in neighbours(index, rows, cols, periodicity) {
                if labels[neighbour] == 0
                    && is_foreground(&cells[neighbour])
                    && connects(&cells[index], &cells[neighbour])
                {
                    labels[neighbour] = components;
                    queue.push_back(neighbour);
                }
            }
        }
    }

    (labels, components)
}

fn neighbours(index: usize, rows: usize, cols: usize, periodicity: Periodicity) -> Vec<usize> {
    let (row, col) = (index / cols, index % cols);
    let mut out = Vec::with_capacity(4);
    let mut push = |r: usize, c: usize| out.push(r * cols + c);

    if row > 0 {
        push(row - 1, col);
    } else if periodicity.rows {
        push(rows - 1, col);
    }
    if row + 1 < rows {
        push(row + 1, col);
    } else if periodicity.rows {
        push(0, col);
    }
    if col > 0 {
        push(row, col - 1);
    } else if periodicity.cols {
        push(row, cols - 1);
    }
    if col + 1 < cols {
        push(row, col + 1);
    } else if periodicity.cols {
        push(row, 0);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flood_fill_wraps_when_periodic() {
        let lattice = Lattice::new(1, 3, vec![1, 0, 1]).expect("valid shape");
        let (_, open) = flood_fill(&lattice, Periodicity::OPEN, |c| *c == 1, |_, _| true);
        let (labels, wrapped) =
            flood_fill(&lattice, Periodicity::new(false, true), |c| *c == 1, |_, _| true);
        assert_eq!(open, 2);
        assert_eq!(wrapped, 1);
        assert_eq!(labels, vec![1, 0, 1]);
    }
}
