//! Property runners shared by the proptest and rstest suites.
//!
//! Each runner labels a fixture and reports the first violated guarantee
//! together with the fixture context.

use std::collections::BTreeSet;

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::test_utils::flood_fill;
use crate::{ClusterLabels, Labeller};

use super::types::{LatticeFixture, StateFixture};

/// Labels must match a flood fill under the same topology.
///
/// Both number components in first-occurrence row-major order, so equal
/// partitions produce identical label vectors, not merely equal counts.
pub(super) fn run_flood_fill_equivalence_property(fixture: &LatticeFixture) -> TestCaseResult {
    let labels = Labeller::new(fixture.periodicity).label(&fixture.lattice, &1);
    let (expected, components) =
        flood_fill(&fixture.lattice, fixture.periodicity, |c| *c == 1, |_, _| true);

    if labels.cluster_count() != components {
        return Err(TestCaseError::fail(format!(
            "cluster count mismatch: labeller={}, flood fill={components} ({})",
            labels.cluster_count(),
            describe(fixture),
        )));
    }
    if labels.as_slice() != expected.as_slice() {
        return Err(TestCaseError::fail(format!(
            "label grids differ ({}): labeller={:?}, flood fill={expected:?}",
            describe(fixture),
            labels.as_slice(),
        )));
    }
    Ok(())
}

/// Labels must be dense, exact over the foreground and zero elsewhere.
pub(super) fn run_canonical_labels_property(fixture: &LatticeFixture) -> TestCaseResult {
    let labels = Labeller::new(fixture.periodicity).label(&fixture.lattice, &1);

    for (index, (&cell, &label)) in fixture
        .lattice
        .as_slice()
        .iter()
        .zip(labels.as_slice())
        .enumerate()
    {
        if (cell == 1) != (label != 0) {
            return Err(TestCaseError::fail(format!(
                "cell {index} has occupancy {cell} but label {label} ({})",
                describe(fixture),
            )));
        }
    }

    check_dense(&labels).map_err(|reason| {
        TestCaseError::fail(format!("{reason} ({})", describe(fixture)))
    })
}

/// Relabelling a canonical grid with "non-zero" as foreground is a no-op.
pub(super) fn run_idempotence_property(fixture: &LatticeFixture) -> TestCaseResult {
    let labeller = Labeller::new(fixture.periodicity);
    let first = labeller.label(&fixture.lattice, &1);
    let grid = crate::Lattice::new(first.rows(), first.cols(), first.as_slice().to_vec())
        .map_err(|e| TestCaseError::fail(format!("label grid rejected: {e}")))?;
    let second = labeller.label_where(&grid, |label| *label != 0);

    if first != second {
        return Err(TestCaseError::fail(format!(
            "relabelling changed the grid ({}): first={:?}, second={:?}",
            describe(fixture),
            first.as_slice(),
            second.as_slice(),
        )));
    }
    Ok(())
}

/// Colour mode must match a flood fill that joins equal neighbours.
pub(super) fn run_colour_equivalence_property(fixture: &StateFixture) -> TestCaseResult {
    let labels = Labeller::new(fixture.periodicity).colour(&fixture.lattice);
    let (expected, components) =
        flood_fill(&fixture.lattice, fixture.periodicity, |_| true, |a, b| a == b);

    if labels.cluster_count() != components || labels.as_slice() != expected.as_slice() {
        return Err(TestCaseError::fail(format!(
            "colour labels differ: labeller K={} {:?}, flood fill K={components} {expected:?} \
             (shape={}x{}, periodicity={:?})",
            labels.cluster_count(),
            labels.as_slice(),
            fixture.lattice.rows(),
            fixture.lattice.cols(),
            fixture.periodicity,
        )));
    }
    if labels.as_slice().contains(&0) {
        return Err(TestCaseError::fail("colour mode left a cell unlabelled"));
    }
    check_dense(&labels).map_err(TestCaseError::fail)
}

fn check_dense(labels: &ClusterLabels) -> Result<(), String> {
    let seen: BTreeSet<usize> = labels
        .as_slice()
        .iter()
        .copied()
        .filter(|&label| label != 0)
        .collect();
    let expected: BTreeSet<usize> = (1..=labels.cluster_count()).collect();
    if seen == expected {
        Ok(())
    } else {
        Err(format!(
            "labels {seen:?} are not exactly 1..={}",
            labels.cluster_count()
        ))
    }
}

fn describe(fixture: &LatticeFixture) -> String {
    format!(
        "density={:?}, shape={}x{}, periodicity={:?}",
        fixture.density,
        fixture.lattice.rows(),
        fixture.lattice.cols(),
        fixture.periodicity,
    )
}
