//! Type definitions for labelling property tests.

use test_strategy::Arbitrary;

use crate::{Lattice, Periodicity};

/// Occupancy regime used when generating lattices.
///
/// Site percolation on the square lattice turns critical near `p ≈ 0.593`,
/// where clusters are largest and most tortuous, so that regime is weighted
/// most heavily.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum Density {
    /// Few, mostly isolated occupied cells.
    #[weight(1)]
    Sparse,
    /// Occupancy close to the percolation threshold.
    #[weight(3)]
    Critical,
    /// Nearly full lattices dominated by one spanning cluster.
    #[weight(1)]
    Dense,
    /// Alternating occupancy that opens the maximum number of classes.
    #[weight(1)]
    Checkerboard,
}

impl Density {
    /// Probability that a cell is occupied for the random regimes.
    pub(super) fn occupancy(self) -> f64 {
        match self {
            Self::Sparse => 0.2,
            Self::Critical => 0.593,
            Self::Dense => 0.9,
            Self::Checkerboard => 0.5,
        }
    }
}

/// Generated lattice plus the context needed to diagnose failures.
#[derive(Clone, Debug)]
pub(super) struct LatticeFixture {
    /// Occupancy lattice; `1` is occupied, `0` is empty.
    pub lattice: Lattice<u8>,
    /// Boundary topology to label under.
    pub periodicity: Periodicity,
    /// Regime the lattice was drawn from.
    pub density: Density,
}

/// Generated multi-state lattice for colour-mode properties.
#[derive(Clone, Debug)]
pub(super) struct StateFixture {
    /// Cell states drawn from `0..states`.
    pub lattice: Lattice<u8>,
    /// Boundary topology to label under.
    pub periodicity: Periodicity,
}
