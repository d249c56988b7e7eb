//! Seeded site-percolation lattices for benchmarks.

use kopelman_core::Lattice;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::error::BenchSetupError;

/// Configuration for [`SyntheticLattice::generate`].
#[derive(Clone, Copy, Debug)]
pub struct SyntheticConfig {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
    /// Probability that a site holds `1`.
    pub occupancy: f64,
    /// Seed for the generator.
    pub seed: u64,
}

/// Generator for Bernoulli-occupied `0`/`1` lattices.
#[derive(Clone, Copy, Debug)]
pub struct SyntheticLattice;

impl SyntheticLattice {
    /// Generates a lattice whose sites are independently `1` with the
    /// configured occupancy.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::InvalidOccupancy`] when the occupancy is
    /// outside `[0, 1]` and [`BenchSetupError::Lattice`] when the shape
    /// overflows.
    pub fn generate(config: &SyntheticConfig) -> Result<Lattice<u8>, BenchSetupError> {
        if !(0.0..=1.0).contains(&config.occupancy) {
            return Err(BenchSetupError::InvalidOccupancy {
                occupancy: config.occupancy,
            });
        }
        let mut rng = SmallRng::seed_from_u64(config.seed);
        Ok(Lattice::from_fn(config.rows, config.cols, |_, _| {
            u8::from(rng.gen_bool(config.occupancy))
        })?)
    }

    /// Generates a lattice of `states` distinct values, for colour labelling.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::Lattice`] when the shape overflows.
    pub fn generate_states(
        rows: usize,
        cols: usize,
        states: u8,
        seed: u64,
    ) -> Result<Lattice<u8>, BenchSetupError> {
        let mut rng = SmallRng::seed_from_u64(seed);
        let upper = states.max(1);
        Ok(Lattice::from_fn(rows, cols, |_, _| rng.gen_range(0..upper))?)
    }
}
