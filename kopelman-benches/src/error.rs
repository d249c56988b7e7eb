//! Benchmark setup error type.

use kopelman_core::LatticeError;

/// Errors that may occur while preparing benchmark lattices.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// The requested lattice shape was rejected.
    #[error("lattice construction failed: {0}")]
    Lattice(#[from] LatticeError),
    /// The occupation probability fell outside `[0, 1]`.
    #[error("occupancy must lie in [0, 1], got {occupancy}")]
    InvalidOccupancy {
        /// Value that was supplied.
        occupancy: f64,
    },
}
