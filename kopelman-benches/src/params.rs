//! Benchmark parameter types.

use std::fmt;

/// Parameters for a labelling benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct LatticeBenchParams {
    /// Side length of the square lattice.
    pub side: usize,
    /// Probability that a site is occupied.
    pub occupancy: f64,
}

impl fmt::Display for LatticeBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L={},p={}", self.side, self.occupancy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_side_and_occupancy() {
        let params = LatticeBenchParams {
            side: 128,
            occupancy: 0.593,
        };
        assert_eq!(params.to_string(), "L=128,p=0.593");
    }
}
