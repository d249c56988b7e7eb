//! Strategy builders for labelling property tests.
//!
//! Lattices are generated from a proptest-chosen seed so failing cases can be
//! replayed deterministically through the rstest cases in `tests.rs`.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{Lattice, Periodicity};

use super::types::{Density, LatticeFixture, StateFixture};

/// Largest side length generated; zero-sized sides are included.
const MAX_SIDE: usize = 24;
/// Largest number of distinct states in colour-mode lattices.
const MAX_STATES: u8 = 4;

/// Generates occupancy fixtures across densities, shapes and topologies.
pub(super) fn lattice_fixture_strategy() -> impl Strategy<Value = LatticeFixture> {
    (
        any::<Density>(),
        0..=MAX_SIDE,
        0..=MAX_SIDE,
        any::<(bool, bool)>(),
        any::<u64>(),
    )
        .prop_map(|(density, rows, cols, (wrap_rows, wrap_cols), seed)| {
            let mut rng = SmallRng::seed_from_u64(seed);
            generate_fixture(density, rows, cols, Periodicity::new(wrap_rows, wrap_cols), &mut rng)
        })
}

/// Generates multi-state fixtures for colour-mode labelling.
pub(super) fn state_fixture_strategy() -> impl Strategy<Value = StateFixture> {
    (
        0..=MAX_SIDE,
        0..=MAX_SIDE,
        2..=MAX_STATES,
        any::<(bool, bool)>(),
        any::<u64>(),
    )
        .prop_map(|(rows, cols, states, (wrap_rows, wrap_cols), seed)| {
            let mut rng = SmallRng::seed_from_u64(seed);
            let lattice = Lattice::from_fn(rows, cols, |_, _| rng.gen_range(0..states))
                .expect("bounded sides cannot overflow");
            StateFixture {
                lattice,
                periodicity: Periodicity::new(wrap_rows, wrap_cols),
            }
        })
}

/// Generates a fixture for an explicit regime and shape.
pub(super) fn generate_fixture(
    density: Density,
    rows: usize,
    cols: usize,
    periodicity: Periodicity,
    rng: &mut SmallRng,
) -> LatticeFixture {
    let lattice = match density {
        Density::Checkerboard => {
            let phase = usize::from(rng.gen_bool(0.5));
            Lattice::from_fn(rows, cols, |row, col| u8::from((row + col + phase) % 2 == 0))
        }
        _ => {
            let p = density.occupancy();
            Lattice::from_fn(rows, cols, |_, _| u8::from(rng.gen_bool(p)))
        }
    }
    .expect("bounded sides cannot overflow");

    LatticeFixture {
        lattice,
        periodicity,
        density,
    }
}
