//! Benchmark support crate for kopelman.
//!
//! Provides seeded synthetic lattices and parameter types used by the
//! Criterion labelling benchmarks.

pub mod error;
pub mod params;
pub mod source;
