//! Property-based tests for Hoshen–Kopelman labelling.
//!
//! Compares the labeller against a breadth-first flood fill under every
//! boundary topology and checks the structural guarantees of canonical
//! labels (dense ids, exact foreground partition, idempotence).

mod invariants;
mod strategies;
mod types;
