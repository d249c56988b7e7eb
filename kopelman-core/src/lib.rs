//! Kopelman core library.
//!
//! Labels 4-connected clusters in rectangular lattices with the
//! Hoshen–Kopelman algorithm: one raster scan over a union-find forest, an
//! optional periodic boundary merge, then a canonical relabelling to dense ids
//! `1..=K`.
//!
//! # Metrics
//!
//! When the `metrics` feature is enabled every labelling call emits:
//!
//! - `lattice_labelling_runs` (counter)
//! - `lattice_cluster_count` (histogram)
#![cfg_attr(docsrs, feature(doc_cfg))]

mod boundary;
mod builder;
mod error;
mod forest;
mod labeller;
mod labels;
mod lattice;
mod relabel;
mod scan;

#[cfg(test)]
mod property;
#[cfg(test)]
pub(crate) mod test_utils;

pub use crate::{
    boundary::Periodicity,
    builder::LabellerBuilder,
    error::{LatticeError, LatticeErrorCode, Result},
    forest::ClassForest,
    labeller::{Labeller, label_clusters},
    labels::ClusterLabels,
    lattice::Lattice,
};
