//! Hoshen–Kopelman labelling orchestration.
//!
//! Provides the [`Labeller`] entry point, which runs the raster scan, the
//! optional periodic merge and the canonical relabelling over a single
//! call-local forest.

use tracing::{debug, info, instrument};

use crate::{
    boundary::{Periodicity, merge_boundaries},
    forest::ClassForest,
    labels::ClusterLabels,
    lattice::Lattice,
    relabel::relabel,
    scan::{Connectivity, EqualStates, Predicate, Target, scan},
};

/// Entry point for labelling clusters in a lattice.
///
/// A `Labeller` only carries configuration; every call builds and discards its
/// own forest, so one instance may be shared freely across threads.
///
/// # Examples
/// ```
/// use kopelman_core::{Labeller, Lattice, Periodicity};
///
/// let lattice = Lattice::from_rows(vec![vec![1], vec![0], vec![1]])?;
/// assert_eq!(Labeller::default().label(&lattice, &1).cluster_count(), 2);
///
/// let wrapped = Labeller::new(Periodicity::new(true, false)).label(&lattice, &1);
/// assert_eq!(wrapped.cluster_count(), 1);
/// assert_eq!(wrapped.as_slice(), &[1, 0, 1]);
/// # Ok::<(), kopelman_core::LatticeError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Labeller {
    periodicity: Periodicity,
}

impl Labeller {
    /// Creates a labeller for the given boundary topology.
    #[must_use]
    pub const fn new(periodicity: Periodicity) -> Self {
        Self { periodicity }
    }

    /// Returns the boundary topology applied by this labeller.
    #[must_use]
    pub const fn periodicity(&self) -> Periodicity {
        self.periodicity
    }

    /// Labels the clusters formed by cells equal to `target`.
    ///
    /// # Examples
    /// ```
    /// use kopelman_core::{Labeller, Lattice};
    ///
    /// let lattice = Lattice::from_rows(vec![
    ///     vec![1, 1, 0],
    ///     vec![0, 1, 0],
    ///     vec![0, 1, 1],
    /// ])?;
    /// let labels = Labeller::default().label(&lattice, &1);
    /// assert_eq!(labels.cluster_count(), 1);
    /// assert_eq!(labels.as_slice(), &[1, 1, 0, 0, 1, 0, 0, 1, 1]);
    /// # Ok::<(), kopelman_core::LatticeError>(())
    /// ```
    #[instrument(
        name = "core.label",
        skip(self, lattice, target),
        fields(
            rows = lattice.rows(),
            cols = lattice.cols(),
            periodic_rows = self.periodicity.rows,
            periodic_cols = self.periodicity.cols,
        ),
    )]
    #[must_use]
    pub fn label<T: PartialEq>(&self, lattice: &Lattice<T>, target: &T) -> ClusterLabels {
        self.run(lattice, &Target(target))
    }

    /// Labels the clusters formed by cells for which `foreground` holds.
    ///
    /// # Examples
    /// ```
    /// use kopelman_core::{Labeller, Lattice};
    ///
    /// let heights = Lattice::from_rows(vec![vec![0.9, 0.2], vec![0.1, 0.8]])?;
    /// let labels = Labeller::default().label_where(&heights, |h| *h > 0.5);
    /// assert_eq!(labels.cluster_count(), 2);
    /// # Ok::<(), kopelman_core::LatticeError>(())
    /// ```
    #[instrument(
        name = "core.label_where",
        skip(self, lattice, foreground),
        fields(
            rows = lattice.rows(),
            cols = lattice.cols(),
            periodic_rows = self.periodicity.rows,
            periodic_cols = self.periodicity.cols,
        ),
    )]
    #[must_use]
    pub fn label_where<T, F>(&self, lattice: &Lattice<T>, foreground: F) -> ClusterLabels
    where
        F: Fn(&T) -> bool,
    {
        self.run(lattice, &Predicate(foreground))
    }

    /// Labels every cell, joining neighbours that hold equal states.
    ///
    /// No cell is background, so every label is positive.
    ///
    /// # Examples
    /// ```
    /// use kopelman_core::{Labeller, Lattice};
    ///
    /// let spins = Lattice::from_rows(vec![vec!['+', '-'], vec!['+', '+']])?;
    /// let labels = Labeller::default().colour(&spins);
    /// assert_eq!(labels.cluster_count(), 2);
    /// assert_eq!(labels.as_slice(), &[1, 2, 1, 1]);
    /// # Ok::<(), kopelman_core::LatticeError>(())
    /// ```
    #[instrument(
        name = "core.colour",
        skip(self, lattice),
        fields(
            rows = lattice.rows(),
            cols = lattice.cols(),
            periodic_rows = self.periodicity.rows,
            periodic_cols = self.periodicity.cols,
        ),
    )]
    #[must_use]
    pub fn colour<T: PartialEq>(&self, lattice: &Lattice<T>) -> ClusterLabels {
        self.run(lattice, &EqualStates)
    }

    fn run<T, R>(&self, lattice: &Lattice<T>, rule: &R) -> ClusterLabels
    where
        R: Connectivity<T>,
    {
        let mut forest = ClassForest::with_capacity(ClassForest::capacity_hint(lattice.len()));
        let mut sites = scan(lattice, rule, &mut forest);
        debug!(
            provisional_classes = forest.class_count(),
            "raster scan completed"
        );

        if self.periodicity.is_periodic() {
            let joined = merge_boundaries(lattice, &sites, rule, &mut forest, self.periodicity);
            debug!(joined_pairs = joined, "periodic boundaries merged");
        }

        let clusters = relabel(&mut sites, &mut forest);
        record_metrics(clusters);
        info!(clusters, "labelling completed");
        ClusterLabels::new(lattice.rows(), lattice.cols(), sites, clusters)
    }
}

/// Labels the clusters of `target` cells in a single call.
///
/// # Examples
/// ```
/// use kopelman_core::{Lattice, Periodicity, label_clusters};
///
/// let lattice = Lattice::new(1, 4, vec![1, 0, 0, 1])?;
/// assert_eq!(label_clusters(&lattice, &1, Periodicity::OPEN).cluster_count(), 2);
/// assert_eq!(label_clusters(&lattice, &1, Periodicity::TORUS).cluster_count(), 1);
/// # Ok::<(), kopelman_core::LatticeError>(())
/// ```
#[must_use]
pub fn label_clusters<T: PartialEq>(
    lattice: &Lattice<T>,
    target: &T,
    periodicity: Periodicity,
) -> ClusterLabels {
    Labeller::new(periodicity).label(lattice, target)
}

#[cfg(feature = "metrics")]
fn record_metrics(clusters: usize) {
    metrics::counter!("lattice_labelling_runs").increment(1);
    metrics::histogram!("lattice_cluster_count").record(clusters as f64);
}

#[cfg(not(feature = "metrics"))]
const fn record_metrics(_clusters: usize) {}
