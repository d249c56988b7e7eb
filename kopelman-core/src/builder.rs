//! Builder utilities for configuring lattice labelling.
//!
//! Exposes the boundary topology selection surface used before constructing
//! [`Labeller`] instances.

use crate::{boundary::Periodicity, labeller::Labeller};

/// Configures and constructs [`Labeller`] instances.
///
/// # Examples
/// ```
/// use kopelman_core::{LabellerBuilder, Periodicity};
///
/// let labeller = LabellerBuilder::new()
///     .with_periodic_rows(true)
///     .build();
/// assert_eq!(labeller.periodicity(), Periodicity::new(true, false));
/// ```
#[derive(Debug, Clone, Default)]
pub struct LabellerBuilder {
    periodicity: Periodicity,
}

impl LabellerBuilder {
    /// Creates a builder with open boundaries on both axes.
    ///
    /// # Examples
    /// ```
    /// use kopelman_core::{LabellerBuilder, Periodicity};
    ///
    /// let builder = LabellerBuilder::new();
    /// assert_eq!(builder.periodicity(), Periodicity::OPEN);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the boundary topology for both axes.
    ///
    /// # Examples
    /// ```
    /// use kopelman_core::{LabellerBuilder, Periodicity};
    ///
    /// let builder = LabellerBuilder::new().with_periodicity(Periodicity::TORUS);
    /// assert!(builder.periodicity().rows);
    /// assert!(builder.periodicity().cols);
    /// ```
    #[must_use]
    pub fn with_periodicity(mut self, periodicity: Periodicity) -> Self {
        self.periodicity = periodicity;
        self
    }

    /// Toggles wrapping between the first and last rows.
    #[must_use]
    pub fn with_periodic_rows(mut self, wrap: bool) -> Self {
        self.periodicity.rows = wrap;
        self
    }

    /// Toggles wrapping between the first and last columns.
    #[must_use]
    pub fn with_periodic_cols(mut self, wrap: bool) -> Self {
        self.periodicity.cols = wrap;
        self
    }

    /// Returns the currently configured boundary topology.
    #[must_use]
    pub fn periodicity(&self) -> Periodicity {
        self.periodicity
    }

    /// Constructs a [`Labeller`] from the configuration.
    ///
    /// # Examples
    /// ```
    /// use kopelman_core::{LabellerBuilder, Periodicity};
    ///
    /// let labeller = LabellerBuilder::new()
    ///     .with_periodic_rows(true)
    ///     .with_periodic_cols(true)
    ///     .build();
    /// assert_eq!(labeller.periodicity(), Periodicity::TORUS);
    /// ```
    #[must_use]
    pub fn build(self) -> Labeller {
        Labeller::new(self.periodicity)
    }
}
