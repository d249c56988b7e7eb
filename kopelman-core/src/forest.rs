//! Disjoint-set forest backing the Hoshen–Kopelman scan.
//!
//! Classes are numbered from `1`; slot `0` of the parent table is reserved so
//! that a zero label can always mean "background". The forest grows on demand,
//! so [`ClassForest::capacity_hint`] is only a reservation size and never a
//! hard limit.

/// Equivalence classes of provisional cluster ids.
///
/// `union` always attaches the root of its first argument beneath the root of
/// its second argument, and returns that second root.
///
/// # Examples
/// ```
/// use kopelman_core::ClassForest;
///
/// let mut forest = ClassForest::with_capacity(4);
/// let a = forest.make_set();
/// let b = forest.make_set();
/// assert_eq!((a, b), (1, 2));
/// assert_eq!(forest.union(a, b), b);
/// assert_eq!(forest.find(a), b);
/// assert_eq!(forest.class_count(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct ClassForest {
    parent: Vec<usize>,
    allocated: usize,
}

impl ClassForest {
    /// Creates an empty forest.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty forest with room for `classes` ids before growing.
    #[must_use]
    pub fn with_capacity(classes: usize) -> Self {
        let mut parent = Vec::with_capacity(classes.saturating_add(1));
        parent.push(0);
        Self {
            parent,
            allocated: 0,
        }
    }

    /// Upper estimate of the classes a raster scan of `cells` cells can open.
    ///
    /// A checkerboard starts a new class on every other cell, giving
    /// `⌈cells / 2⌉`; the extra slot covers the reserved id `0`.
    ///
    /// # Examples
    /// ```
    /// use kopelman_core::ClassForest;
    ///
    /// assert_eq!(ClassForest::capacity_hint(9), 6);
    /// assert_eq!(ClassForest::capacity_hint(0), 1);
    /// ```
    #[must_use]
    pub const fn capacity_hint(cells: usize) -> usize {
        cells.div_ceil(2).saturating_add(1)
    }

    /// Number of classes allocated so far, including merged ones.
    #[must_use]
    pub fn class_count(&self) -> usize {
        self.allocated
    }

    /// Allocates a new singleton class and returns its id.
    pub fn make_set(&mut self) -> usize {
        self.allocated += 1;
        self.parent.push(self.allocated);
        self.allocated
    }

    /// Returns the root of the class containing `id`, repointing every node
    /// on the walked path directly at that root.
    ///
    /// # Panics
    /// Panics if `id` was never allocated by [`Self::make_set`].
    pub fn find(&mut self, id: usize) -> usize {
        let mut root = id;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = id;
        while self.parent[node] != node {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Merges the classes of `left` and `right`, returning the surviving root.
    ///
    /// # Panics
    /// Panics if either id was never allocated by [`Self::make_set`].
    pub fn union(&mut self, left: usize, right: usize) -> usize {
        let left = self.find(left);
        let right = self.find(right);
        self.parent[left] = right;
        right
    }
}

impl Default for ClassForest {
    fn default() -> Self {
        Self::new()
    }
}
