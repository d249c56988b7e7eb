//! Canonical relabelling of provisional class ids.

use crate::forest::ClassForest;

/// Rewrites every non-zero site with a dense id in `1..=K`, numbering roots in
/// the order the row-major pass first meets them, and returns `K`.
pub(crate) fn relabel(sites: &mut [usize], forest: &mut ClassForest) -> usize {
    let mut canonical = vec![0; forest.class_count() + 1];
    let mut clusters = 0;

    for site in sites.iter_mut().filter(|site| **site != 0) {
        let root = forest.find(*site);
        if canonical[root] == 0 {
            clusters += 1;
            canonical[root] = clusters;
        }
        *site = canonical[root];
    }

    clusters
}
