//! Path enumeration: all simple causal paths between two nodes, and
//! explicitly specified traversals.

use std::collections::HashSet;

use crate::graph::LinkStore;

use super::walker::{self, Walk};
use super::{sort_by_confidence, CausalPath, TraversalMode, TraversalSpec};

/// Every simple path from `from` to `to` with at most `max_length` links.
///
/// Uses an exhaustive walk: nodes are released from the visited set on
/// backtrack, so reconverging routes are all reported. Confidence is the
/// product of strengths. A node has no path to itself.
pub fn between(store: &LinkStore, from: &str, to: &str, max_length: usize) -> Vec<CausalPath> {
    if from == to {
        return Vec::new();
    }
    let excluded = HashSet::new();
    let walk = Walk {
        spec: TraversalSpec::forward(max_length).with_mode(TraversalMode::Exhaustive),
        excluded: &excluded,
        target: Some(to),
    };

    let direction = walk.spec.direction;
    let mut paths: Vec<CausalPath> = walker::walk(store, from, &walk)
        .into_iter()
        .map(|hit| CausalPath::from_links(&hit.causal_order(direction), hit.confidence))
        .collect();

    sort_by_confidence(&mut paths, |p| p.confidence);
    paths
}

/// One path per traversed link from `origin`, as directed by `spec`.
pub fn from_origin(store: &LinkStore, origin: &str, spec: TraversalSpec) -> Vec<CausalPath> {
    let excluded = HashSet::new();
    let walk = Walk {
        spec,
        excluded: &excluded,
        target: None,
    };

    let mut paths: Vec<CausalPath> = walker::walk(store, origin, &walk)
        .into_iter()
        .map(|hit| CausalPath::from_links(&hit.causal_order(spec.direction), hit.confidence))
        .collect();

    sort_by_confidence(&mut paths, |p| p.confidence);
    paths
}
