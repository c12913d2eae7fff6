//! Depth-first walker shared by every traversal.

use std::collections::HashSet;

use causa_core::models::{CausalLink, LinkId};

use crate::graph::LinkStore;

use super::{Direction, TraversalMode, TraversalSpec};

/// Parameters of one walk beyond its [`TraversalSpec`].
pub(crate) struct Walk<'a> {
    pub spec: TraversalSpec,
    /// Links the walker must not follow.
    pub excluded: &'a HashSet<LinkId>,
    /// When set, only paths ending here are reported, and the walk does not
    /// expand past it.
    pub target: Option<&'a str>,
}

/// A node reached by the walk.
pub(crate) struct Hit<'g> {
    pub reached: &'g str,
    pub confidence: f64,
    /// Links in walk order: away from the origin.
    pub path: Vec<&'g CausalLink>,
}

impl<'g> Hit<'g> {
    /// The path in cause → effect order regardless of walk direction.
    pub fn causal_order(&self, direction: Direction) -> Vec<&'g CausalLink> {
        let mut links = self.path.clone();
        if direction == Direction::Backward {
            links.reverse();
        }
        links
    }
}

/// A node on the walk's stack and the links it has left to try.
struct Frame<'g> {
    node: &'g str,
    confidence: f64,
    links: std::vec::IntoIter<&'g CausalLink>,
}

/// Walk from `origin`, emitting one hit per traversed link.
///
/// Depth-first over an explicit frame stack, so path depth is bounded by
/// memory rather than by the native call stack.
pub(crate) fn walk<'g>(store: &'g LinkStore, origin: &str, walk: &Walk<'_>) -> Vec<Hit<'g>> {
    let mut hits = Vec::new();
    if walk.spec.max_depth == 0 {
        return hits;
    }
    let Some(origin) = store.concept_key(origin) else {
        return hits;
    };

    let mut visited = HashSet::new();
    visited.insert(origin);
    let mut path: Vec<&'g CausalLink> = Vec::new();
    let mut stack = vec![Frame {
        node: origin,
        confidence: 1.0,
        links: store.adjacent(origin, walk.spec.direction).into_iter(),
    }];

    while let Some(frame) = stack.last_mut() {
        let Some(link) = frame.links.next() else {
            let node = frame.node;
            stack.pop();
            // Every frame but the origin's was entered through a path link.
            if !stack.is_empty() {
                path.pop();
                if walk.spec.mode == TraversalMode::Exhaustive {
                    visited.remove(node);
                }
            }
            continue;
        };

        if walk.excluded.contains(&link.id) {
            continue;
        }
        let next = match walk.spec.direction {
            Direction::Forward => link.effect.as_str(),
            Direction::Backward => link.cause.as_str(),
        };
        if visited.contains(next) {
            continue;
        }

        let next_confidence = frame.confidence * walk.spec.weighting.weight(link);
        visited.insert(next);
        path.push(link);

        if walk.target.map_or(true, |t| t == next) {
            hits.push(Hit {
                reached: next,
                confidence: next_confidence,
                path: path.clone(),
            });
        }

        // The target and the depth bound end a path; the frame still goes on
        // the stack so the backtrack above stays uniform.
        let expand = path.len() < walk.spec.max_depth && walk.target != Some(next);
        let links = if expand {
            store.adjacent(next, walk.spec.direction)
        } else {
            Vec::new()
        };
        stack.push(Frame {
            node: next,
            confidence: next_confidence,
            links: links.into_iter(),
        });
    }
    hits
}
