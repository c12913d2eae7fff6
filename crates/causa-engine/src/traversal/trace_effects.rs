//! Forward traversal ("what does this cause?") over outgoing links.

use std::collections::HashSet;

use causa_core::models::LinkId;

use crate::graph::LinkStore;
use crate::narrative::{render_chain, ConfidenceLevel};

use super::walker::{self, Walk};
use super::{link_ids, sort_by_confidence, total_delay, Direction, Prediction, TraversalSpec};

/// Predict the effects of `cause` up to `max_steps` links away.
///
/// Confidence is the product of link strengths. The visited set is never
/// backtracked, so each descendant is reported once, via the first path the
/// depth-first search reaches it by. Links in `excluded` are not followed.
pub fn trace(
    store: &LinkStore,
    cause: &str,
    max_steps: usize,
    excluded: &HashSet<LinkId>,
) -> Vec<Prediction> {
    let walk = Walk {
        spec: TraversalSpec::forward(max_steps),
        excluded,
        target: None,
    };

    let mut predictions: Vec<Prediction> = walker::walk(store, cause, &walk)
        .into_iter()
        .map(|hit| {
            let links = hit.causal_order(Direction::Forward);
            Prediction {
                cause: cause.to_string(),
                effect: hit.reached.to_string(),
                confidence: hit.confidence,
                confidence_level: ConfidenceLevel::from_score(hit.confidence),
                depth: links.len(),
                time_delay: total_delay(&links),
                path: link_ids(&links),
                explanation: render_chain(&links),
            }
        })
        .collect();

    sort_by_confidence(&mut predictions, |p| p.confidence);
    predictions
}
