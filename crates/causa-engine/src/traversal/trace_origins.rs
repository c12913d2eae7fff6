//! Backward traversal ("what caused this?") over incoming links.

use std::collections::HashSet;

use causa_core::models::LinkId;

use crate::graph::LinkStore;
use crate::narrative::{render_chain, ConfidenceLevel};

use super::walker::{self, Walk};
use super::{
    link_ids, sort_by_confidence, total_delay, CauseExplanation, Direction, TraversalSpec,
};

/// Explain `effect` by its causes up to `max_steps` links upstream.
///
/// Confidence is the product of link necessities, not strengths: how much the
/// effect depends on each cause. Same single-pass visited policy as the
/// forward trace. The explanation text reads in causal order.
pub fn trace(
    store: &LinkStore,
    effect: &str,
    max_steps: usize,
    excluded: &HashSet<LinkId>,
) -> Vec<CauseExplanation> {
    let walk = Walk {
        spec: TraversalSpec::backward(max_steps),
        excluded,
        target: None,
    };

    let mut explanations: Vec<CauseExplanation> = walker::walk(store, effect, &walk)
        .into_iter()
        .map(|hit| {
            let links = hit.causal_order(Direction::Backward);
            CauseExplanation {
                cause: hit.reached.to_string(),
                effect: effect.to_string(),
                confidence: hit.confidence,
                confidence_level: ConfidenceLevel::from_score(hit.confidence),
                depth: links.len(),
                time_delay: total_delay(&links),
                path: link_ids(&links),
                explanation: render_chain(&links),
            }
        })
        .collect();

    sort_by_confidence(&mut explanations, |e| e.confidence);
    explanations
}
