//! Intervention analysis: "if we force X, does Y follow?"
//!
//! Forcing a variable makes it exogenous: its own causes no longer explain
//! it. The engine models that by cutting every incoming link of every
//! intervened node. The cut is an exclusion set handed to the traversal, so
//! the shared link store is never edited and there is nothing to restore,
//! even when a query fails part-way.
//!
//! The forced value matters. A truthy value (`true`, a non-zero number, a
//! non-empty symbol) lets the node propagate along its outgoing links. A
//! falsy value switches the node off: it yields no downstream predictions.

pub mod counterfactual;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use causa_core::models::{ForcedValue, LinkId};

use crate::graph::LinkStore;
use crate::traversal::{trace_effects, Prediction};

/// An ordered set of forced assignments. Iteration follows insertion order;
/// forcing a node twice replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Intervention {
    assignments: Vec<(String, ForcedValue)>,
}

impl Intervention {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Intervention::set`].
    pub fn force(mut self, node: impl Into<String>, value: impl Into<ForcedValue>) -> Self {
        self.set(node, value);
        self
    }

    pub fn set(&mut self, node: impl Into<String>, value: impl Into<ForcedValue>) {
        let node = node.into();
        let value = value.into();
        match self.assignments.iter_mut().find(|(n, _)| *n == node) {
            Some((_, existing)) => *existing = value,
            None => self.assignments.push((node, value)),
        }
    }

    pub fn get(&self, node: &str) -> Option<&ForcedValue> {
        self.assignments
            .iter()
            .find(|(n, _)| n == node)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ForcedValue)> {
        self.assignments.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.assignments.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

impl<N, V> FromIterator<(N, V)> for Intervention
where
    N: Into<String>,
    V: Into<ForcedValue>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut intervention = Self::new();
        for (node, value) in iter {
            intervention.set(node, value);
        }
        intervention
    }
}

/// The first prediction under an intervention that reaches the target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterventionOutcome {
    /// The intervened node the prediction starts from.
    pub intervened: String,
    pub forced: ForcedValue,
    pub prediction: Prediction,
    /// Incoming links cut for the duration of the query.
    pub severed: Vec<LinkId>,
}

impl InterventionOutcome {
    pub fn confidence(&self) -> f64 {
        self.prediction.confidence
    }
}

/// Incoming links of every intervened node, in intervention order.
pub fn severed_links(store: &LinkStore, intervention: &Intervention) -> Vec<LinkId> {
    let mut severed = Vec::new();
    for node in intervention.nodes() {
        severed.extend(store.causes_of(node).into_iter().map(|l| l.id.clone()));
    }
    severed
}

/// Predict whether `target_effect` follows from the intervention.
///
/// Intervened nodes are tried in order; the first one whose forward search
/// (bounded by `max_steps`, over the cut graph) reaches the target wins, and
/// its highest-confidence prediction for the target is returned.
pub fn predict(
    store: &LinkStore,
    intervention: &Intervention,
    target_effect: &str,
    max_steps: usize,
) -> Option<InterventionOutcome> {
    let severed = severed_links(store, intervention);
    let excluded: HashSet<LinkId> = severed.iter().cloned().collect();

    for (node, forced) in intervention.iter() {
        if !forced.is_truthy() {
            continue;
        }
        let hit = trace_effects::trace(store, node, max_steps, &excluded)
            .into_iter()
            .find(|p| p.effect == target_effect);
        if let Some(prediction) = hit {
            return Some(InterventionOutcome {
                intervened: node.to_string(),
                forced: forced.clone(),
                prediction,
                severed,
            });
        }
    }
    None
}
