//! Counterfactual comparison: the same target under an actual and a
//! hypothetical intervention.

use serde::{Deserialize, Serialize};

use crate::graph::LinkStore;

use super::{predict, Intervention, InterventionOutcome};

/// Outcomes of both scenarios and how far apart their confidences are.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CounterfactualComparison {
    pub actual_outcome: Option<InterventionOutcome>,
    pub counterfactual_outcome: Option<InterventionOutcome>,
    /// Absolute confidence difference when both outcomes exist, else 0.
    pub difference: f64,
}

/// Run both scenarios against the same store.
pub fn compare(
    store: &LinkStore,
    actual: &Intervention,
    counterfactual: &Intervention,
    target_effect: &str,
    max_steps: usize,
) -> CounterfactualComparison {
    let actual_outcome = predict(store, actual, target_effect, max_steps);
    let counterfactual_outcome = predict(store, counterfactual, target_effect, max_steps);

    let difference = match (&actual_outcome, &counterfactual_outcome) {
        (Some(a), Some(c)) => (a.confidence() - c.confidence()).abs(),
        _ => 0.0,
    };

    CounterfactualComparison {
        actual_outcome,
        counterfactual_outcome,
        difference,
    }
}
