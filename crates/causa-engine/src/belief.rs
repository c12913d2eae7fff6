//! Bayesian revision of link strength from hypothesis-tagged evidence.
//!
//! `P(H|E) = lt·p / (lt·p + lf·(1 − p))`, where `lt` is the likelihood of the
//! evidence if the link holds and `lf` if it does not. Supporting evidence
//! uses `(r, 1 − r)` with `r` the evidence reliability; contradicting evidence
//! swaps the roles. Each link is revised on its own; there is no
//! renormalization across competing links.

use serde::{Deserialize, Serialize};

use causa_core::config::EvidenceConfig;
use causa_core::models::{CausalLink, Evidence, LinkId, Probability, Stance};

use crate::graph::LinkStore;

/// Posterior of a hypothesis given prior `prior` and the two likelihoods.
///
/// A zero or non-finite denominator leaves the prior unchanged.
pub fn posterior(prior: f64, likelihood_true: f64, likelihood_false: f64) -> f64 {
    let numerator = likelihood_true * prior;
    let denominator = numerator + likelihood_false * (1.0 - prior);
    if denominator <= 0.0 || !denominator.is_finite() {
        return prior;
    }
    Probability::new(numerator / denominator).value()
}

/// Record of one Bayesian step, for logging and callers that want the delta.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeliefUpdate {
    pub link: CausalLink,
    /// Strength after the evidence bump, before the Bayesian step.
    pub prior: f64,
    /// `None` when the evidence does not bear on this link.
    pub stance: Option<Stance>,
}

impl BeliefUpdate {
    pub fn posterior(&self) -> f64 {
        self.link.strength.value()
    }
}

/// Append `evidence` to the link, then revise its strength if the evidence
/// names this link as its hypothesis. Unknown ids change nothing.
pub fn update_model(
    store: &mut LinkStore,
    link_id: &LinkId,
    evidence: Evidence,
    config: &EvidenceConfig,
) -> Option<BeliefUpdate> {
    let stance = evidence.stance_on(link_id);
    let reliability = evidence.reliability;

    let prior = store.add_evidence(link_id, evidence, config)?.strength.value();

    if let Some(stance) = stance {
        let updated = match stance {
            Stance::Supports => posterior(
                prior,
                reliability.value(),
                reliability.complement().value(),
            ),
            Stance::Contradicts => posterior(
                prior,
                reliability.complement().value(),
                reliability.value(),
            ),
        };
        store.set_strength(link_id, updated)?;
    }

    let link = store.get(link_id)?.clone();
    Some(BeliefUpdate {
        link,
        prior,
        stance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supporting_evidence_raises_belief() {
        let p = posterior(0.5, 0.9, 0.1);
        assert!((p - 0.9).abs() < 1e-12);
    }

    #[test]
    fn contradicting_evidence_lowers_belief() {
        let p = posterior(0.5, 0.1, 0.9);
        assert!((p - 0.1).abs() < 1e-12);
    }

    #[test]
    fn uninformative_evidence_keeps_prior() {
        let p = posterior(0.3, 0.5, 0.5);
        assert!((p - 0.3).abs() < 1e-12);
    }

    #[test]
    fn zero_denominator_keeps_prior() {
        assert_eq!(posterior(0.0, 1.0, 0.0), 0.0);
        assert_eq!(posterior(1.0, 0.0, 1.0), 1.0);
    }

    #[test]
    fn certain_prior_is_not_moved() {
        assert_eq!(posterior(1.0, 0.2, 0.8), 1.0);
    }
}
