//! Causal discovery from batches of observations.
//!
//! Candidates come from co-occurrence correlation; direction comes from
//! caller-supplied timestamps. The pipeline has no randomness, so identical
//! batches always produce identical links (ids aside).

pub mod co_occurrence;
pub mod precedence;

use causa_core::config::DiscoveryConfig;
use causa_core::models::{CausalLink, LinkKind, NewLink, Observation};
use tracing::debug;

use crate::graph::LinkStore;

pub use co_occurrence::{Candidate, CoOccurrence};

/// Discover links in `observations`, insert them into the store and record
/// them under `domain`. Returns the created links in candidate order.
pub fn discover(
    store: &mut LinkStore,
    observations: &[Observation],
    domain: &str,
    config: &DiscoveryConfig,
) -> Vec<CausalLink> {
    let table = CoOccurrence::count(observations);
    let candidates = table.candidates(config.correlation_threshold, config.min_support);

    let mut created = Vec::new();
    for candidate in candidates {
        let Some((cause, effect)) =
            precedence::order(observations, &candidate.first, &candidate.second)
        else {
            debug!(
                first = %candidate.first,
                second = %candidate.second,
                correlation = candidate.correlation,
                "correlated pair has no temporal order, skipped"
            );
            continue;
        };

        let corr = candidate.correlation;
        let new_link = NewLink::new(
            cause,
            effect,
            corr,
            config.necessity_factor * corr,
            config.sufficiency_factor * corr,
        )
        .with_kind(LinkKind::Contributing)
        .with_mechanism(format!("co-occurrence in {domain}"))
        .inferred();

        let link = store.insert(new_link).clone();
        store.record_in_domain(domain, &link.id);
        created.push(link);
    }
    created
}
