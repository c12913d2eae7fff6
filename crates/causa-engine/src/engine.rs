//! CausalEngine: owns the link store and coordinates traversal, intervention,
//! belief revision and discovery behind one thread-safe surface.

use std::collections::HashSet;

use tracing::{debug, info, instrument};

use causa_core::config::CausaConfig;
use causa_core::errors::CausaResult;
use causa_core::models::{
    CausalLink, DomainGraph, EngineStats, Evidence, LinkId, NewLink, Observation,
};
use causa_observability::{belief_span, discovery_span, intervention_span, traversal_span};

use crate::belief;
use crate::discovery;
use crate::graph::{consistency, GraphManager};
use crate::intervention::{self, counterfactual, Intervention, InterventionOutcome};
use crate::traversal::{
    CausalPath, CauseExplanation, Direction, Prediction, TraversalEngine, TraversalSpec,
};

/// The main causal reasoning engine.
#[derive(Debug, Clone, Default)]
pub struct CausalEngine {
    /// Thread-safe handle to the link store.
    graph: GraphManager,
    traversal: TraversalEngine,
    config: CausaConfig,
}

impl CausalEngine {
    /// Create an engine with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CausaConfig) -> Self {
        Self {
            graph: GraphManager::new(),
            traversal: TraversalEngine::new(config.traversal.clone()),
            config,
        }
    }

    pub fn graph(&self) -> &GraphManager {
        &self.graph
    }

    pub fn config(&self) -> &CausaConfig {
        &self.config
    }

    // --- Link store ---

    /// Create a link. Out-of-range probabilities are clamped.
    #[instrument(skip(self, new_link), fields(cause = %new_link.cause, effect = %new_link.effect))]
    pub fn create_link(&self, new_link: NewLink) -> CausaResult<CausalLink> {
        let mut store = self.graph.write()?;
        let link = store.insert(new_link).clone();
        debug!(link_id = %link.id, strength = %link.strength, "link created");
        Ok(link)
    }

    /// Remove a link from every index. `None` if the id is unknown.
    #[instrument(skip(self))]
    pub fn remove_link(&self, link_id: &LinkId) -> CausaResult<Option<CausalLink>> {
        let removed = self.graph.write()?.remove(link_id);
        if removed.is_some() {
            debug!("link removed");
        }
        Ok(removed)
    }

    pub fn get_link(&self, link_id: &LinkId) -> CausaResult<Option<CausalLink>> {
        Ok(self.graph.read()?.get(link_id).cloned())
    }

    /// Outgoing links of `cause`, in creation order.
    pub fn get_effects(&self, cause: &str) -> CausaResult<Vec<CausalLink>> {
        Ok(self
            .graph
            .read()?
            .effects_of(cause)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Incoming links of `effect`, in creation order.
    pub fn get_causes(&self, effect: &str) -> CausaResult<Vec<CausalLink>> {
        Ok(self
            .graph
            .read()?
            .causes_of(effect)
            .into_iter()
            .cloned()
            .collect())
    }

    /// First link from `cause` to `effect` in creation order.
    pub fn find_link(&self, cause: &str, effect: &str) -> CausaResult<Option<CausalLink>> {
        Ok(self.graph.read()?.find(cause, effect).cloned())
    }

    // --- Evidence ---

    /// Append evidence and apply the reliability-weighted strength bump.
    #[instrument(skip(self, evidence), fields(kind = ?evidence.kind))]
    pub fn add_evidence(
        &self,
        link_id: &LinkId,
        evidence: Evidence,
    ) -> CausaResult<Option<CausalLink>> {
        let mut store = self.graph.write()?;
        let updated = store
            .add_evidence(link_id, evidence, &self.config.evidence)
            .cloned();
        if let Some(link) = &updated {
            debug!(strength = %link.strength, evidence = link.evidence.len(), "evidence added");
        }
        Ok(updated)
    }

    /// Append evidence, then revise strength with a Bayesian step when the
    /// evidence names this link as its hypothesis.
    pub fn update_model(
        &self,
        link_id: &LinkId,
        evidence: Evidence,
    ) -> CausaResult<Option<CausalLink>> {
        let _span = belief_span!(link_id).entered();
        let mut store = self.graph.write()?;
        let update = belief::update_model(&mut store, link_id, evidence, &self.config.evidence);
        Ok(update.map(|u| {
            debug!(
                prior = u.prior,
                posterior = u.posterior(),
                stance = ?u.stance,
                "belief revised"
            );
            u.link
        }))
    }

    // --- Traversal ---

    /// "What does this cause?"
    pub fn predict_effect(&self, cause: &str, max_steps: usize) -> CausaResult<Vec<Prediction>> {
        let _span = traversal_span!(cause, Direction::Forward, max_steps).entered();
        let store = self.graph.read()?;
        Ok(self
            .traversal
            .predict_effect(&store, cause, max_steps, &HashSet::new()))
    }

    /// "What caused this?"
    pub fn explain_effect(
        &self,
        effect: &str,
        max_steps: usize,
    ) -> CausaResult<Vec<CauseExplanation>> {
        let _span = traversal_span!(effect, Direction::Backward, max_steps).entered();
        let store = self.graph.read()?;
        Ok(self.traversal.explain_effect(&store, effect, max_steps))
    }

    /// Every simple path from `from` to `to` of at most `max_length` links,
    /// strongest first.
    pub fn find_causal_paths(
        &self,
        from: &str,
        to: &str,
        max_length: usize,
    ) -> CausaResult<Vec<CausalPath>> {
        let _span = traversal_span!(from, Direction::Forward, max_length).entered();
        let store = self.graph.read()?;
        Ok(self.traversal.find_causal_paths(&store, from, to, max_length))
    }

    /// Run a traversal with an explicit direction, weighting and mode.
    pub fn traverse(&self, origin: &str, spec: TraversalSpec) -> CausaResult<Vec<CausalPath>> {
        let _span = traversal_span!(origin, spec.direction, spec.max_depth).entered();
        let store = self.graph.read()?;
        Ok(self.traversal.traverse(&store, origin, spec))
    }

    // --- What-if ---

    /// Predict `target_effect` with the intervened nodes' incoming links cut.
    /// The store itself is never modified.
    pub fn predict_intervention(
        &self,
        intervention: &Intervention,
        target_effect: &str,
    ) -> CausaResult<Option<InterventionOutcome>> {
        let _span = intervention_span!(target_effect, intervention.len()).entered();
        let store = self.graph.read()?;
        let outcome = intervention::predict(
            &store,
            intervention,
            target_effect,
            self.traversal.bounded(self.config.traversal.intervention_max_steps),
        );
        debug!(
            reached = outcome.is_some(),
            confidence = outcome.as_ref().map(InterventionOutcome::confidence),
            "intervention evaluated"
        );
        Ok(outcome)
    }

    /// Compare the target under an actual and a counterfactual intervention.
    pub fn counterfactual(
        &self,
        actual: &Intervention,
        hypothetical: &Intervention,
        target_effect: &str,
    ) -> CausaResult<counterfactual::CounterfactualComparison> {
        let _span = intervention_span!(target_effect, actual.len() + hypothetical.len()).entered();
        let store = self.graph.read()?;
        Ok(counterfactual::compare(
            &store,
            actual,
            hypothetical,
            target_effect,
            self.traversal.bounded(self.config.traversal.intervention_max_steps),
        ))
    }

    // --- Discovery ---

    /// Propose and insert links from a batch of observations.
    pub fn discover_causality(
        &self,
        observations: &[Observation],
        domain: &str,
    ) -> CausaResult<Vec<CausalLink>> {
        let _span = discovery_span!(domain, observations.len()).entered();
        let mut store = self.graph.write()?;
        let links = discovery::discover(&mut store, observations, domain, &self.config.discovery);
        info!(domain, discovered = links.len(), "discovery complete");
        Ok(links)
    }

    pub fn domain_graph(&self, domain: &str) -> CausaResult<Option<DomainGraph>> {
        Ok(self.graph.read()?.domain(domain).cloned())
    }

    // --- Maintenance ---

    pub fn get_stats(&self) -> CausaResult<EngineStats> {
        Ok(self.graph.read()?.stats())
    }

    /// Verify that every link is reachable from both of its endpoint indices.
    pub fn check_consistency(&self) -> CausaResult<()> {
        let store = self.graph.read()?;
        consistency::check(&store)?;
        Ok(())
    }
}
