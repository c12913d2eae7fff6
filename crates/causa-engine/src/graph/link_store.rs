//! petgraph::StableGraph arena of causal links with cause and effect indices.
//!
//! Each concept is a node and each link is an edge, so the graph's per-node
//! outgoing and incoming edge lists are the cause → link and effect → link
//! indices. `link_index` maps link ids to edges. Every mutation goes through
//! this type, which keeps the three structures consistent.
//!
//! Links are deliberately not deduplicated. Unlike semantic relations, which
//! merge repeated (source, target, type) assertions, two causal links between
//! the same pair are separate hypotheses with their own evidence.

use std::collections::{BTreeMap, HashMap};

use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableGraph};
use petgraph::Directed;

use causa_core::config::EvidenceConfig;
use causa_core::models::{
    CausalLink, DomainGraph, EngineStats, Evidence, LinkId, NewLink, Probability,
};

use crate::traversal::Direction;

/// A concept node. The engine does not own concept data, only the id.
#[derive(Debug, Clone)]
pub struct ConceptNode {
    pub concept_id: String,
}

/// Edge weight: the link plus its creation sequence number.
#[derive(Debug, Clone)]
pub struct LinkEdge {
    /// Monotonic per store; orders adjacency lists by creation.
    pub seq: u64,
    pub link: CausalLink,
}

/// The underlying directed graph type.
pub type LinkGraph = StableGraph<ConceptNode, LinkEdge, Directed>;

/// The authoritative store of causal links.
#[derive(Debug, Default)]
pub struct LinkStore {
    pub(crate) graph: LinkGraph,
    pub(crate) node_index: HashMap<String, NodeIndex>,
    pub(crate) link_index: HashMap<LinkId, EdgeIndex>,
    domains: BTreeMap<String, DomainGraph>,
    next_seq: u64,
}

impl LinkStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create the node for a concept.
    fn ensure_node(&mut self, concept_id: &str) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(concept_id) {
            return idx;
        }
        let idx = self.graph.add_node(ConceptNode {
            concept_id: concept_id.to_string(),
        });
        self.node_index.insert(concept_id.to_string(), idx);
        idx
    }

    /// Look up a node index by concept id.
    pub fn get_node(&self, concept_id: &str) -> Option<NodeIndex> {
        self.node_index.get(concept_id).copied()
    }

    /// The stored copy of a concept id, borrowed for the store's lifetime.
    pub(crate) fn concept_key(&self, concept_id: &str) -> Option<&str> {
        self.get_node(concept_id)
            .and_then(|idx| self.graph.node_weight(idx))
            .map(|n| n.concept_id.as_str())
    }

    /// Create a link. Probabilities are clamped, never rejected.
    pub fn insert(&mut self, new_link: NewLink) -> &CausalLink {
        let link = new_link.into_link();
        let source = self.ensure_node(&link.cause);
        let target = self.ensure_node(&link.effect);
        let id = link.id.clone();
        let seq = self.next_seq;
        self.next_seq += 1;

        let edge = self.graph.add_edge(source, target, LinkEdge { seq, link });
        self.link_index.insert(id, edge);
        &self.graph[edge].link
    }

    pub fn get(&self, link_id: &LinkId) -> Option<&CausalLink> {
        self.link_index
            .get(link_id)
            .and_then(|&edge| self.graph.edge_weight(edge))
            .map(|w| &w.link)
    }

    fn get_mut(&mut self, link_id: &LinkId) -> Option<&mut CausalLink> {
        let edge = *self.link_index.get(link_id)?;
        self.graph.edge_weight_mut(edge).map(|w| &mut w.link)
    }

    /// Links adjacent to a concept in the given direction, in creation order.
    pub fn adjacent(&self, concept_id: &str, direction: Direction) -> Vec<&CausalLink> {
        let Some(idx) = self.get_node(concept_id) else {
            return Vec::new();
        };
        let mut edges: Vec<&LinkEdge> = self
            .graph
            .edges_directed(idx, direction.into())
            .map(|e| e.weight())
            .collect();
        edges.sort_by_key(|w| w.seq);
        edges.into_iter().map(|w| &w.link).collect()
    }

    /// Outgoing links of `cause`.
    pub fn effects_of(&self, cause: &str) -> Vec<&CausalLink> {
        self.adjacent(cause, Direction::Forward)
    }

    /// Incoming links of `effect`.
    pub fn causes_of(&self, effect: &str) -> Vec<&CausalLink> {
        self.adjacent(effect, Direction::Backward)
    }

    /// First link from `cause` to `effect` in creation order, of any kind.
    pub fn find(&self, cause: &str, effect: &str) -> Option<&CausalLink> {
        self.effects_of(cause)
            .into_iter()
            .find(|link| link.effect == effect)
    }

    /// Append evidence and raise strength by the reliable fraction.
    ///
    /// `strength += boost * reliable / max(min_denominator, total)`, capped at
    /// 1.0. Evidence alone never lowers strength, and the gain per record
    /// shrinks once the total passes the denominator floor.
    pub fn add_evidence(
        &mut self,
        link_id: &LinkId,
        evidence: Evidence,
        config: &EvidenceConfig,
    ) -> Option<&CausalLink> {
        let link = self.get_mut(link_id)?;
        link.evidence.push(evidence);

        let reliable = link.reliable_evidence(config.reliability_threshold) as f64;
        let denominator = link.evidence.len().max(config.min_denominator) as f64;
        let fraction = reliable / denominator;
        let boosted = link.strength.value() + config.strength_boost * fraction;
        link.strength = Probability::new(boosted.min(1.0));
        Some(&*link)
    }

    /// Overwrite a link's strength (clamped). Returns the stored value.
    pub fn set_strength(&mut self, link_id: &LinkId, strength: f64) -> Option<Probability> {
        let link = self.get_mut(link_id)?;
        link.strength = Probability::new(strength);
        Some(link.strength)
    }

    /// Remove a link from the arena, both adjacency indices, and every domain
    /// graph. Concepts left without links are dropped.
    pub fn remove(&mut self, link_id: &LinkId) -> Option<CausalLink> {
        let edge = self.link_index.remove(link_id)?;
        let (source, target) = self.graph.edge_endpoints(edge)?;
        let removed = self.graph.remove_edge(edge)?;

        for domain in self.domains.values_mut() {
            domain.forget(link_id);
        }
        self.remove_if_orphaned(source);
        if target != source {
            self.remove_if_orphaned(target);
        }
        Some(removed.link)
    }

    fn remove_if_orphaned(&mut self, idx: NodeIndex) {
        let connected = self
            .graph
            .edges_directed(idx, petgraph::Direction::Outgoing)
            .next()
            .is_some()
            || self
                .graph
                .edges_directed(idx, petgraph::Direction::Incoming)
                .next()
                .is_some();
        if connected {
            return;
        }
        if let Some(node) = self.graph.remove_node(idx) {
            self.node_index.remove(&node.concept_id);
        }
    }

    fn edge_weights(&self) -> impl Iterator<Item = &LinkEdge> {
        self.graph
            .edge_indices()
            .filter_map(|idx| self.graph.edge_weight(idx))
    }

    /// All links, in creation order.
    pub fn links(&self) -> Vec<&CausalLink> {
        let mut edges: Vec<&LinkEdge> = self.edge_weights().collect();
        edges.sort_by_key(|w| w.seq);
        edges.into_iter().map(|w| &w.link).collect()
    }

    /// Record a link under a domain label, creating the domain graph on first use.
    pub fn record_in_domain(&mut self, domain: &str, link_id: &LinkId) -> bool {
        let Some(link) = self.get(link_id).cloned() else {
            return false;
        };
        self.domains
            .entry(domain.to_string())
            .or_insert_with(|| DomainGraph::new(domain))
            .record(&link);
        true
    }

    pub fn domain(&self, domain: &str) -> Option<&DomainGraph> {
        self.domains.get(domain)
    }

    pub fn domains(&self) -> impl Iterator<Item = &DomainGraph> {
        self.domains.values()
    }

    /// Number of concept nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of links.
    pub fn link_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn stats(&self) -> EngineStats {
        let mut inferred_link_count = 0;
        let mut evidence_count = 0;
        for weight in self.edge_weights() {
            if weight.link.inferred {
                inferred_link_count += 1;
            }
            evidence_count += weight.link.evidence.len();
        }
        EngineStats {
            node_count: self.node_count(),
            link_count: self.link_count(),
            inferred_link_count,
            evidence_count,
            domain_graph_count: self.domains.len(),
        }
    }
}
