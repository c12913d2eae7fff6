//! Traversal engine: depth-bounded forward/backward search and path
//! enumeration over the link store.
//!
//! All three queries run on one walker. Its [`TraversalMode`] makes the
//! completeness trade-off explicit: `SinglePass` never backtracks its visited
//! set (each node is reported once, via the first path that reaches it, and
//! cycles terminate), while `Exhaustive` unmarks nodes on return so every
//! simple path within the bound is found.

pub mod paths;
pub mod trace_effects;
pub mod trace_origins;
pub(crate) mod walker;

use std::collections::HashSet;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use causa_core::config::TraversalConfig;
use causa_core::models::{CausalLink, LinkId};

use crate::graph::LinkStore;
use crate::narrative::{render_chain, ConfidenceLevel};

/// Visited-set policy of a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalMode {
    /// Visited nodes stay visited; first path to a node wins.
    SinglePass,
    /// Visited nodes are released on backtrack; all simple paths are found.
    Exhaustive,
}

/// Which adjacency list the walker follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Cause → effect, via outgoing links.
    Forward,
    /// Effect → cause, via incoming links.
    Backward,
}

impl From<Direction> for petgraph::Direction {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Forward => petgraph::Direction::Outgoing,
            Direction::Backward => petgraph::Direction::Incoming,
        }
    }
}

/// Which link probability is multiplied along a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weighting {
    Strength,
    Necessity,
    Sufficiency,
}

impl Weighting {
    pub fn weight(self, link: &CausalLink) -> f64 {
        match self {
            Self::Strength => link.strength.value(),
            Self::Necessity => link.necessity.value(),
            Self::Sufficiency => link.sufficiency.value(),
        }
    }
}

/// A fully specified traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalSpec {
    pub direction: Direction,
    pub weighting: Weighting,
    pub mode: TraversalMode,
    /// Maximum number of links in any reported path.
    pub max_depth: usize,
}

impl TraversalSpec {
    /// Single-pass forward search weighted by strength.
    pub fn forward(max_depth: usize) -> Self {
        Self {
            direction: Direction::Forward,
            weighting: Weighting::Strength,
            mode: TraversalMode::SinglePass,
            max_depth,
        }
    }

    /// Single-pass backward search weighted by necessity.
    pub fn backward(max_depth: usize) -> Self {
        Self {
            direction: Direction::Backward,
            weighting: Weighting::Necessity,
            mode: TraversalMode::SinglePass,
            max_depth,
        }
    }

    pub fn with_mode(mut self, mode: TraversalMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_weighting(mut self, weighting: Weighting) -> Self {
        self.weighting = weighting;
        self
    }
}

/// A predicted downstream effect of a cause.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// The node the prediction started from.
    pub cause: String,
    /// The node reached.
    pub effect: String,
    /// Product of link strengths along the path.
    pub confidence: f64,
    pub confidence_level: ConfidenceLevel,
    /// Number of links traversed.
    pub depth: usize,
    /// Sum of link time delays along the path.
    pub time_delay: Duration,
    /// Link ids from `cause` to `effect`.
    pub path: Vec<LinkId>,
    pub explanation: String,
}

/// A cause found by tracing an effect backwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CauseExplanation {
    /// The upstream node found.
    pub cause: String,
    /// The node the explanation started from.
    pub effect: String,
    /// Product of link necessities along the path.
    pub confidence: f64,
    pub confidence_level: ConfidenceLevel,
    pub depth: usize,
    pub time_delay: Duration,
    /// Link ids from `cause` to `effect`.
    pub path: Vec<LinkId>,
    pub explanation: String,
}

/// A complete causal path, nodes and links in cause → effect order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CausalPath {
    pub nodes: Vec<String>,
    pub links: Vec<LinkId>,
    pub confidence: f64,
    pub confidence_level: ConfidenceLevel,
    pub time_delay: Duration,
    pub explanation: String,
}

impl CausalPath {
    /// Build from links in cause → effect order.
    pub(crate) fn from_links(links: &[&CausalLink], confidence: f64) -> Self {
        let mut nodes = Vec::with_capacity(links.len() + 1);
        if let Some(first) = links.first() {
            nodes.push(first.cause.clone());
        }
        nodes.extend(links.iter().map(|l| l.effect.clone()));

        Self {
            nodes,
            links: link_ids(links),
            confidence,
            confidence_level: ConfidenceLevel::from_score(confidence),
            time_delay: total_delay(links),
            explanation: render_chain(links),
        }
    }

    /// Number of links in the path.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

pub(crate) fn link_ids(links: &[&CausalLink]) -> Vec<LinkId> {
    links.iter().map(|l| l.id.clone()).collect()
}

pub(crate) fn total_delay(links: &[&CausalLink]) -> Duration {
    links.iter().map(|l| l.time_delay).sum()
}

/// Stable sort by descending confidence; ties keep discovery order.
pub(crate) fn sort_by_confidence<T>(items: &mut [T], confidence: impl Fn(&T) -> f64) {
    items.sort_by(|a, b| confidence(b).total_cmp(&confidence(a)));
}

/// The traversal engine wraps all traversal operations.
#[derive(Debug, Clone, Default)]
pub struct TraversalEngine {
    pub config: TraversalConfig,
}

impl TraversalEngine {
    pub fn new(config: TraversalConfig) -> Self {
        Self { config }
    }

    /// A requested depth, capped at the configured `max_depth`.
    pub fn bounded(&self, requested: usize) -> usize {
        requested.min(self.config.max_depth)
    }

    /// "What does this cause?" Forward, strength-weighted, single-pass.
    pub fn predict_effect(
        &self,
        store: &LinkStore,
        cause: &str,
        max_steps: usize,
        excluded: &HashSet<LinkId>,
    ) -> Vec<Prediction> {
        trace_effects::trace(store, cause, self.bounded(max_steps), excluded)
    }

    /// "What caused this?" Backward, necessity-weighted, single-pass.
    pub fn explain_effect(
        &self,
        store: &LinkStore,
        effect: &str,
        max_steps: usize,
    ) -> Vec<CauseExplanation> {
        trace_origins::trace(store, effect, self.bounded(max_steps), &HashSet::new())
    }

    /// Every simple path from `from` to `to` of at most `max_length` links.
    pub fn find_causal_paths(
        &self,
        store: &LinkStore,
        from: &str,
        to: &str,
        max_length: usize,
    ) -> Vec<CausalPath> {
        paths::between(store, from, to, self.bounded(max_length))
    }

    /// Run an explicitly specified traversal from `origin`.
    pub fn traverse(&self, store: &LinkStore, origin: &str, spec: TraversalSpec) -> Vec<CausalPath> {
        let spec = TraversalSpec {
            max_depth: self.bounded(spec.max_depth),
            ..spec
        };
        paths::from_origin(store, origin, spec)
    }
}
