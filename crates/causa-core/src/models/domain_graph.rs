use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::link::{CausalLink, LinkId};

/// An edge recorded in a domain graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainEdge {
    pub link_id: LinkId,
    pub cause: String,
    pub effect: String,
}

/// A reporting view over the links grown for one domain label.
///
/// Not authoritative: traversal only ever reads the link store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainGraph {
    pub domain: String,
    pub edges: Vec<DomainEdge>,
    pub created_at: DateTime<Utc>,
}

impl DomainGraph {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            edges: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn record(&mut self, link: &CausalLink) {
        self.edges.push(DomainEdge {
            link_id: link.id.clone(),
            cause: link.cause.clone(),
            effect: link.effect.clone(),
        });
    }

    /// Drop a link from the view. Returns whether it was present.
    pub fn forget(&mut self, link_id: &LinkId) -> bool {
        let before = self.edges.len();
        self.edges.retain(|e| &e.link_id != link_id);
        self.edges.len() != before
    }

    /// Nodes touched by the recorded edges.
    pub fn nodes(&self) -> BTreeSet<&str> {
        self.edges
            .iter()
            .flat_map(|e| [e.cause.as_str(), e.effect.as_str()])
            .collect()
    }

    pub fn contains(&self, link_id: &LinkId) -> bool {
        self.edges.iter().any(|e| &e.link_id == link_id)
    }
}
