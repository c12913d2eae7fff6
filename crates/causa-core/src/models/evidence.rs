use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::link::LinkId;
use super::probability::Probability;

/// How a piece of evidence was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceKind {
    Observation,
    Experiment,
    Testimony,
    Inference,
}

/// Whether evidence argues for or against a hypothesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stance {
    Supports,
    Contradicts,
}

/// The hypothesis (a link) a piece of evidence bears on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HypothesisRef {
    pub link_id: LinkId,
    pub stance: Stance,
}

/// An observational or inferential data point about a causal link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evidence {
    pub id: String,
    pub kind: EvidenceKind,
    pub reliability: Probability,
    pub timestamp: DateTime<Utc>,
    pub description: Option<String>,
    pub hypothesis: Option<HypothesisRef>,
}

impl Evidence {
    /// New evidence with no hypothesis reference, timestamped now.
    pub fn new(kind: EvidenceKind, reliability: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            reliability: Probability::new(reliability),
            timestamp: Utc::now(),
            description: None,
            hypothesis: None,
        }
    }

    /// Mark this evidence as supporting the hypothesis that `link_id` holds.
    pub fn supporting(mut self, link_id: LinkId) -> Self {
        self.hypothesis = Some(HypothesisRef {
            link_id,
            stance: Stance::Supports,
        });
        self
    }

    /// Mark this evidence as contradicting the hypothesis that `link_id` holds.
    pub fn contradicting(mut self, link_id: LinkId) -> Self {
        self.hypothesis = Some(HypothesisRef {
            link_id,
            stance: Stance::Contradicts,
        });
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// The stance this evidence takes on `link_id`, if it references it.
    pub fn stance_on(&self, link_id: &LinkId) -> Option<Stance> {
        self.hypothesis
            .as_ref()
            .filter(|h| &h.link_id == link_id)
            .map(|h| h.stance)
    }
}
