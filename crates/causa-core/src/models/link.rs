//! Causal links: directed, weighted cause → effect assertions.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::evidence::Evidence;
use super::probability::Probability;

/// Unique identifier of a causal link.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkId(pub String);

impl LinkId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LinkId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for LinkId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// The kind of causal influence a link asserts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    /// X directly produces Y.
    #[default]
    Direct,
    /// X makes Y possible (necessary but not sufficient).
    Enabling,
    /// X raises the chance of Y alongside other causes.
    Contributing,
    /// X suppresses Y.
    Preventing,
}

impl LinkKind {
    pub const ALL: [LinkKind; 4] = [
        Self::Direct,
        Self::Enabling,
        Self::Contributing,
        Self::Preventing,
    ];

    /// Parse from string (matching the serde rename).
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s {
            "direct" => Some(Self::Direct),
            "enabling" => Some(Self::Enabling),
            "contributing" => Some(Self::Contributing),
            "preventing" => Some(Self::Preventing),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Enabling => "enabling",
            Self::Contributing => "contributing",
            Self::Preventing => "preventing",
        }
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored causal link.
///
/// Links are never deduplicated: two links with the same cause, effect and
/// kind are independent entities with their own evidence and strength.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CausalLink {
    pub id: LinkId,
    pub cause: String,
    pub effect: String,
    pub kind: LinkKind,
    /// How the cause produces the effect, in free text.
    pub mechanism: Option<String>,
    /// Probability the effect would not occur without the cause.
    pub necessity: Probability,
    /// Probability the effect occurs given the cause.
    pub sufficiency: Probability,
    pub strength: Probability,
    pub time_delay: Duration,
    /// Context concepts required for the link to be active. Stored only.
    pub conditions: Vec<String>,
    /// Append-only.
    pub evidence: Vec<Evidence>,
    /// Whether the link was proposed by discovery rather than asserted.
    pub inferred: bool,
    pub created_at: DateTime<Utc>,
}

impl CausalLink {
    /// Number of evidence records with reliability strictly above `threshold`.
    pub fn reliable_evidence(&self, threshold: f64) -> usize {
        self.evidence
            .iter()
            .filter(|e| e.reliability.value() > threshold)
            .count()
    }
}

/// Parameters for creating a link. Probabilities are clamped on conversion.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub cause: String,
    pub effect: String,
    pub kind: LinkKind,
    pub mechanism: Option<String>,
    pub strength: f64,
    pub necessity: f64,
    pub sufficiency: f64,
    pub time_delay: Duration,
    pub conditions: Vec<String>,
    pub inferred: bool,
}

impl NewLink {
    pub fn new(
        cause: impl Into<String>,
        effect: impl Into<String>,
        strength: f64,
        necessity: f64,
        sufficiency: f64,
    ) -> Self {
        Self {
            cause: cause.into(),
            effect: effect.into(),
            kind: LinkKind::default(),
            mechanism: None,
            strength,
            necessity,
            sufficiency,
            time_delay: Duration::ZERO,
            conditions: Vec::new(),
            inferred: false,
        }
    }

    pub fn with_kind(mut self, kind: LinkKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_mechanism(mut self, mechanism: impl Into<String>) -> Self {
        self.mechanism = Some(mechanism.into());
        self
    }

    pub fn with_time_delay(mut self, time_delay: Duration) -> Self {
        self.time_delay = time_delay;
        self
    }

    pub fn with_conditions<I, S>(mut self, conditions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.conditions = conditions.into_iter().map(Into::into).collect();
        self
    }

    pub fn inferred(mut self) -> Self {
        self.inferred = true;
        self
    }

    /// Materialize the link with a fresh id and clamped probabilities.
    pub fn into_link(self) -> CausalLink {
        CausalLink {
            id: LinkId::generate(),
            cause: self.cause,
            effect: self.effect,
            kind: self.kind,
            mechanism: self.mechanism,
            necessity: Probability::new(self.necessity),
            sufficiency: Probability::new(self.sufficiency),
            strength: Probability::new(self.strength),
            time_delay: self.time_delay,
            conditions: self.conditions,
            evidence: Vec::new(),
            inferred: self.inferred,
            created_at: Utc::now(),
        }
    }
}
