//! Typed golden scenarios. Expected result lists are in the exact order the
//! engine must return them.

use serde::Deserialize;

use causa_core::models::{ForcedValue, LinkKind, NewLink, Observation};

/// A link to create before running the queries.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioLink {
    pub cause: String,
    pub effect: String,
    pub strength: f64,
    pub necessity: f64,
    pub sufficiency: f64,
    #[serde(default)]
    pub kind: LinkKind,
    #[serde(default)]
    pub mechanism: Option<String>,
}

impl ScenarioLink {
    pub fn to_new_link(&self) -> NewLink {
        let link = NewLink::new(
            self.cause.as_str(),
            self.effect.as_str(),
            self.strength,
            self.necessity,
            self.sufficiency,
        )
        .with_kind(self.kind);
        match &self.mechanism {
            Some(mechanism) => link.with_mechanism(mechanism.as_str()),
            None => link,
        }
    }
}

/// A node reached by a prediction or explanation.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedReach {
    pub node: String,
    pub confidence: f64,
    pub depth: usize,
    #[serde(default)]
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PredictionCase {
    pub cause: String,
    pub max_steps: usize,
    pub expected: Vec<ExpectedReach>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExplanationCase {
    pub effect: String,
    pub max_steps: usize,
    pub expected: Vec<ExpectedReach>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedPath {
    pub nodes: Vec<String>,
    pub confidence: f64,
    #[serde(default)]
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PathCase {
    pub from: String,
    pub to: String,
    pub max_length: usize,
    pub expected: Vec<ExpectedPath>,
}

/// Forced assignments in order, and the expected confidence of reaching the
/// target (`None` when it must not be reached).
#[derive(Debug, Clone, Deserialize)]
pub struct InterventionCase {
    pub force: Vec<(String, ForcedValue)>,
    pub target: String,
    pub expected_confidence: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CausalScenario {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub links: Vec<ScenarioLink>,
    #[serde(default)]
    pub predictions: Vec<PredictionCase>,
    #[serde(default)]
    pub explanations: Vec<ExplanationCase>,
    #[serde(default)]
    pub paths: Vec<PathCase>,
    #[serde(default)]
    pub interventions: Vec<InterventionCase>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedLink {
    pub cause: String,
    pub effect: String,
    pub strength: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiscoveryScenario {
    pub name: String,
    pub domain: String,
    pub observations: Vec<Observation>,
    pub expected: Vec<ExpectedLink>,
}
