//! Data models: causal links, evidence, forced values, observations.

pub mod domain_graph;
pub mod evidence;
pub mod link;
pub mod observation;
pub mod probability;
pub mod stats;
pub mod value;

pub use domain_graph::{DomainEdge, DomainGraph};
pub use evidence::{Evidence, EvidenceKind, HypothesisRef, Stance};
pub use link::{CausalLink, LinkId, LinkKind, NewLink};
pub use observation::Observation;
pub use probability::Probability;
pub use stats::EngineStats;
pub use value::ForcedValue;
