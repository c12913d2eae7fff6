//! # causa-engine
//!
//! The "why" engine. Keeps causal links in an in-memory `petgraph` arena with
//! cause and effect indices, and answers prediction, explanation, path,
//! intervention and counterfactual queries over it. Evidence revises link
//! strength; co-occurrence discovery grows the graph.

pub mod belief;
pub mod discovery;
pub mod engine;
pub mod graph;
pub mod intervention;
pub mod narrative;
pub mod traversal;

pub use belief::BeliefUpdate;
pub use engine::CausalEngine;
pub use graph::{GraphManager, LinkStore};
pub use intervention::counterfactual::CounterfactualComparison;
pub use intervention::{Intervention, InterventionOutcome};
pub use narrative::ConfidenceLevel;
pub use traversal::{
    CausalPath, CauseExplanation, Direction, Prediction, TraversalEngine, TraversalMode,
    TraversalSpec, Weighting,
};
