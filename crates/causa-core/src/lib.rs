//! # causa-core
//!
//! Foundation crate for the Causa causal reasoning engine.
//! Defines the link and evidence models, errors, and configuration.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod models;

// Re-export the most commonly used types at the crate root.
pub use config::CausaConfig;
pub use errors::{CausaError, CausaResult};
pub use models::{
    CausalLink, DomainGraph, EngineStats, Evidence, EvidenceKind, ForcedValue, LinkId, LinkKind,
    NewLink, Observation, Stance,
};
