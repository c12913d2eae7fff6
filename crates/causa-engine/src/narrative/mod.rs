//! Narrative generation: path explanation text and confidence classification.

pub mod confidence;
pub mod templates;

pub use confidence::ConfidenceLevel;
pub use templates::render_chain;
