/// Causal graph errors.
#[derive(Debug, thiserror::Error)]
pub enum CausalError {
    /// The cause/effect indices disagree with the link arena.
    #[error("graph inconsistency: {details}")]
    GraphInconsistency { details: String },
}
