//! Error handling for Causa.
//! One error enum per concern, `thiserror` only.
//!
//! Lookups of unknown links or nodes are not errors; they surface as `None`
//! or empty collections. The variants here cover the ambient failure modes.

pub mod causal_error;
pub mod config_error;

pub use causal_error::CausalError;
pub use config_error::ConfigError;

/// Top-level error for every fallible Causa operation.
#[derive(Debug, thiserror::Error)]
pub enum CausaError {
    #[error(transparent)]
    Causal(#[from] CausalError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A lock guarding shared engine state was poisoned.
    #[error("concurrency error: {0}")]
    ConcurrencyError(String),
}

pub type CausaResult<T> = Result<T, CausaError>;
