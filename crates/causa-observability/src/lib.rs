//! # causa-observability
//!
//! Structured tracing for the causal engine: span macros per operation and
//! subscriber installation driven by [`causa_core::config::ObservabilityConfig`].

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, spans::names};
