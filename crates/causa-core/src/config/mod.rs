//! Configuration for every Causa subsystem.
//!
//! The engine never reads files or environment variables itself; hosts hand
//! it a TOML string (or a constructed value) and missing keys fall back to
//! the constants in [`defaults`].

pub mod defaults;
pub mod discovery_config;
pub mod evidence_config;
pub mod observability_config;
pub mod traversal_config;

use serde::{Deserialize, Serialize};

pub use discovery_config::DiscoveryConfig;
pub use evidence_config::EvidenceConfig;
pub use observability_config::ObservabilityConfig;
pub use traversal_config::TraversalConfig;

use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CausaConfig {
    pub traversal: TraversalConfig,
    pub evidence: EvidenceConfig,
    pub discovery: DiscoveryConfig,
    pub observability: ObservabilityConfig,
}

impl CausaConfig {
    /// Parse and validate configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &CausaConfig) -> Result<(), ConfigError> {
        let unit_fields = [
            (
                "evidence.reliability_threshold",
                config.evidence.reliability_threshold,
            ),
            ("evidence.strength_boost", config.evidence.strength_boost),
            (
                "discovery.correlation_threshold",
                config.discovery.correlation_threshold,
            ),
            ("discovery.necessity_factor", config.discovery.necessity_factor),
            (
                "discovery.sufficiency_factor",
                config.discovery.sufficiency_factor,
            ),
        ];
        for (field, value) in unit_fields {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        if config.traversal.max_depth == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "traversal.max_depth".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.evidence.min_denominator == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "evidence.min_denominator".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}
