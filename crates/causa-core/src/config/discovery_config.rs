use serde::{Deserialize, Serialize};

use super::defaults;

/// Co-occurrence discovery configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Correlation proxy must be strictly greater than this to propose a link.
    pub correlation_threshold: f64,
    /// Necessity of a discovered link, as a fraction of its correlation.
    pub necessity_factor: f64,
    /// Sufficiency of a discovered link, as a fraction of its correlation.
    pub sufficiency_factor: f64,
    /// Minimum number of observations in which both variables occur.
    pub min_support: usize,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            correlation_threshold: defaults::DEFAULT_CORRELATION_THRESHOLD,
            necessity_factor: defaults::DEFAULT_NECESSITY_FACTOR,
            sufficiency_factor: defaults::DEFAULT_SUFFICIENCY_FACTOR,
            min_support: defaults::DEFAULT_MIN_SUPPORT,
        }
    }
}
