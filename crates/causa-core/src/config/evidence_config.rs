use serde::{Deserialize, Serialize};

use super::defaults;

/// Evidence accumulation configuration.
///
/// Each new evidence record raises a link's strength by
/// `strength_boost * reliable / max(min_denominator, total)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EvidenceConfig {
    /// Evidence with reliability strictly above this counts as reliable.
    pub reliability_threshold: f64,
    /// Floor for the denominator of the reliable fraction.
    pub min_denominator: usize,
    /// Maximum strength gained from a single evidence record.
    pub strength_boost: f64,
}

impl Default for EvidenceConfig {
    fn default() -> Self {
        Self {
            reliability_threshold: defaults::DEFAULT_RELIABILITY_THRESHOLD,
            min_denominator: defaults::DEFAULT_EVIDENCE_MIN_DENOMINATOR,
            strength_boost: defaults::DEFAULT_EVIDENCE_STRENGTH_BOOST,
        }
    }
}
