use serde::{Deserialize, Serialize};

use super::defaults;

/// Traversal subsystem configuration.
///
/// Prediction, explanation and path queries take their bound from the caller,
/// capped at `max_depth`. Interventions run their forward search with
/// `intervention_max_steps`, under the same cap.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TraversalConfig {
    /// Hard cap on the number of links in any traversed path.
    pub max_depth: usize,
    /// Step bound for the forward search inside an intervention.
    pub intervention_max_steps: usize,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            max_depth: defaults::DEFAULT_MAX_DEPTH,
            intervention_max_steps: defaults::DEFAULT_INTERVENTION_MAX_STEPS,
        }
    }
}
