use serde::{Deserialize, Serialize};

/// Read-only snapshot of engine size, for monitoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EngineStats {
    pub node_count: usize,
    pub link_count: usize,
    pub inferred_link_count: usize,
    pub evidence_count: usize,
    pub domain_graph_count: usize,
}
