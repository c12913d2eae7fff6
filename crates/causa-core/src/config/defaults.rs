// Single source of truth for all default values.

// --- Traversal ---
pub const DEFAULT_MAX_DEPTH: usize = 1_000;
pub const DEFAULT_INTERVENTION_MAX_STEPS: usize = 5;

// --- Evidence ---
pub const DEFAULT_RELIABILITY_THRESHOLD: f64 = 0.7;
pub const DEFAULT_EVIDENCE_MIN_DENOMINATOR: usize = 5;
pub const DEFAULT_EVIDENCE_STRENGTH_BOOST: f64 = 0.1;

// --- Discovery ---
pub const DEFAULT_CORRELATION_THRESHOLD: f64 = 0.7;
pub const DEFAULT_NECESSITY_FACTOR: f64 = 0.8;
pub const DEFAULT_SUFFICIENCY_FACTOR: f64 = 0.6;
pub const DEFAULT_MIN_SUPPORT: usize = 1;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
