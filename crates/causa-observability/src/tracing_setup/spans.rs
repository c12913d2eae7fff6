//! Span definitions per operation: traversal, intervention, discovery, belief.

/// Create a traversal span.
#[macro_export]
macro_rules! traversal_span {
    ($origin:expr, $direction:expr, $max_depth:expr) => {
        tracing::info_span!(
            "causa.traversal",
            origin = %$origin,
            direction = ?$direction,
            max_depth = $max_depth
        )
    };
}

/// Create an intervention span.
#[macro_export]
macro_rules! intervention_span {
    ($target:expr, $forced:expr) => {
        tracing::info_span!("causa.intervention", target = %$target, forced = $forced)
    };
}

/// Create a discovery span.
#[macro_export]
macro_rules! discovery_span {
    ($domain:expr, $observations:expr) => {
        tracing::info_span!(
            "causa.discovery",
            domain = %$domain,
            observations = $observations
        )
    };
}

/// Create a belief update span.
#[macro_export]
macro_rules! belief_span {
    ($link_id:expr) => {
        tracing::info_span!("causa.belief", link_id = %$link_id)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const TRAVERSAL: &str = "causa.traversal";
    pub const INTERVENTION: &str = "causa.intervention";
    pub const DISCOVERY: &str = "causa.discovery";
    pub const BELIEF: &str = "causa.belief";
}
