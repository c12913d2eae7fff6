use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::value::ForcedValue;

/// One record of observed experience, the input to causal discovery.
///
/// A variable occurs in the observation when its value is truthy. The
/// optional outcome label occurs at `observed_at`. Direction of a discovered
/// link is taken from the timestamps in `occurred_at`, so variables without a
/// timestamp can correlate but never order a pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Observation {
    pub variables: BTreeMap<String, ForcedValue>,
    #[serde(default)]
    pub occurred_at: BTreeMap<String, DateTime<Utc>>,
    #[serde(default)]
    pub outcome: Option<String>,
    pub observed_at: DateTime<Utc>,
}

impl Observation {
    pub fn new(observed_at: DateTime<Utc>) -> Self {
        Self {
            variables: BTreeMap::new(),
            occurred_at: BTreeMap::new(),
            outcome: None,
            observed_at,
        }
    }

    /// Record a variable value without ordering metadata.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ForcedValue>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    /// Record a variable value that occurred at `at`.
    pub fn with_at(
        mut self,
        name: impl Into<String>,
        value: impl Into<ForcedValue>,
        at: DateTime<Utc>,
    ) -> Self {
        let name = name.into();
        self.occurred_at.insert(name.clone(), at);
        self.variables.insert(name, value.into());
        self
    }

    pub fn with_outcome(mut self, outcome: impl Into<String>) -> Self {
        self.outcome = Some(outcome.into());
        self
    }

    /// Names of everything that occurred, in sorted order.
    pub fn occurring(&self) -> BTreeSet<&str> {
        let mut names: BTreeSet<&str> = self
            .variables
            .iter()
            .filter(|(_, v)| v.is_truthy())
            .map(|(k, _)| k.as_str())
            .collect();
        if let Some(outcome) = self.outcome.as_deref().filter(|o| !o.is_empty()) {
            names.insert(outcome);
        }
        names
    }

    /// When `name` occurred. An explicit variable timestamp wins over the
    /// outcome's `observed_at`.
    pub fn time_of(&self, name: &str) -> Option<DateTime<Utc>> {
        if let Some(at) = self.occurred_at.get(name) {
            return Some(*at);
        }
        if self.outcome.as_deref() == Some(name) {
            return Some(self.observed_at);
        }
        None
    }
}
