//! Test fixture loader for Causa golden scenarios.
//!
//! Provides typed deserialization of the scenario JSON files under `golden/`
//! and helpers for loading them in tests across crates.

pub mod scenario;

use serde::de::DeserializeOwned;
use std::path::PathBuf;

pub use scenario::{
    CausalScenario, DiscoveryScenario, ExpectedLink, ExpectedPath, ExpectedReach,
    ExplanationCase, InterventionCase, PathCase, PredictionCase, ScenarioLink,
};

/// Root directory of the fixtures, independent of the crate running the test.
pub fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}

/// Load every causal scenario under `golden/causal`.
pub fn causal_scenarios() -> Vec<CausalScenario> {
    list_fixtures("golden/causal")
        .iter()
        .map(|path| {
            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_else(|| panic!("Bad fixture file name {}", path.display()));
            load_fixture(&format!("golden/causal/{name}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_root_exists() {
        assert!(fixtures_root().join("golden").exists(), "golden directory not found");
    }

    #[test]
    fn all_golden_causal_files_exist() {
        let files = [
            "golden/causal/simple_chain.json",
            "golden/causal/branching.json",
            "golden/causal/cycle.json",
            "golden/causal/intervention.json",
        ];
        for f in &files {
            assert!(fixture_exists(f), "Missing fixture: {}", f);
        }
    }

    #[test]
    fn all_golden_discovery_files_exist() {
        assert!(fixture_exists("golden/discovery/weather.json"));
    }

    #[test]
    fn causal_scenarios_parse() {
        let scenarios = causal_scenarios();
        assert_eq!(scenarios.len(), 4);
        for scenario in &scenarios {
            assert!(!scenario.links.is_empty(), "{} has no links", scenario.name);
        }
    }

    #[test]
    fn discovery_scenario_parses() {
        let scenario: DiscoveryScenario = load_fixture("golden/discovery/weather.json");
        assert_eq!(scenario.domain, "weather");
        assert!(!scenario.observations.is_empty());
    }

    #[test]
    fn raw_value_loads() {
        let value = load_fixture_value("golden/causal/simple_chain.json");
        assert_eq!(value["name"], "simple_chain");
    }
}
