use causa_core::config::*;
use causa_core::errors::ConfigError;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = CausaConfig::from_toml("").unwrap();

    // Traversal defaults
    assert_eq!(config.traversal.max_depth, 1_000);
    assert_eq!(config.traversal.intervention_max_steps, 5);

    // Evidence defaults
    assert_eq!(config.evidence.reliability_threshold, 0.7);
    assert_eq!(config.evidence.min_denominator, 5);
    assert_eq!(config.evidence.strength_boost, 0.1);

    // Discovery defaults
    assert_eq!(config.discovery.correlation_threshold, 0.7);
    assert_eq!(config.discovery.necessity_factor, 0.8);
    assert_eq!(config.discovery.sufficiency_factor, 0.6);
    assert_eq!(config.discovery.min_support, 1);

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json_logs);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[traversal]
intervention_max_steps = 8

[discovery]
correlation_threshold = 0.5
min_support = 3
"#;
    let config = CausaConfig::from_toml(toml).unwrap();
    assert_eq!(config.traversal.intervention_max_steps, 8);
    assert_eq!(config.evidence.min_denominator, 5); // default
    assert_eq!(config.discovery.correlation_threshold, 0.5);
    assert_eq!(config.discovery.min_support, 3);
    assert_eq!(config.discovery.necessity_factor, 0.8); // default
}

#[test]
fn config_rejects_out_of_range_threshold() {
    let toml = r#"
[evidence]
reliability_threshold = 1.5
"#;
    let err = CausaConfig::from_toml(toml).unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => {
            assert_eq!(field, "evidence.reliability_threshold");
        }
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[test]
fn config_rejects_zero_denominator() {
    let toml = r#"
[evidence]
min_denominator = 0
"#;
    assert!(matches!(
        CausaConfig::from_toml(toml),
        Err(ConfigError::ValidationFailed { .. })
    ));
}

#[test]
fn config_rejects_zero_max_depth() {
    let toml = r#"
[traversal]
max_depth = 0
"#;
    let err = CausaConfig::from_toml(toml).unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "traversal.max_depth"),
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[test]
fn config_reports_parse_errors() {
    let err = CausaConfig::from_toml("[traversal\nbroken").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn config_serde_roundtrip() {
    let config = CausaConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = CausaConfig::from_toml(&toml_str).unwrap();
    assert_eq!(
        roundtripped.traversal.intervention_max_steps,
        config.traversal.intervention_max_steps
    );
    assert_eq!(
        roundtripped.observability.log_level,
        config.observability.log_level
    );
}
