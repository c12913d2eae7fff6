use std::time::Duration;

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use causa_core::models::*;

#[test]
fn new_link_clamps_probabilities() {
    let link = NewLink::new("a", "b", 1.5, -0.2, f64::NAN).into_link();
    assert_eq!(link.strength.value(), 1.0);
    assert_eq!(link.necessity.value(), 0.0);
    assert_eq!(link.sufficiency.value(), 0.0);
}

#[test]
fn new_link_carries_optional_fields() {
    let link = NewLink::new("rain", "wet_ground", 0.9, 0.7, 0.8)
        .with_kind(LinkKind::Contributing)
        .with_mechanism("water accumulation")
        .with_time_delay(Duration::from_secs(60))
        .with_conditions(["outdoors"])
        .into_link();

    assert_eq!(link.kind, LinkKind::Contributing);
    assert_eq!(link.mechanism.as_deref(), Some("water accumulation"));
    assert_eq!(link.time_delay, Duration::from_secs(60));
    assert_eq!(link.conditions, vec!["outdoors".to_string()]);
    assert!(link.evidence.is_empty());
    assert!(!link.inferred);
}

#[test]
fn link_ids_are_unique() {
    let a = NewLink::new("a", "b", 0.5, 0.5, 0.5).into_link();
    let b = NewLink::new("a", "b", 0.5, 0.5, 0.5).into_link();
    assert_ne!(a.id, b.id);
}

#[test]
fn link_kind_names_roundtrip() {
    for kind in LinkKind::ALL {
        assert_eq!(LinkKind::from_str_name(kind.as_str()), Some(kind));
    }
    assert_eq!(LinkKind::from_str_name("bogus"), None);
}

#[test]
fn forced_value_truthiness() {
    assert!(ForcedValue::from(true).is_truthy());
    assert!(!ForcedValue::from(false).is_truthy());
    assert!(ForcedValue::from(0.3).is_truthy());
    assert!(!ForcedValue::from(0.0).is_truthy());
    assert!(!ForcedValue::Number(f64::NAN).is_truthy());
    assert!(ForcedValue::from("on").is_truthy());
    assert!(!ForcedValue::from("").is_truthy());
}

#[test]
fn forced_value_deserializes_untagged() {
    let values: Vec<ForcedValue> = serde_json::from_str(r#"[true, 0.5, "high"]"#).unwrap();
    assert_eq!(
        values,
        vec![
            ForcedValue::Bool(true),
            ForcedValue::Number(0.5),
            ForcedValue::Symbol("high".to_string()),
        ]
    );
}

#[test]
fn probability_deserialization_clamps() {
    let p: Probability = serde_json::from_str("3.0").unwrap();
    assert_eq!(p.value(), 1.0);
    assert_eq!(serde_json::to_string(&Probability::new(0.25)).unwrap(), "0.25");
}

#[test]
fn evidence_stance_only_for_referenced_link() {
    let target = LinkId::from("link-1");
    let other = LinkId::from("link-2");

    let ev = Evidence::new(EvidenceKind::Experiment, 0.9).supporting(target.clone());
    assert_eq!(ev.stance_on(&target), Some(Stance::Supports));
    assert_eq!(ev.stance_on(&other), None);

    let ev = Evidence::new(EvidenceKind::Testimony, 0.4).contradicting(target.clone());
    assert_eq!(ev.stance_on(&target), Some(Stance::Contradicts));

    let ev = Evidence::new(EvidenceKind::Observation, 0.4);
    assert_eq!(ev.stance_on(&target), None);
}

#[test]
fn observation_occurrence_and_timing() {
    let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let t1 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 5, 0).unwrap();
    let obs = Observation::new(t1)
        .with_at("rain", true, t0)
        .with("sprinkler", false)
        .with("cloud_cover", 0.8)
        .with_outcome("wet_ground");

    let occurring: Vec<&str> = obs.occurring().into_iter().collect();
    assert_eq!(occurring, vec!["cloud_cover", "rain", "wet_ground"]);
    assert_eq!(obs.time_of("rain"), Some(t0));
    assert_eq!(obs.time_of("wet_ground"), Some(t1));
    assert_eq!(obs.time_of("cloud_cover"), None);
}

#[test]
fn domain_graph_tracks_nodes_through_edges() {
    let a = NewLink::new("a", "b", 0.5, 0.5, 0.5).into_link();
    let b = NewLink::new("b", "c", 0.5, 0.5, 0.5).into_link();
    let mut graph = DomainGraph::new("weather");
    graph.record(&a);
    graph.record(&b);
    assert_eq!(graph.nodes().len(), 3);

    assert!(graph.forget(&a.id));
    assert!(!graph.forget(&a.id));
    assert!(!graph.contains(&a.id));
    assert_eq!(graph.nodes().into_iter().collect::<Vec<_>>(), vec!["b", "c"]);
}

proptest! {
    #[test]
    fn probability_always_in_unit_interval(v in proptest::num::f64::ANY) {
        let p = Probability::new(v).value();
        prop_assert!((0.0..=1.0).contains(&p));
    }

    #[test]
    fn probability_product_stays_in_range(a in -2.0_f64..2.0, b in -2.0_f64..2.0) {
        let p = (Probability::new(a) * Probability::new(b)).value();
        prop_assert!((0.0..=1.0).contains(&p));
    }
}
