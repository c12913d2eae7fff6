use causa_core::models::{Evidence, EvidenceKind, NewLink};
use causa_engine::{CausalEngine, TraversalMode, TraversalSpec};
use proptest::prelude::*;

const NODES: [&str; 6] = ["a", "b", "c", "d", "e", "f"];

fn edges() -> impl Strategy<Value = Vec<(usize, usize, f64)>> {
    prop::collection::vec((0..NODES.len(), 0..NODES.len(), 0.0f64..=1.0), 0..20)
}

fn build(edges: &[(usize, usize, f64)]) -> CausalEngine {
    let engine = CausalEngine::new();
    for &(cause, effect, strength) in edges {
        engine
            .create_link(NewLink::new(NODES[cause], NODES[effect], strength, strength, strength))
            .unwrap();
    }
    engine
}

proptest! {
    #[test]
    fn predictions_never_exceed_step_bound(edges in edges(), steps in 0usize..6) {
        let engine = build(&edges);
        for prediction in engine.predict_effect("a", steps).unwrap() {
            prop_assert!(prediction.depth <= steps);
            prop_assert_eq!(prediction.path.len(), prediction.depth);
            prop_assert!((0.0..=1.0).contains(&prediction.confidence));
        }
    }

    #[test]
    fn single_pass_reports_each_node_once(edges in edges()) {
        let engine = build(&edges);
        let predictions = engine.predict_effect("a", 10).unwrap();
        let mut seen = std::collections::HashSet::new();
        for prediction in &predictions {
            prop_assert!(prediction.effect != "a");
            prop_assert!(seen.insert(prediction.effect.clone()), "duplicate {}", prediction.effect);
        }
    }

    #[test]
    fn paths_are_simple_and_bounded(edges in edges(), max_length in 0usize..5) {
        let engine = build(&edges);
        for path in engine.find_causal_paths("a", "f", max_length).unwrap() {
            prop_assert!(path.len() <= max_length);
            prop_assert_eq!(path.nodes.first().map(String::as_str), Some("a"));
            prop_assert_eq!(path.nodes.last().map(String::as_str), Some("f"));
            let unique: std::collections::HashSet<_> = path.nodes.iter().collect();
            prop_assert_eq!(unique.len(), path.nodes.len());
        }
    }

    #[test]
    fn results_are_sorted(edges in edges()) {
        let engine = build(&edges);
        let paths = engine
            .traverse("a", TraversalSpec::forward(4).with_mode(TraversalMode::Exhaustive))
            .unwrap();
        for pair in paths.windows(2) {
            prop_assert!(pair[0].confidence >= pair[1].confidence);
        }
    }

    #[test]
    fn evidence_never_lowers_strength(
        initial in 0.0f64..=1.0,
        reliabilities in prop::collection::vec(0.0f64..=1.0, 1..15),
    ) {
        let engine = CausalEngine::new();
        let link = engine.create_link(NewLink::new("x", "y", initial, 0.5, 0.5)).unwrap();
        let mut previous = link.strength.value();
        for reliability in reliabilities {
            let updated = engine
                .add_evidence(&link.id, Evidence::new(EvidenceKind::Observation, reliability))
                .unwrap()
                .unwrap();
            prop_assert!(updated.strength.value() >= previous);
            prop_assert!(updated.strength.value() <= 1.0);
            previous = updated.strength.value();
        }
    }

    #[test]
    fn belief_stays_in_unit_interval(
        initial in 0.0f64..=1.0,
        steps in prop::collection::vec((0.0f64..=1.0, any::<bool>()), 1..15),
    ) {
        let engine = CausalEngine::new();
        let link = engine.create_link(NewLink::new("x", "y", initial, 0.5, 0.5)).unwrap();
        for (reliability, supports) in steps {
            let evidence = Evidence::new(EvidenceKind::Experiment, reliability);
            let evidence = if supports {
                evidence.supporting(link.id.clone())
            } else {
                evidence.contradicting(link.id.clone())
            };
            let updated = engine.update_model(&link.id, evidence).unwrap().unwrap();
            prop_assert!((0.0..=1.0).contains(&updated.strength.value()));
        }
    }

    #[test]
    fn indices_stay_consistent(
        edges in edges(),
        removals in prop::collection::vec(any::<prop::sample::Index>(), 0..10),
    ) {
        let engine = CausalEngine::new();
        let mut ids = Vec::new();
        for &(cause, effect, strength) in &edges {
            let link = engine
                .create_link(NewLink::new(NODES[cause], NODES[effect], strength, 0.5, 0.5))
                .unwrap();
            ids.push(link.id);
        }
        for index in removals {
            if ids.is_empty() {
                break;
            }
            let id = ids.remove(index.index(ids.len()));
            prop_assert!(engine.remove_link(&id).unwrap().is_some());
            prop_assert!(engine.check_consistency().is_ok());
        }
        prop_assert_eq!(engine.get_stats().unwrap().link_count, ids.len());
        prop_assert!(engine.check_consistency().is_ok());
    }

    #[test]
    fn interventions_leave_the_store_untouched(edges in edges(), forced in 0..NODES.len()) {
        let engine = build(&edges);
        let before = engine.get_causes(NODES[forced]).unwrap().len();
        let intervention = causa_engine::Intervention::new().force(NODES[forced], true);
        let _ = engine.predict_intervention(&intervention, "f").unwrap();
        prop_assert_eq!(engine.get_causes(NODES[forced]).unwrap().len(), before);
        prop_assert!(engine.check_consistency().is_ok());
    }
}
