//! Integrity check: every link must be reachable from the id index, its
//! cause's outgoing list, and its effect's incoming list.

use petgraph::visit::EdgeRef;

use causa_core::errors::CausalError;

use super::link_store::LinkStore;

/// Verify the arena and its indices agree. Returns the first violation found.
pub fn check(store: &LinkStore) -> Result<(), CausalError> {
    let graph = &store.graph;

    if store.link_index.len() != graph.edge_count() {
        return Err(inconsistent(format!(
            "link index has {} entries but graph has {} edges",
            store.link_index.len(),
            graph.edge_count()
        )));
    }
    if store.node_index.len() != graph.node_count() {
        return Err(inconsistent(format!(
            "node index has {} entries but graph has {} nodes",
            store.node_index.len(),
            graph.node_count()
        )));
    }

    for (concept_id, &idx) in &store.node_index {
        match graph.node_weight(idx) {
            Some(node) if &node.concept_id == concept_id => {}
            _ => {
                return Err(inconsistent(format!(
                    "node index entry {concept_id} points at the wrong node"
                )))
            }
        }
    }

    for (link_id, &edge) in &store.link_index {
        let Some(weight) = graph.edge_weight(edge) else {
            return Err(inconsistent(format!("link {link_id} has no edge")));
        };
        let link = &weight.link;
        if &link.id != link_id {
            return Err(inconsistent(format!(
                "link index entry {link_id} points at link {}",
                link.id
            )));
        }

        let (Some(source), Some(target)) = (store.get_node(&link.cause), store.get_node(&link.effect))
        else {
            return Err(inconsistent(format!(
                "link {link_id} references an unindexed concept"
            )));
        };

        let in_cause_index = graph
            .edges_directed(source, petgraph::Direction::Outgoing)
            .any(|e| e.id() == edge);
        let in_effect_index = graph
            .edges_directed(target, petgraph::Direction::Incoming)
            .any(|e| e.id() == edge);
        if !in_cause_index || !in_effect_index {
            return Err(inconsistent(format!(
                "link {link_id} missing from the {} index",
                if in_cause_index { "effect" } else { "cause" }
            )));
        }
    }

    Ok(())
}

fn inconsistent(details: String) -> CausalError {
    CausalError::GraphInconsistency { details }
}
