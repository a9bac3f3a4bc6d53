//! Completion propagation: derived edge state from node completion flags.
//!
//! An edge is highlighted iff both endpoints are completed. The flag is a
//! pure function of the two endpoints evaluated at recompute time; only
//! edges incident to the changed node can differ, so [`set_completed`]
//! refreshes those and nothing else.
//!
//! All completion changes MUST go through [`set_completed`]. Flipping a
//! node's flag by any other route leaves incident edges stale.

use crate::error::CoreError;
use crate::graph::SkillGraph;
use crate::id::NodeId;

/// Sets a node's completion flag and recomputes the highlight state of every
/// edge touching that node.
///
/// Fails with `NodeNotFound` when the node is absent; the graph is left
/// untouched in that case.
pub fn set_completed(graph: &mut SkillGraph, id: NodeId, completed: bool) -> Result<(), CoreError> {
    graph.get_node_mut(id)?.completed = completed;
    graph.refresh_incident_highlights(id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlight_requires_both_endpoints_complete() {
        let mut graph = SkillGraph::new();
        let a = graph.add_node("a");
        let b = graph.add_node("b");
        let e = graph.add_edge(a, b).unwrap();

        assert!(!graph.get_edge(e).unwrap().highlighted);

        set_completed(&mut graph, a, true).unwrap();
        assert!(!graph.get_edge(e).unwrap().highlighted);

        set_completed(&mut graph, b, true).unwrap();
        assert!(graph.get_edge(e).unwrap().highlighted);
    }

    #[test]
    fn unmarking_one_endpoint_clears_highlight_without_touching_the_other() {
        let mut graph = SkillGraph::new();
        let a = graph.add_node("a");
        let b = graph.add_node("b");
        let e = graph.add_edge(a, b).unwrap();

        set_completed(&mut graph, a, true).unwrap();
        set_completed(&mut graph, b, true).unwrap();
        assert!(graph.get_edge(e).unwrap().highlighted);

        // No operation on b is needed for the edge to revert.
        set_completed(&mut graph, a, false).unwrap();
        assert!(!graph.get_edge(e).unwrap().highlighted);
        assert!(graph.get_node(b).unwrap().completed);
    }

    #[test]
    fn only_incident_edges_are_recomputed() {
        let mut graph = SkillGraph::new();
        let a = graph.add_node("a");
        let b = graph.add_node("b");
        let c = graph.add_node("c");
        let d = graph.add_node("d");
        let near = graph.add_edge(a, b).unwrap();
        let far = graph.add_edge(c, d).unwrap();

        set_completed(&mut graph, c, true).unwrap();
        set_completed(&mut graph, d, true).unwrap();
        assert!(graph.get_edge(far).unwrap().highlighted);

        set_completed(&mut graph, a, true).unwrap();
        set_completed(&mut graph, b, true).unwrap();
        assert!(graph.get_edge(near).unwrap().highlighted);
        // The far edge is untouched by a/b updates.
        assert!(graph.get_edge(far).unwrap().highlighted);
    }

    #[test]
    fn absent_node_fails_and_mutates_nothing() {
        let mut graph = SkillGraph::new();
        let a = graph.add_node("a");
        let b = graph.add_node("b");
        let e = graph.add_edge(a, b).unwrap();

        let result = set_completed(&mut graph, NodeId(99), true);
        assert!(matches!(result, Err(CoreError::NodeNotFound { .. })));
        assert!(!graph.get_edge(e).unwrap().highlighted);
    }

    #[test]
    fn scenario_from_two_node_chain() {
        // create A, B; edge A->B starts unhighlighted; completing A then B
        // highlights it; unmarking A clears it.
        let mut graph = SkillGraph::new();
        let a = graph.add_node("A");
        let b = graph.add_node("B");
        let e1 = graph.add_edge(a, b).unwrap();
        assert!(!graph.get_edge(e1).unwrap().highlighted);

        set_completed(&mut graph, a, true).unwrap();
        assert!(!graph.get_edge(e1).unwrap().highlighted);

        set_completed(&mut graph, b, true).unwrap();
        assert!(graph.get_edge(e1).unwrap().highlighted);

        set_completed(&mut graph, a, false).unwrap();
        assert!(!graph.get_edge(e1).unwrap().highlighted);
    }
}
