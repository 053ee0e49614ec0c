//! Consistency and admissibility checks for heuristic tables.
//!
//! Both checks report one boolean per table. Consistency scans the edge
//! list directly; admissibility measures true costs by running the
//! engine with the uniform-cost strategy from every node, which is
//! always cost-optimal and therefore a sound oracle.

use std::fmt::Debug;

use tracing::debug;

use crate::engine::{search, Cost};
use crate::errors::{Result, SearchError};
use crate::graph::{CostGraph, HeuristicTable};
use crate::strategy::UniformCost;

fn table_for<'g, N>(graph: &'g CostGraph<N>, table_id: &str) -> Result<&'g HeuristicTable<N>>
where
    N: Ord,
{
    graph
        .table(table_id)
        .ok_or_else(|| SearchError::UnknownHeuristic(table_id.to_string()))
}

/// Whether the table satisfies `h(n) <= cost(n, c) + h(c)` on every
/// edge `(n, c)`. Short-circuits on the first violating edge; the
/// contract is a table-level boolean, not a violation report.
pub fn check_consistency<N>(graph: &CostGraph<N>, table_id: &str) -> Result<bool>
where
    N: Ord + Clone + Debug,
{
    let table = table_for(graph, table_id)?;

    for node in graph.nodes() {
        for (neighbor, cost) in graph.neighbors(node) {
            if table.estimate(node) > cost + table.estimate(neighbor) {
                debug!(table = table_id, node = ?node, neighbor = ?neighbor, "consistency violated");
                return Ok(false);
            }
        }
    }
    Ok(true)
}

/// Whether the table never overestimates the true cost from any node to
/// `goal`.
///
/// A consistent table is admissible by the standard theorem, so that
/// case is answered without searching; the boolean is the same either
/// way, the shortcut only skips the per-node uniform-cost searches.
/// Nodes that cannot reach the goal have infinite true cost, which no
/// finite estimate can overestimate.
pub fn check_admissibility<N>(graph: &CostGraph<N>, table_id: &str, goal: &N) -> Result<bool>
where
    N: Ord + Clone + Debug,
{
    if check_consistency(graph, table_id)? {
        return Ok(true);
    }
    let table = table_for(graph, table_id)?;

    for node in graph.nodes() {
        let truth = search(graph, UniformCost, node, goal).cost;
        if Cost::Finite(table.estimate(node)) > truth {
            debug!(table = table_id, node = ?node, "admissibility violated");
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod test {
    use super::*;

    /// The 7-node lettered graph: every edge points down toward g.
    /// h1 is consistent (and so admissible); h2 overestimates.
    fn lettered() -> CostGraph<&'static str> {
        let mut graph = CostGraph::new();
        graph.add_edge("a", "b", 1);
        graph.add_edge("a", "c", 4);
        graph.add_edge("b", "d", 3);
        graph.add_edge("b", "e", 5);
        graph.add_edge("c", "e", 2);
        graph.add_edge("c", "f", 2);
        graph.add_edge("d", "g", 6);
        graph.add_edge("e", "g", 1);
        graph.add_edge("f", "g", 3);

        let h1 = graph.heuristic_table_mut("h1");
        for &(node, estimate) in &[
            ("a", 7),
            ("b", 6),
            ("c", 3),
            ("d", 6),
            ("e", 1),
            ("f", 3),
            ("g", 0),
        ] {
            h1.insert(node, estimate);
        }

        let h2 = graph.heuristic_table_mut("h2");
        for &(node, estimate) in &[
            ("a", 10),
            ("b", 9),
            ("c", 5),
            ("d", 8),
            ("e", 3),
            ("f", 4),
            ("g", 0),
        ] {
            h2.insert(node, estimate);
        }

        graph
    }

    #[test]
    fn h1_is_consistent_and_admissible() {
        let graph = lettered();
        assert!(check_consistency(&graph, "h1").unwrap());
        assert!(check_admissibility(&graph, "h1", &"g").unwrap());
    }

    #[test]
    fn h2_is_neither() {
        let graph = lettered();
        assert!(!check_consistency(&graph, "h2").unwrap());
        assert!(!check_admissibility(&graph, "h2", &"g").unwrap());
    }

    #[test]
    fn inconsistent_tables_can_still_be_admissible() {
        let mut graph = lettered();
        // Like h1 but with b dropped to 0: the a->b edge violates
        // consistency, yet nothing overestimates its true cost.
        let h3 = graph.heuristic_table_mut("h3");
        for &(node, estimate) in &[
            ("a", 7),
            ("b", 0),
            ("c", 3),
            ("d", 6),
            ("e", 1),
            ("f", 3),
            ("g", 0),
        ] {
            h3.insert(node, estimate);
        }

        assert!(!check_consistency(&graph, "h3").unwrap());
        assert!(check_admissibility(&graph, "h3", &"g").unwrap());
    }

    #[test]
    fn admissibility_agrees_with_direct_measurement() {
        let graph = lettered();
        let table = graph.table("h1").unwrap();

        for node in graph.nodes() {
            let truth = search(&graph, UniformCost, node, &"g").cost;
            assert!(Cost::Finite(table.estimate(node)) <= truth);
        }
    }

    #[test]
    fn unreachable_nodes_never_overestimate() {
        let mut graph = CostGraph::new();
        graph.add_edge("a", "goal", 1);
        graph.add_edge("island", "reef", 1);
        let table = graph.heuristic_table_mut("h");
        table.insert("a", 5); // overestimates: true cost is 1
        table.insert("island", 1_000_000);

        // Inconsistent (a -> goal violates), and inadmissible only
        // because of a; the stranded island is fine at any estimate.
        assert!(!check_admissibility(&graph, "h", &"goal").unwrap());

        let mut fixed = graph.clone();
        fixed.heuristic_table_mut("h").insert("a", 1);
        assert!(check_admissibility(&fixed, "h", &"goal").unwrap());
    }

    #[test]
    fn unknown_table_is_a_typed_error() {
        let graph = lettered();
        let err = check_consistency(&graph, "h9").unwrap_err();
        match err {
            SearchError::UnknownHeuristic(id) => assert_eq!(id, "h9"),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
