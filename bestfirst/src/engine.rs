//! The frontier loop shared by every strategy.
//!
//! This is classic best-first search with an explicit explored set and
//! lazy deletion: a node may sit in the frontier several times at
//! different costs, and stale copies are discarded when popped rather
//! than updated in place. Checking explored membership only at pop time
//! is the correctness mechanism that makes re-insertion safe; replacing
//! it with a decrease-key queue would change the expansion counts used
//! to compare algorithms.

use std::cmp::{Ord, Ordering, PartialOrd};
use std::collections::{BTreeSet, BinaryHeap};
use std::fmt;
use std::fmt::Debug;

use tracing::{debug, trace};

use crate::errors::{Result, SearchError};
use crate::graph::{CostGraph, HeuristicTable};
use crate::strategy::Strategy;

/// Total accumulated path cost, with an explicit sentinel for goals the
/// frontier never reached. `Unreachable` orders above every finite cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Cost {
    Finite(u64),
    Unreachable,
}

impl Cost {
    pub fn is_finite(&self) -> bool {
        matches!(self, Cost::Finite(_))
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Cost::Finite(cost) => write!(f, "{}", cost),
            Cost::Unreachable => write!(f, "unreachable"),
        }
    }
}

/// What a search returns: the path from start to goal (empty when the
/// goal was unreachable), its total cost, and how many expansions the
/// search performed. The expansion count is the side channel used to
/// compare search effort across strategies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome<N> {
    pub path: Vec<N>,
    pub cost: Cost,
    pub expansions: usize,
}

impl<N> SearchOutcome<N> {
    pub fn is_found(&self) -> bool {
        self.cost.is_finite()
    }

    fn unreachable(expansions: usize) -> Self {
        SearchOutcome {
            path: Vec::new(),
            cost: Cost::Unreachable,
            expansions,
        }
    }
}

/// A discovered-but-unexpanded node together with the path that reached
/// it. The path is owned by the entry and copied on expansion, never
/// shared. `seq` records insertion order and breaks priority ties, so a
/// fixed input always expands in the same order.
#[derive(Debug)]
struct Entry<N> {
    priority: u64,
    seq: usize,
    cost: u64,
    node: N,
    path: Vec<N>,
}

impl<N> PartialEq for Entry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl<N> Eq for Entry<N> {}

impl<N> Ord for Entry<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.seq.cmp(&other.seq))
            .reverse()
    }
}

impl<N> PartialOrd for Entry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A search engine bound to a graph, a strategy, and a heuristic table.
///
/// The graph and its tables are read-only here; each [Search::run] call
/// owns its frontier and explored set, so separate runs against the
/// same graph are independent.
#[derive(Debug)]
pub struct Search<'g, N, P>
where
    N: Ord,
{
    graph: &'g CostGraph<N>,
    strategy: P,
    table: Option<&'g HeuristicTable<N>>,
}

impl<'g, N, P> Search<'g, N, P>
where
    N: Ord + Clone + Debug,
    P: Strategy,
{
    /// A searcher using the graph's default heuristic table.
    pub fn new(graph: &'g CostGraph<N>, strategy: P) -> Self {
        Search {
            graph,
            strategy,
            table: None,
        }
    }

    /// A searcher bound to a specific named heuristic table. The table
    /// id is validated eagerly so that [Search::run] cannot fail.
    pub fn with_table(graph: &'g CostGraph<N>, strategy: P, table: &str) -> Result<Self> {
        let table = graph
            .table(table)
            .ok_or_else(|| SearchError::UnknownHeuristic(table.to_string()))?;
        Ok(Search {
            graph,
            strategy,
            table: Some(table),
        })
    }

    fn estimate(&self, node: &N) -> u64 {
        match self.table {
            Some(table) => table.estimate(node),
            None => self.graph.heuristic(node),
        }
    }

    /// Run the search from `start` to `goal`.
    ///
    /// An unreachable goal is a normal outcome, reported with an empty
    /// path and [Cost::Unreachable]. A start the graph has never heard
    /// of is a node with no outgoing edges, so the search fails after a
    /// single expansion unless start equals goal.
    pub fn run(&self, start: &N, goal: &N) -> SearchOutcome<N> {
        let mut frontier = BinaryHeap::new();
        let mut explored = BTreeSet::new();
        let mut expansions = 0;
        let mut seq = 0;

        frontier.push(Entry {
            priority: self.strategy.priority(0, self.estimate(start)),
            seq,
            cost: 0,
            node: start.clone(),
            path: vec![start.clone()],
        });

        while let Some(entry) = frontier.pop() {
            if entry.node == *goal {
                expansions += 1;
                debug!(
                    cost = entry.cost,
                    expansions,
                    "goal reached"
                );
                return SearchOutcome {
                    path: entry.path,
                    cost: Cost::Finite(entry.cost),
                    expansions,
                };
            }

            // Stale duplicate from an earlier, cheaper discovery.
            if explored.contains(&entry.node) {
                continue;
            }
            explored.insert(entry.node.clone());
            expansions += 1;
            trace!(node = ?entry.node, priority = entry.priority, cost = entry.cost, "expanding");

            for (neighbor, edge_cost) in self.graph.neighbors(&entry.node) {
                if explored.contains(neighbor) {
                    continue;
                }
                let cost = entry.cost + edge_cost;
                let mut path = entry.path.clone();
                path.push(neighbor.clone());
                seq += 1;
                frontier.push(Entry {
                    priority: self.strategy.priority(cost, self.estimate(neighbor)),
                    seq,
                    cost,
                    node: neighbor.clone(),
                    path,
                });
            }
        }

        debug!(expansions, "frontier exhausted without reaching the goal");
        SearchOutcome::unreachable(expansions)
    }
}

/// Run a single best-first search over `graph` with the given strategy,
/// reading estimates from the graph's default heuristic table.
pub fn search<N, P>(graph: &CostGraph<N>, strategy: P, start: &N, goal: &N) -> SearchOutcome<N>
where
    N: Ord + Clone + Debug,
    P: Strategy,
{
    Search::new(graph, strategy).run(start, goal)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::strategy::{AStar, Greedy, StrategyKind, UniformCost};

    /// Two routes from a to d: the direct-looking one through b costs
    /// 6, the one through c costs 5. Estimates are admissible.
    fn diamond() -> CostGraph<&'static str> {
        let mut graph = CostGraph::new();
        graph.add_edge("a", "b", 1);
        graph.add_edge("a", "c", 4);
        graph.add_edge("b", "d", 5);
        graph.add_edge("c", "d", 1);
        let table = graph.heuristic_table_mut("h");
        table.insert("a", 5);
        table.insert("b", 4);
        table.insert("c", 1);
        table.insert("d", 0);
        graph
    }

    /// Estimates lure greedy search onto the expensive branch.
    fn trap() -> CostGraph<&'static str> {
        let mut graph = CostGraph::new();
        graph.add_edge("a", "b", 1);
        graph.add_edge("a", "c", 1);
        graph.add_edge("b", "goal", 10);
        graph.add_edge("c", "goal", 1);
        let table = graph.heuristic_table_mut("h");
        table.insert("b", 1);
        table.insert("c", 5);
        graph
    }

    #[test]
    fn uniform_cost_finds_the_cheapest_path() {
        let graph = diamond();
        let outcome = search(&graph, UniformCost, &"a", &"d");

        assert_eq!(outcome.path, vec!["a", "c", "d"]);
        assert_eq!(outcome.cost, Cost::Finite(5));
        assert_eq!(outcome.expansions, 4);
    }

    #[test]
    fn astar_matches_uniform_cost_with_admissible_estimates() {
        let graph = diamond();
        let outcome = search(&graph, AStar, &"a", &"d");

        assert_eq!(outcome.path, vec!["a", "c", "d"]);
        assert_eq!(outcome.cost, Cost::Finite(5));
    }

    #[test]
    fn greedy_is_not_cost_optimal() {
        let graph = trap();
        let greedy = search(&graph, Greedy, &"a", &"goal");
        let ucs = search(&graph, UniformCost, &"a", &"goal");

        assert_eq!(greedy.path, vec!["a", "b", "goal"]);
        assert_eq!(greedy.cost, Cost::Finite(11));
        assert_eq!(ucs.cost, Cost::Finite(2));
    }

    #[test]
    fn start_equals_goal_is_one_expansion() {
        let graph = diamond();
        for kind in &[
            StrategyKind::UniformCost,
            StrategyKind::Greedy,
            StrategyKind::AStar,
        ] {
            let outcome = search(&graph, *kind, &"a", &"a");
            assert_eq!(outcome.path, vec!["a"]);
            assert_eq!(outcome.cost, Cost::Finite(0));
            assert_eq!(outcome.expansions, 1);
        }
    }

    #[test]
    fn start_equals_goal_holds_even_off_the_graph() {
        let graph = diamond();
        let outcome = search(&graph, UniformCost, &"nowhere", &"nowhere");

        assert_eq!(outcome.path, vec!["nowhere"]);
        assert_eq!(outcome.cost, Cost::Finite(0));
        assert_eq!(outcome.expansions, 1);
    }

    #[test]
    fn unreachable_goal_is_a_normal_outcome() {
        let graph = diamond();
        for kind in &[
            StrategyKind::UniformCost,
            StrategyKind::Greedy,
            StrategyKind::AStar,
        ] {
            // All edges point away from d.
            let outcome = search(&graph, *kind, &"d", &"a");
            assert!(outcome.path.is_empty());
            assert_eq!(outcome.cost, Cost::Unreachable);
        }
    }

    #[test]
    fn unknown_start_fails_after_one_expansion() {
        let graph = diamond();
        let outcome = search(&graph, UniformCost, &"nowhere", &"d");

        assert!(outcome.path.is_empty());
        assert_eq!(outcome.cost, Cost::Unreachable);
        assert_eq!(outcome.expansions, 1);
    }

    #[test]
    fn repeated_searches_are_identical() {
        let graph = diamond();
        let first = search(&graph, AStar, &"a", &"d");
        let second = search(&graph, AStar, &"a", &"d");

        assert_eq!(first, second);
    }

    #[test]
    fn closures_inject_as_strategies() {
        let graph = diamond();
        let weighted = |cost: u64, estimate: u64| cost + 2 * estimate;
        let outcome = search(&graph, weighted, &"a", &"d");

        assert_eq!(outcome.cost, Cost::Finite(5));
    }

    #[test]
    fn named_table_binding_is_validated_eagerly() {
        let graph = diamond();
        let searcher = Search::with_table(&graph, AStar, "h").unwrap();
        assert_eq!(searcher.run(&"a", &"d").cost, Cost::Finite(5));

        let err = Search::with_table(&graph, AStar, "missing").unwrap_err();
        match err {
            SearchError::UnknownHeuristic(id) => assert_eq!(id, "missing"),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
