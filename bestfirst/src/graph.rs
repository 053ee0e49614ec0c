//! Graph datastructures for informed search.
//!
//! A [CostGraph] is a weighted directed graph plus any number of named
//! [HeuristicTable]s evaluated against it. Adjacency and estimates live
//! in ordered maps so that neighbor iteration, and therefore expansion
//! order, is reproducible from run to run.

use std::collections::{BTreeMap, BTreeSet};

/// A named table of per-node estimates of the cost remaining to a goal.
///
/// Unknown nodes estimate 0. That is the defined fallback for nodes the
/// table does not mention, not an error.
#[derive(Debug, Clone)]
pub struct HeuristicTable<N>
where
    N: Ord,
{
    estimates: BTreeMap<N, u64>,
}

impl<N> Default for HeuristicTable<N>
where
    N: Ord,
{
    fn default() -> Self {
        HeuristicTable {
            estimates: BTreeMap::new(),
        }
    }
}

impl<N> HeuristicTable<N>
where
    N: Ord,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, node: N, estimate: u64) {
        self.estimates.insert(node, estimate);
    }

    /// Estimated cost from this node to the goal, 0 when unknown.
    pub fn estimate(&self, node: &N) -> u64 {
        self.estimates.get(node).copied().unwrap_or(0)
    }
}

/// A weighted directed graph with heuristic annotations.
///
/// Edge costs are `u64`, so non-negativity is a type invariant rather
/// than a runtime check. The graph is built once by the caller and only
/// read during searches.
#[derive(Debug, Clone)]
pub struct CostGraph<N>
where
    N: Ord,
{
    edges: BTreeMap<N, BTreeMap<N, u64>>,
    tables: BTreeMap<String, HeuristicTable<N>>,
    default_table: Option<String>,
}

impl<N> Default for CostGraph<N>
where
    N: Ord,
{
    fn default() -> Self {
        CostGraph {
            edges: BTreeMap::new(),
            tables: BTreeMap::new(),
            default_table: None,
        }
    }
}

impl<N> CostGraph<N>
where
    N: Ord,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_edge(&mut self, from: N, to: N, cost: u64) {
        self.edges
            .entry(from)
            .or_insert_with(BTreeMap::new)
            .insert(to, cost);
    }

    /// Insert the edge in both directions, for road-map style data
    /// where every connection is listed symmetrically.
    pub fn add_undirected_edge(&mut self, a: N, b: N, cost: u64)
    where
        N: Clone,
    {
        self.add_edge(a.clone(), b.clone(), cost);
        self.add_edge(b, a, cost);
    }

    /// The heuristic table with this id, created empty if absent.
    /// The first table added becomes the graph's default.
    pub fn heuristic_table_mut(&mut self, id: &str) -> &mut HeuristicTable<N> {
        if self.default_table.is_none() {
            self.default_table = Some(id.to_string());
        }
        self.tables
            .entry(id.to_string())
            .or_insert_with(HeuristicTable::new)
    }

    pub fn table(&self, id: &str) -> Option<&HeuristicTable<N>> {
        self.tables.get(id)
    }

    /// Iterate over every heuristic table carried by this graph.
    pub fn tables(&self) -> impl Iterator<Item = (&str, &HeuristicTable<N>)> {
        self.tables.iter().map(|(id, table)| (id.as_str(), table))
    }

    /// Outgoing edges of a node with their costs. A node absent from
    /// the adjacency map simply has no outgoing edges.
    pub fn neighbors(&self, node: &N) -> impl Iterator<Item = (&N, u64)> {
        self.edges
            .get(node)
            .into_iter()
            .flat_map(|targets| targets.iter().map(|(n, cost)| (n, *cost)))
    }

    /// Cost of the edge from `from` to `to`, 0 when no such edge exists.
    /// Edge absence is indistinguishable from a zero-cost edge; this is
    /// a modeling simplification, and searches only query edges they
    /// discovered through [CostGraph::neighbors].
    pub fn edge_cost(&self, from: &N, to: &N) -> u64 {
        self.edges
            .get(from)
            .and_then(|targets| targets.get(to))
            .copied()
            .unwrap_or(0)
    }

    /// Estimate from the default heuristic table, 0 when the graph
    /// carries no tables at all.
    pub fn heuristic(&self, node: &N) -> u64 {
        self.default_table
            .as_ref()
            .and_then(|id| self.tables.get(id))
            .map(|table| table.estimate(node))
            .unwrap_or(0)
    }

    /// Every node mentioned as a source or destination, in order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        let mut all: BTreeSet<&N> = self.edges.keys().collect();
        for targets in self.edges.values() {
            all.extend(targets.keys());
        }
        all.into_iter()
    }

    /// Number of distinct nodes.
    pub fn len(&self) -> usize {
        self.nodes().count()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
