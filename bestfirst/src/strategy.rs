//! Priority strategies for best-first search.
//!
//! Each algorithm differs only in how it turns accumulated path cost
//! and heuristic estimate into a frontier priority, so that mapping is
//! the whole strategy interface. Strategies are injected into the
//! engine; the frontier loop itself has a single code path.

use std::str::FromStr;

use crate::errors::SearchError;

/// Maps accumulated cost and heuristic estimate to a frontier priority.
/// Lower priorities are expanded first.
pub trait Strategy {
    fn priority(&self, cost: u64, estimate: u64) -> u64;
}

/// Expand by accumulated cost alone (Dijkstra ordering). Ignores the
/// heuristic and is always cost-optimal.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformCost;

impl Strategy for UniformCost {
    fn priority(&self, cost: u64, _estimate: u64) -> u64 {
        cost
    }
}

/// Expand by heuristic estimate alone. Fast, but offers no optimality
/// guarantee; it will happily commit to an expensive road that looks
/// close to the goal.
#[derive(Debug, Clone, Copy, Default)]
pub struct Greedy;

impl Strategy for Greedy {
    fn priority(&self, _cost: u64, estimate: u64) -> u64 {
        estimate
    }
}

/// Expand by accumulated cost plus heuristic estimate. Cost-optimal
/// whenever the heuristic is admissible, typically because it is also
/// consistent.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStar;

impl Strategy for AStar {
    fn priority(&self, cost: u64, estimate: u64) -> u64 {
        cost + estimate
    }
}

/// Any plain function of (cost, estimate) is a strategy. Useful for
/// synthetic orderings in tests, or weighted variants of A*.
impl<F> Strategy for F
where
    F: Fn(u64, u64) -> u64,
{
    fn priority(&self, cost: u64, estimate: u64) -> u64 {
        self(cost, estimate)
    }
}

/// Strategy selection by name, for callers which pick the algorithm at
/// runtime. Unknown names are a typed error, never a silent default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    UniformCost,
    Greedy,
    AStar,
}

impl StrategyKind {
    pub fn name(&self) -> &'static str {
        match self {
            StrategyKind::UniformCost => "Uniform-Cost",
            StrategyKind::Greedy => "Greedy",
            StrategyKind::AStar => "A*",
        }
    }
}

impl Strategy for StrategyKind {
    fn priority(&self, cost: u64, estimate: u64) -> u64 {
        match self {
            StrategyKind::UniformCost => UniformCost.priority(cost, estimate),
            StrategyKind::Greedy => Greedy.priority(cost, estimate),
            StrategyKind::AStar => AStar.priority(cost, estimate),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "uniform-cost" | "ucs" => Ok(StrategyKind::UniformCost),
            "greedy" => Ok(StrategyKind::Greedy),
            "a*" | "astar" => Ok(StrategyKind::AStar),
            _ => Err(SearchError::UnknownStrategy(s.to_string())),
        }
    }
}
