//! Informed best-first search over weighted directed graphs.
//!
//! One frontier loop ([engine::Search]) is parameterized by a
//! [Strategy], which turns accumulated cost and heuristic estimate
//! into a frontier priority. Uniform-cost, greedy, and A* search are
//! three instances of that one shape. The [analysis] module checks
//! heuristic tables for consistency and admissibility.

pub mod analysis;
pub mod engine;
mod errors;
pub mod graph;
pub mod strategy;

pub use analysis::check_admissibility;
pub use analysis::check_consistency;
pub use engine::search;
pub use engine::Cost;
pub use engine::Search;
pub use engine::SearchOutcome;
pub use errors::Result as SearchResult;
pub use errors::SearchError;
pub use graph::CostGraph;
pub use graph::HeuristicTable;
pub use strategy::AStar;
pub use strategy::Greedy;
pub use strategy::Strategy;
pub use strategy::StrategyKind;
pub use strategy::UniformCost;
