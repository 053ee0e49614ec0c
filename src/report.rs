//! Human-readable presentation of search outcomes.

use std::fmt::Display;

use bestfirst::SearchOutcome;

/// Join a path with arrows: `Arad -> Sibiu -> ... -> Bucharest`.
pub fn route<N: Display>(path: &[N]) -> String {
    path.iter()
        .map(|node| node.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// One-line summary of a search outcome.
pub fn summary<N: Display>(algorithm: &str, outcome: &SearchOutcome<N>) -> String {
    if outcome.is_found() {
        format!(
            "{} Search: Path found: {} with a path cost of {} and {} nodes expanded",
            algorithm,
            route(&outcome.path),
            outcome.cost,
            outcome.expansions
        )
    } else {
        format!("{} Search: No path found", algorithm)
    }
}
