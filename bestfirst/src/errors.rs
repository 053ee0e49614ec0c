use thiserror::Error;

/// Error produced when a search request is malformed.
///
/// An unreachable goal is not an error; it is reported through
/// [crate::engine::Cost::Unreachable] on a normal outcome.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("No heuristic table named {0:?}")]
    UnknownHeuristic(String),

    #[error("No strategy named {0:?} (expected uniform-cost, greedy, or a*)")]
    UnknownStrategy(String),
}

/// Result when a search method might fail.
pub type Result<T> = std::result::Result<T, SearchError>;
