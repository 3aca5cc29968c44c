use thiserror::Error;

/// Errors raised while interpreting search input.
///
/// The engine itself never fails; only interpreting caller-supplied values
/// can.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("unknown result type '{0}' (expected songs, writers, or publishers)")]
    UnknownResultType(String),

    #[error("user {0} is not linked to a contributor")]
    NoContributor(String),
}
