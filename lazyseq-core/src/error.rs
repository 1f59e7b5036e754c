use thiserror::Error;

/// Errors raised when building or draining a lazy sequence.
///
/// Running off the end of a sequence is not an error; it is reported as
/// `None`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A range was asked to advance by zero.
    #[error("range step cannot be zero")]
    ZeroStep,
    /// Exactly one item was required but the sequence is empty.
    #[error("expected exactly one item, sequence is empty")]
    Empty,
    /// At most one item was allowed but the sequence has more.
    #[error("expected at most one item, sequence has more")]
    TooMany,
}

pub type Result<T> = std::result::Result<T, Error>;
