//! Failure taxonomy for a conversion run. Every variant aborts the run.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    /// A line did not split into the fixed number of attributes.
    #[error("wrong number of attributes on line {line}: expected {expected}, found {found}")]
    AttributeCount {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("unknown transaction: {0}")]
    UnknownTransaction(String),

    #[error("invalid date '{0}'")]
    InvalidDate(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
