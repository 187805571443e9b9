use thiserror::Error;

/// Errors from exercise persistence operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No exercise exists under the given id.
    #[error("exercise {0} not found")]
    NotFound(i64),
}
