//! Domain-level error types.

use thiserror::Error;

/// Repository-level errors.
///
/// Absence of a record is not an error at this layer; lookups return
/// `Option` and the HTTP boundary decides what absence means.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
