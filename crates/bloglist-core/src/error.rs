//! Domain-level error types.

use thiserror::Error;
use uuid::Uuid;

/// Business rule violations.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{entity} {id} does not exist")]
    NotFound { entity: &'static str, id: Uuid },

    /// Missing, blank or out-of-range input. The message names the field.
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Duplicate(String),

    /// The caller is authenticated but does not own the record.
    #[error("only the creator can {0}")]
    NotOwner(&'static str),
}

impl DomainError {
    pub fn blog_not_found(id: Uuid) -> Self {
        Self::NotFound { entity: "blog", id }
    }
}

/// Failures reported by a storage backend.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("store unreachable: {0}")]
    Connection(String),

    #[error("store query failed: {0}")]
    Query(String),

    #[error("record does not exist")]
    NotFound,

    /// A uniqueness or integrity rule of the store rejected the write.
    #[error("constraint violated: {0}")]
    Constraint(String),
}
