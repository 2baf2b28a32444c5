//! Error taxonomy for the service layer.
//!
//! The pure rule functions in [`crate::domain::rules`] never fail; everything
//! that can go wrong lives here. Repositories report failures as
//! `anyhow::Error`, which the services fold into [`DomainError::Storage`].

use thiserror::Error;

/// Errors surfaced by the domain services.
///
/// Each variant maps to one user-facing failure mode: a lookup miss, a
/// uniqueness violation on insert, a business-rule rejection, or the
/// database being unavailable. Inserts either fully succeed with an
/// assigned identifier or fail with one of these.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A referenced record does not exist (or is no longer active).
    #[error("{0}")]
    NotFound(String),

    /// An insert would violate a unique business key (DNI, plate).
    #[error("{0}")]
    DuplicateKey(String),

    /// A business rule predicate rejected the record.
    #[error("{0}")]
    ValidationFailed(String),

    /// The persistence layer failed (database unavailable, I/O error).
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl DomainError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        DomainError::NotFound(msg.into())
    }

    pub fn duplicate_key(msg: impl Into<String>) -> Self {
        DomainError::DuplicateKey(msg.into())
    }

    pub fn validation_failed(msg: impl Into<String>) -> Self {
        DomainError::ValidationFailed(msg.into())
    }
}
