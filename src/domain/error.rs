//! Domain-level errors (no external dependencies)

use generational_arena::Index;
use thiserror::Error;

/// Domain errors represent violations of the family tree invariants.
/// These are independent of configuration and CLI concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid person reference: {0:?}")]
    InvalidReference(Index),

    #[error("person {child:?} already has parent {parent:?}")]
    AlreadyHasParent { child: Index, parent: Index },

    #[error("cycle detected in hierarchy: {0:?}")]
    CycleDetected(Index),

    #[error("invalid gender code: {0:?} (expected 'M' or 'F')")]
    InvalidGender(char),

    #[error("invalid birth date {value:?}: {reason}")]
    InvalidBirthDate { value: String, reason: String },

    #[error("failed to render tree")]
    Render(#[from] std::fmt::Error),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
