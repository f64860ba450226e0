//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::NodeId;

/// Domain errors represent store contract violations and lookup failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("duplicate node id: {0}")]
    DuplicateId(NodeId),

    #[error("invalid bounds for node {id}: lft={lft} must be less than rgt={rgt}")]
    InvalidBounds { id: NodeId, lft: i64, rgt: i64 },

    #[error("node {id} refers to unknown parent {parent_id}")]
    UnknownParent { id: NodeId, parent_id: NodeId },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
