//! Read boundary of the nested-set storage layer
//!
//! Traversal code only ever reads through this trait, so any persistence
//! backend (or a mock in tests) can stand behind it.

use crate::domain::{DomainResult, Node};

/// Read-only access to a nested-set tree.
pub trait NestedSetStore {
    /// All root nodes, in store order.
    fn roots(&self) -> DomainResult<Vec<Node>>;

    /// The node followed by all its descendants, ascending by `lft`.
    ///
    /// Callers rely on this ordering: a node always precedes its descendants
    /// and its descendant block is contiguous.
    fn self_and_descendants(&self, node: &Node) -> DomainResult<Vec<Node>>;

    /// True if the node has no persisted identity yet.
    fn is_new_entity(&self, node: &Node) -> bool;

    /// True if `reference` could be moved beneath `candidate`.
    ///
    /// Impossible when `candidate` is `reference` itself, one of its
    /// descendants, or lives in another scope.
    fn move_possible(&self, candidate: &Node, reference: &Node) -> bool {
        candidate.id != reference.id
            && candidate.same_scope(reference)
            && !(reference.spans(candidate.lft) || reference.spans(candidate.rgt))
    }
}

