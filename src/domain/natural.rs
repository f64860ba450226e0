//! Depth reconstruction for input already in nested-set order
//!
//! Each root's `self_and_descendants` arrives sorted by `lft`, i.e. in
//! pre-order. The depth of every node is recovered from parent ids alone by
//! keeping the parent id of each currently open ancestor level.

use tracing::{instrument, trace};

use crate::domain::{DomainResult, Leveled, NestedSetStore, Node, NodeId};

/// Parent ids of the open ancestor chain, one slot per depth.
///
/// Slot `i` holds the parent id shared by the nodes at depth `i`.
#[derive(Debug, Default)]
pub struct LevelsContext {
    levels: Vec<Option<NodeId>>,
}

impl LevelsContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Depth of the next node in pre-order with the given parent.
    ///
    /// A known parent id closes every deeper level; an unseen one opens a new
    /// level below the deepest.
    pub fn level_of(&mut self, parent_id: Option<NodeId>) -> usize {
        match self.levels.iter().position(|p| *p == parent_id) {
            Some(level) => {
                self.levels.truncate(level + 1);
                level
            }
            None => {
                self.levels.push(parent_id);
                self.levels.len() - 1
            }
        }
    }

    pub fn depth(&self) -> usize {
        self.levels.len()
    }
}

/// Flatten each root's subtree into `(node, level)` pairs.
///
/// Inadmissible nodes are dropped at emission only: their level bookkeeping
/// still happens, so their descendants are judged on their own.
///
/// Precondition: `self_and_descendants` is ascending by `lft`. Any other order
/// yields wrong levels without an error.
#[instrument(level = "debug", skip(store, roots, admissible), fields(roots = roots.len()))]
pub fn flatten<S, A>(store: &S, roots: &[Node], admissible: A) -> DomainResult<Vec<Leveled>>
where
    S: NestedSetStore + ?Sized,
    A: Fn(&Node) -> bool,
{
    let mut result = Vec::new();
    for root in roots {
        let set = store.self_and_descendants(root)?;
        trace!("flatten: root={} size={}", root.id, set.len());

        let mut levels = LevelsContext::new();
        for node in set {
            let level = levels.level_of(node.parent_id);
            if admissible(&node) {
                result.push((node, level));
            } else {
                trace!("flatten: excluded {}", node.id);
            }
        }
    }
    Ok(result)
}
