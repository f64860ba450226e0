//! Tree reconstruction with caller-defined sibling order
//!
//! Structure is derived purely from parent ids, so the fetched set may be in
//! any order. Every sibling group is sorted independently before recursing.

use std::cmp::Ordering;

use itertools::Itertools;
use tracing::{instrument, trace};

use crate::domain::{DomainResult, Leveled, NestedSetStore, Node};

/// Emit `node` and its sorted subtree, starting at `level`.
///
/// An inadmissible node suppresses its entire subtree. Results are appended to
/// `acc`, which is handed back for chaining.
pub fn build_node<C, A>(
    node: &Node,
    set: &[Node],
    compare: &C,
    admissible: &A,
    level: usize,
    mut acc: Vec<Leveled>,
) -> Vec<Leveled>
where
    C: Fn(&Node, &Node) -> Ordering,
    A: Fn(&Node) -> bool,
{
    if !admissible(node) {
        trace!("build_node: pruned {}", node.id);
        return acc;
    }
    acc.push((node.clone(), level));

    if !node.is_leaf() {
        let children = set
            .iter()
            .filter(|n| n.parent_id == Some(node.id))
            .sorted_by(|a, b| compare(*a, *b));
        for child in children {
            acc = build_node(child, set, compare, admissible, level.saturating_add(1), acc);
        }
    }
    acc
}

/// Sort the roots, then rebuild each root's subtree in sorted order.
///
/// `compare` is applied at every sibling group and must be a pure function
/// of the nodes. A non-total order gives whatever order the sort produces.
#[instrument(level = "debug", skip(store, roots, compare, admissible), fields(roots = roots.len()))]
pub fn build<S, C, A>(
    store: &S,
    roots: &[Node],
    compare: C,
    admissible: A,
    start_level: usize,
) -> DomainResult<Vec<Leveled>>
where
    S: NestedSetStore + ?Sized,
    C: Fn(&Node, &Node) -> Ordering,
    A: Fn(&Node) -> bool,
{
    let mut result = Vec::new();
    for root in roots.iter().sorted_by(|a, b| compare(*a, *b)) {
        let set = store.self_and_descendants(root)?;
        trace!("build: root={} size={}", root.id, set.len());
        result = build_node(root, &set, &compare, &admissible, start_level, result);
    }
    Ok(result)
}
