//! Exclusion of impossible move targets

use crate::domain::{NestedSetStore, Node};

/// Decides whether a node may appear in the output.
///
/// With no reference, or a reference that was never persisted, everything is
/// admissible. Otherwise a node is admissible iff the reference could be moved
/// beneath it.
pub fn admissibility<'a, S>(store: &'a S, excluded: Option<&'a Node>) -> impl Fn(&Node) -> bool + 'a
where
    S: NestedSetStore + ?Sized,
{
    let reference = excluded.filter(|r| !store.is_new_entity(r));
    move |node: &Node| match reference {
        Some(r) => store.move_possible(node, r),
        None => true,
    }
}
