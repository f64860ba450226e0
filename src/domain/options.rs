//! Select options from a nested-set tree
//!
//! Both entry points produce `(label, id)` entries in display order and call
//! `label` exactly once per emitted node.

use std::cmp::Ordering;

use tracing::debug;

use crate::domain::admissibility::admissibility;
use crate::domain::{custom, natural};
use crate::domain::{DomainResult, Leveled, NestedSetStore, Node, OptionEntry, RootSource};

/// Normalize a root source into an ordered list of roots.
pub fn resolve_roots<S>(store: &S, source: RootSource) -> DomainResult<Vec<Node>>
where
    S: NestedSetStore + ?Sized,
{
    match source {
        RootSource::AllRoots => store.roots(),
        RootSource::Explicit(nodes) => Ok(nodes),
    }
}

/// `(node, level)` pairs in stored nested-set order.
///
/// `excluded` hides every node it could not be moved beneath, without pruning
/// their descendants.
pub fn natural_order_levels<S>(
    store: &S,
    source: impl Into<RootSource>,
    excluded: Option<&Node>,
) -> DomainResult<Vec<Leveled>>
where
    S: NestedSetStore + ?Sized,
{
    let roots = resolve_roots(store, source.into())?;
    natural::flatten(store, &roots, admissibility(store, excluded))
}

/// `(node, level)` pairs with every sibling group ordered by `compare`.
///
/// An inadmissible node removes its whole subtree.
pub fn custom_order_levels<S, C>(
    store: &S,
    source: impl Into<RootSource>,
    compare: C,
    excluded: Option<&Node>,
    start_level: usize,
) -> DomainResult<Vec<Leveled>>
where
    S: NestedSetStore + ?Sized,
    C: Fn(&Node, &Node) -> Ordering,
{
    let roots = resolve_roots(store, source.into())?;
    custom::build(store, &roots, compare, admissibility(store, excluded), start_level)
}

/// Options in stored nested-set order.
///
/// # Example
/// ```ignore
/// let options = natural_order_options(&store, RootSource::AllRoots, None, |n, level| {
///     format!("{} {}", "-".repeat(level), n.name)
/// })?;
/// ```
pub fn natural_order_options<S, L>(
    store: &S,
    source: impl Into<RootSource>,
    excluded: Option<&Node>,
    label: L,
) -> DomainResult<Vec<OptionEntry>>
where
    S: NestedSetStore + ?Sized,
    L: FnMut(&Node, usize) -> String,
{
    let leveled = natural_order_levels(store, source, excluded)?;
    debug!("natural_order_options: {} entries", leveled.len());
    Ok(to_entries(leveled, label))
}

/// Options with every sibling group, roots included, ordered by `compare`.
pub fn custom_order_options<S, C, L>(
    store: &S,
    source: impl Into<RootSource>,
    compare: C,
    excluded: Option<&Node>,
    start_level: usize,
    label: L,
) -> DomainResult<Vec<OptionEntry>>
where
    S: NestedSetStore + ?Sized,
    C: Fn(&Node, &Node) -> Ordering,
    L: FnMut(&Node, usize) -> String,
{
    let leveled = custom_order_levels(store, source, compare, excluded, start_level)?;
    debug!("custom_order_options: {} entries", leveled.len());
    Ok(to_entries(leveled, label))
}

fn to_entries<L>(leveled: Vec<Leveled>, mut label: L) -> Vec<OptionEntry>
where
    L: FnMut(&Node, usize) -> String,
{
    leveled
        .into_iter()
        .map(|(node, level)| OptionEntry::new(label(&node, level), node.id))
        .collect()
}
