//! Sibling comparators

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::Node;

/// Named sibling orders.
///
/// `Natural` keeps the stored nested-set order and selects the fast path;
/// all others rebuild the tree with a comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    Natural,
    Name,
    Id,
    IdDesc,
}

impl SortOrder {
    pub fn is_natural(self) -> bool {
        self == SortOrder::Natural
    }

    pub fn comparator(self) -> fn(&Node, &Node) -> Ordering {
        match self {
            SortOrder::Natural => by_lft,
            SortOrder::Name => by_name,
            SortOrder::Id => by_id,
            SortOrder::IdDesc => by_id_desc,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortOrder::Natural => "natural",
            SortOrder::Name => "name",
            SortOrder::Id => "id",
            SortOrder::IdDesc => "id-desc",
        };
        write!(f, "{}", s)
    }
}

/// Comparator ordering nodes by an extracted key.
///
/// # Example
/// ```ignore
/// let compare = by_key(|n: &Node| n.name.to_lowercase());
/// ```
pub fn by_key<K, F>(key: F) -> impl Fn(&Node, &Node) -> Ordering
where
    K: Ord,
    F: Fn(&Node) -> K,
{
    move |a, b| key(a).cmp(&key(b))
}

pub fn by_lft(a: &Node, b: &Node) -> Ordering {
    a.lft.cmp(&b.lft)
}

/// Case-insensitive, ties broken by id.
pub fn by_name(a: &Node, b: &Node) -> Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.id.cmp(&b.id))
}

pub fn by_id(a: &Node, b: &Node) -> Ordering {
    a.id.cmp(&b.id)
}

pub fn by_id_desc(a: &Node, b: &Node) -> Ordering {
    b.id.cmp(&a.id)
}
