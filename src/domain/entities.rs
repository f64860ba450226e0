//! Domain entities: core data structures

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a node in a nested-set tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A node of a nested-set tree.
///
/// Descendants of a node are exactly the nodes of the same scope whose bounds
/// fall strictly between `lft` and `rgt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier
    pub id: NodeId,
    /// Parent identifier, None for root nodes
    #[serde(default)]
    pub parent_id: Option<NodeId>,
    /// Left bound
    pub lft: i64,
    /// Right bound
    pub rgt: i64,
    /// Display name
    pub name: String,
    /// Scope partition; nodes of different scopes belong to different trees
    #[serde(default)]
    pub scope: Option<String>,
}

impl Node {
    pub fn new(id: u64, parent_id: Option<u64>, lft: i64, rgt: i64, name: &str) -> Self {
        Self {
            id: NodeId(id),
            parent_id: parent_id.map(NodeId),
            lft,
            rgt,
            name: name.to_string(),
            scope: None,
        }
    }

    pub fn with_scope(mut self, scope: &str) -> Self {
        self.scope = Some(scope.to_string());
        self
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn parent_id(&self) -> Option<NodeId> {
        self.parent_id
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// A node without children under the standard nested-set numbering.
    pub fn is_leaf(&self) -> bool {
        self.rgt == self.lft + 1
    }

    pub fn same_scope(&self, other: &Node) -> bool {
        self.scope == other.scope
    }

    /// True if `other` is this node or lies inside its bounds.
    pub fn is_or_is_ancestor_of(&self, other: &Node) -> bool {
        self.same_scope(other) && self.lft <= other.lft && other.rgt <= self.rgt
    }

    pub fn is_ancestor_of(&self, other: &Node) -> bool {
        self.same_scope(other) && self.lft < other.lft && other.rgt < self.rgt
    }

    /// True if `bound` falls inside this node's closed interval.
    pub(crate) fn spans(&self, bound: i64) -> bool {
        self.lft <= bound && bound <= self.rgt
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.id)
    }
}

/// One selectable entry: display label plus the identifier it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionEntry {
    pub label: String,
    pub id: NodeId,
}

impl OptionEntry {
    pub fn new(label: impl Into<String>, id: NodeId) -> Self {
        Self {
            label: label.into(),
            id,
        }
    }
}

impl From<(&str, u64)> for OptionEntry {
    fn from((label, id): (&str, u64)) -> Self {
        Self::new(label, NodeId(id))
    }
}

/// Where the traversal starts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RootSource {
    /// Every root the store knows about, in store order.
    #[default]
    AllRoots,
    /// The given nodes, in the given order.
    Explicit(Vec<Node>),
}

impl From<Node> for RootSource {
    fn from(node: Node) -> Self {
        Self::Explicit(vec![node])
    }
}

impl From<Vec<Node>> for RootSource {
    fn from(nodes: Vec<Node>) -> Self {
        Self::Explicit(nodes)
    }
}

/// A node paired with its depth in the reconstructed tree.
pub type Leveled = (Node, usize);
