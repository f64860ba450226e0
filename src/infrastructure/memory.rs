//! In-memory nested-set store

use std::collections::HashMap;

use tracing::{debug, instrument};

use crate::domain::{DomainError, DomainResult, NestedSetStore, Node, NodeId};

/// Nested-set tree held in memory, validated on construction.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    /// Nodes ordered by (scope, lft)
    nodes: Vec<Node>,
    /// Position of each id in `nodes`
    index: HashMap<NodeId, usize>,
}

impl InMemoryStore {
    /// Build a store, rejecting duplicate ids, inverted bounds and dangling parents.
    #[instrument(level = "debug", skip(nodes), fields(nodes = nodes.len()))]
    pub fn new(mut nodes: Vec<Node>) -> DomainResult<Self> {
        nodes.sort_by(|a, b| a.scope.cmp(&b.scope).then(a.lft.cmp(&b.lft)));

        let mut index = HashMap::with_capacity(nodes.len());
        for (pos, node) in nodes.iter().enumerate() {
            if node.lft >= node.rgt {
                return Err(DomainError::InvalidBounds {
                    id: node.id,
                    lft: node.lft,
                    rgt: node.rgt,
                });
            }
            if index.insert(node.id, pos).is_some() {
                return Err(DomainError::DuplicateId(node.id));
            }
        }
        for node in &nodes {
            if let Some(parent_id) = node.parent_id {
                if !index.contains_key(&parent_id) {
                    return Err(DomainError::UnknownParent {
                        id: node.id,
                        parent_id,
                    });
                }
            }
        }

        debug!("InMemoryStore::new: {} nodes", nodes.len());
        Ok(Self { nodes, index })
    }

    pub fn node(&self, id: NodeId) -> DomainResult<&Node> {
        self.index
            .get(&id)
            .map(|&pos| &self.nodes[pos])
            .ok_or(DomainError::NodeNotFound(id))
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl NestedSetStore for InMemoryStore {
    fn roots(&self) -> DomainResult<Vec<Node>> {
        Ok(self.nodes.iter().filter(|n| n.is_root()).cloned().collect())
    }

    fn self_and_descendants(&self, node: &Node) -> DomainResult<Vec<Node>> {
        let stored = self.node(node.id)?;
        Ok(self
            .nodes
            .iter()
            .filter(|n| stored.is_or_is_ancestor_of(n))
            .cloned()
            .collect())
    }

    fn is_new_entity(&self, node: &Node) -> bool {
        !self.index.contains_key(&node.id)
    }
}
