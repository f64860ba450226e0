//! Tree file loading
//!
//! A tree file is TOML with one `[[nodes]]` table per node:
//!
//! ```toml
//! [[nodes]]
//! id = 1
//! lft = 1
//! rgt = 4
//! name = "Top Level"
//!
//! [[nodes]]
//! id = 2
//! parent_id = 1
//! lft = 2
//! rgt = 3
//! name = "Child"
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, instrument};

use crate::domain::Node;
use crate::infrastructure::error::{InfraError, InfraResult};
use crate::infrastructure::memory::InMemoryStore;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct TreeFile {
    nodes: Vec<Node>,
}

/// Parse tree file content into a validated store.
pub fn parse_store(content: &str, path: &Path) -> InfraResult<InMemoryStore> {
    let file: TreeFile = toml::from_str(content).map_err(|e| InfraError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(InMemoryStore::new(file.nodes)?)
}

/// Read and parse a tree file.
#[instrument(level = "debug")]
pub fn load_store(path: &Path) -> InfraResult<InMemoryStore> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| InfraError::io(format!("read tree file {}", path.display()), e))?;
    let store = parse_store(&content, path)?;
    debug!("load_store: {} nodes from {}", store.len(), path.display());
    Ok(store)
}
