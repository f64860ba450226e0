//! Test support: logging setup and fixture trees

use std::env;
use std::sync::Once;

use tracing::{debug, info};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::domain::{Node, NodeId};
use crate::infrastructure::InMemoryStore;

static TEST_SETUP: Once = Once::new();

pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        if env::var("RUST_LOG").is_err() {
            env::set_var("RUST_LOG", "debug");
        }
        setup_test_logging();
        info!("Test Setup complete");
    });
}

fn setup_test_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_test_writer()
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(env_filter),
    );

    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

/// The six category nodes:
///
/// ```text
/// Top Level (1)          [1, 10]
/// ├── Child 1 (2)        [2, 3]
/// ├── Child 2 (3)        [4, 7]
/// │   └── Child 2.1 (4)  [5, 6]
/// └── Child 3 (5)        [8, 9]
/// Top Level 2 (6)        [11, 12]
/// ```
pub fn category_nodes() -> Vec<Node> {
    vec![
        Node::new(1, None, 1, 10, "Top Level"),
        Node::new(2, Some(1), 2, 3, "Child 1"),
        Node::new(3, Some(1), 4, 7, "Child 2"),
        Node::new(4, Some(3), 5, 6, "Child 2.1"),
        Node::new(5, Some(1), 8, 9, "Child 3"),
        Node::new(6, None, 11, 12, "Top Level 2"),
    ]
}

pub fn categories() -> InMemoryStore {
    InMemoryStore::new(category_nodes()).expect("valid category fixture")
}

/// Same node as stored in the category fixture.
pub fn category(id: u64) -> Node {
    categories()
        .node(NodeId(id))
        .cloned()
        .expect("category fixture id")
}
