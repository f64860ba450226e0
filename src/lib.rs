//! Present nested-set trees as depth-annotated option lists.
//!
//! A nested-set tree is stored flat: every node carries `lft`/`rgt` bounds and
//! its descendants are the nodes whose bounds fall strictly inside its own.
//! This crate turns such a flat collection back into `(label, id)` entries in
//! display order, either following the stored order
//! ([`domain::natural_order_options`]) or re-sorting every sibling group
//! ([`domain::custom_order_options`]), while leaving out nodes that are not
//! valid move targets for a given node.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
