//! Option list service
//!
//! Picks the reconstruction path from the configured order and formats labels.

use termtree::Tree;
use tracing::{debug, instrument};

use crate::application::ApplicationResult;
use crate::config::Settings;
use crate::domain::{
    custom_order_levels, natural_order_levels, Leveled, NestedSetStore, Node, OptionEntry,
    RootSource,
};

/// Service producing select options and tree views from a nested-set store.
#[derive(Debug)]
pub struct OptionsService<S> {
    store: S,
    settings: Settings,
}

impl<S: NestedSetStore> OptionsService<S> {
    pub fn new(store: S, settings: Settings) -> Self {
        Self { store, settings }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// `(node, level)` pairs in configured order.
    ///
    /// Natural order hides excluded nodes one by one; any other order prunes
    /// the excluded subtrees.
    #[instrument(level = "debug", skip(self, source, excluded))]
    pub fn leveled(
        &self,
        source: impl Into<RootSource>,
        excluded: Option<&Node>,
    ) -> ApplicationResult<Vec<Leveled>> {
        let order = self.settings.order;
        debug!("leveled: order={} excluded={:?}", order, excluded.map(|n| n.id));
        let leveled = if order.is_natural() {
            natural_order_levels(&self.store, source, excluded)?
        } else {
            custom_order_levels(
                &self.store,
                source,
                order.comparator(),
                excluded,
                self.settings.start_level,
            )?
        };
        Ok(leveled)
    }

    /// Labelled options in configured order.
    pub fn options(
        &self,
        source: impl Into<RootSource>,
        excluded: Option<&Node>,
    ) -> ApplicationResult<Vec<OptionEntry>> {
        Ok(self
            .leveled(source, excluded)?
            .into_iter()
            .map(|(node, level)| OptionEntry::new(self.settings.label(&node, level), node.id))
            .collect())
    }

    /// The same selection as a forest for terminal display.
    pub fn tree(
        &self,
        source: impl Into<RootSource>,
        excluded: Option<&Node>,
    ) -> ApplicationResult<Vec<Tree<String>>> {
        let leveled = self.leveled(source, excluded)?;
        Ok(render_forest(
            leveled.into_iter().map(|(node, level)| (node.to_string(), level)),
        ))
    }
}

/// Rebuild a forest from labels in pre-order with their levels.
///
/// Each entry is attached under the nearest preceding entry with a smaller
/// level; entries without one become roots.
pub fn render_forest<I>(entries: I) -> Vec<Tree<String>>
where
    I: IntoIterator<Item = (String, usize)>,
{
    fn close(stack: &mut Vec<(usize, Tree<String>)>, forest: &mut Vec<Tree<String>>) {
        if let Some((_, done)) = stack.pop() {
            match stack.last_mut() {
                Some((_, parent)) => {
                    parent.push(done);
                }
                None => forest.push(done),
            }
        }
    }

    let mut forest = Vec::new();
    let mut stack: Vec<(usize, Tree<String>)> = Vec::new();
    for (label, level) in entries {
        while stack.last().is_some_and(|(open, _)| *open >= level) {
            close(&mut stack, &mut forest);
        }
        stack.push((level, Tree::new(label)));
    }
    while !stack.is_empty() {
        close(&mut stack, &mut forest);
    }
    forest
}
