// src/tree/store.rs
//! Owner of the current tree and selection.
//!
//! Every mutation goes through [`TreeStore`] and queues a [`StoreEvent`].
//! Whoever drives the store drains those events after each mutation and
//! reacts to them (auto-selection, content fetches, redraws).

use std::collections::VecDeque;

use super::node::{LeafNode, NodePath, TreeNode};

/// Identifies one directory pick. Only the latest pick's build may be installed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Notification queued by a store mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// A new tree was installed. Queued exactly once per install.
    RootChanged,
    ExpansionChanged(NodePath),
    /// Selection was set or cleared. Content fetched for an older epoch is stale.
    SelectionChanged { path: Option<NodePath>, epoch: u64 },
}

#[derive(Debug, Default)]
pub struct TreeStore {
    root: Option<TreeNode>,
    selected: Option<NodePath>,
    generation: Generation,
    selection_epoch: u64,
    events: VecDeque<StoreEvent>,
}

impl TreeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> Option<&TreeNode> {
        self.root.as_ref()
    }

    pub fn selected_path(&self) -> Option<&NodePath> {
        self.selected.as_ref()
    }

    pub fn selected_leaf(&self) -> Option<&LeafNode> {
        let path = self.selected.as_ref()?;
        self.root.as_ref()?.get(path)?.as_leaf()
    }

    pub fn node(&self, path: &NodePath) -> Option<&TreeNode> {
        self.root.as_ref()?.get(path)
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn selection_epoch(&self) -> u64 {
        self.selection_epoch
    }

    /// Start a new pick. Results of every earlier generation become stale.
    pub fn begin_build(&mut self) -> Generation {
        self.generation = Generation(self.generation.0 + 1);
        self.generation
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        self.generation == generation
    }

    /// Install a finished build if it belongs to the current generation.
    ///
    /// Returns `false` and drops `root` when a newer pick has started since.
    pub fn install(&mut self, generation: Generation, root: TreeNode) -> bool {
        if !self.is_current(generation) {
            tracing::debug!(
                stale = generation.value(),
                current = self.generation.value(),
                "discarding superseded build"
            );
            return false;
        }
        self.set_root(root);
        true
    }

    /// Replace the whole tree and clear the selection.
    pub fn set_root(&mut self, root: TreeNode) {
        tracing::info!(root = root.name(), files = root.leaf_count(), "tree installed");
        self.root = Some(root);
        self.selected = None;
        self.selection_epoch += 1;
        self.events.push_back(StoreEvent::RootChanged);
    }

    /// Flip a container open or closed. Leaves and unknown paths are ignored.
    pub fn toggle(&mut self, path: &NodePath) -> bool {
        let Some(TreeNode::Container(dir)) = self.root.as_mut().and_then(|r| r.get_mut(path)) else {
            return false;
        };
        dir.is_expanded = !dir.is_expanded;
        self.events.push_back(StoreEvent::ExpansionChanged(path.clone()));
        true
    }

    /// Select a leaf. Re-selecting the current leaf fires the event again.
    ///
    /// Containers and unknown paths are refused without touching the selection.
    pub fn select(&mut self, path: &NodePath) -> bool {
        if !self.node(path).is_some_and(TreeNode::is_leaf) {
            tracing::debug!(%path, "refusing to select a non-file node");
            return false;
        }
        self.selected = Some(path.clone());
        self.bump_selection();
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.bump_selection();
    }

    fn bump_selection(&mut self) {
        self.selection_epoch += 1;
        self.events.push_back(StoreEvent::SelectionChanged {
            path: self.selected.clone(),
            epoch: self.selection_epoch,
        });
    }

    pub fn drain_events(&mut self) -> Vec<StoreEvent> {
        self.events.drain(..).collect()
    }
}
