// src/tree/builder.rs
//! Recursive construction of a [`TreeNode`] graph from a root handle.

use std::sync::Arc;

use futures::future::{try_join_all, BoxFuture, FutureExt};

use super::node::TreeNode;
use crate::{
    error::TraversalError,
    fs::{Handle, HandleKind},
};

/// Nesting limit applied when none is configured.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Walks a handle graph into a [`TreeNode`] graph.
///
/// Sibling subtrees are built concurrently and collected by index, so
/// `children[i]` is always the i-th enumerated entry. Any failure anywhere
/// fails the whole build.
#[derive(Debug, Clone, Copy)]
pub struct TreeBuilder {
    max_depth: usize,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

impl TreeBuilder {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Build the subtree under `handle`. Only a root container starts expanded.
    pub async fn build(
        &self,
        handle: Arc<dyn Handle>,
        is_root: bool,
    ) -> Result<TreeNode, TraversalError> {
        let location = handle.name().to_string();
        let result = self.build_at(handle, is_root, 0, location).await;
        if let Err(err) = &result {
            tracing::warn!(location = err.location(), error = %err, "tree build failed");
        }
        result
    }

    fn build_at(
        &self,
        handle: Arc<dyn Handle>,
        is_root: bool,
        depth: usize,
        location: String,
    ) -> BoxFuture<'_, Result<TreeNode, TraversalError>> {
        async move {
            match handle.kind() {
                HandleKind::Leaf => Ok(TreeNode::leaf(handle)),
                HandleKind::Unknown => Err(TraversalError::Malformed { location }),
                HandleKind::Container => {
                    if depth > self.max_depth {
                        return Err(TraversalError::TooDeep {
                            location,
                            limit: self.max_depth,
                        });
                    }

                    let entries = handle.enumerate().await.map_err(|source| {
                        TraversalError::Enumerate {
                            location: location.clone(),
                            source,
                        }
                    })?;
                    tracing::debug!(%location, entries = entries.len(), "enumerated container");

                    let children = try_join_all(entries.into_iter().map(|child| {
                        let child_location = format!("{}/{}", location, child.name());
                        self.build_at(child, false, depth + 1, child_location)
                    }))
                    .await?;

                    Ok(TreeNode::container(handle, children, is_root))
                }
            }
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::{fs::MemoryHandle, tree::NodePath};

    fn names(node: &TreeNode) -> Vec<&str> {
        node.children().iter().map(TreeNode::name).collect()
    }

    #[tokio::test]
    async fn flat_directory_keeps_enumeration_order() {
        let root = MemoryHandle::dir(
            "root",
            vec![
                MemoryHandle::file("zeta.rs", ""),
                MemoryHandle::file("alpha.rs", ""),
                MemoryHandle::file("mid.rs", ""),
            ],
        );

        let tree = TreeBuilder::default().build(root.into_handle(), true).await.unwrap();
        assert_eq!(tree.children().len(), 3);
        assert_eq!(names(&tree), vec!["zeta.rs", "alpha.rs", "mid.rs"]);
    }

    #[tokio::test]
    async fn slow_first_child_still_lands_first() {
        let root = MemoryHandle::dir(
            "root",
            vec![
                MemoryHandle::dir("slow", vec![MemoryHandle::file("s.txt", "")])
                    .with_latency(Duration::from_millis(40)),
                MemoryHandle::dir("fast", vec![MemoryHandle::file("f.txt", "")]),
            ],
        );

        let tree = TreeBuilder::default().build(root.into_handle(), true).await.unwrap();
        assert_eq!(names(&tree), vec!["slow", "fast"]);
        assert_eq!(tree.get(&NodePath::from(vec![0, 0])).unwrap().name(), "s.txt");
    }

    #[tokio::test]
    async fn only_the_root_starts_expanded() {
        let root = MemoryHandle::dir(
            "root",
            vec![MemoryHandle::dir("a", vec![MemoryHandle::dir("b", vec![])])],
        );

        let tree = TreeBuilder::default().build(root.into_handle(), true).await.unwrap();
        assert!(tree.as_container().unwrap().is_expanded());
        let a = tree.get(&NodePath::from(vec![0])).unwrap();
        let b = tree.get(&NodePath::from(vec![0, 0])).unwrap();
        assert!(!a.as_container().unwrap().is_expanded());
        assert!(!b.as_container().unwrap().is_expanded());
    }

    #[tokio::test]
    async fn non_root_build_is_collapsed() {
        let dir = MemoryHandle::dir("dir", vec![]);
        let tree = TreeBuilder::default().build(dir.into_handle(), false).await.unwrap();
        assert!(!tree.as_container().unwrap().is_expanded());
        assert!(tree.children().is_empty());
    }

    #[tokio::test]
    async fn leaf_handle_builds_a_leaf() {
        let file = MemoryHandle::file("solo.txt", "hi");
        let tree = TreeBuilder::default().build(file.into_handle(), true).await.unwrap();
        assert!(tree.is_leaf());
        assert_eq!(tree.name(), "solo.txt");
    }

    #[tokio::test]
    async fn nested_enumeration_failure_fails_the_build() {
        let root = MemoryHandle::dir(
            "root",
            vec![
                MemoryHandle::file("ok.txt", ""),
                MemoryHandle::dir("outer", vec![MemoryHandle::dir("locked", vec![]).failing()]),
            ],
        );

        let err = TreeBuilder::default().build(root.into_handle(), true).await.unwrap_err();
        assert!(matches!(err, TraversalError::Enumerate { .. }));
        assert_eq!(err.location(), "root/outer/locked");
    }

    #[tokio::test]
    async fn unknown_kind_is_malformed() {
        let root = MemoryHandle::dir("root", vec![MemoryHandle::unknown("fifo")]);
        let err = TreeBuilder::default().build(root.into_handle(), true).await.unwrap_err();
        assert!(matches!(err, TraversalError::Malformed { ref location } if location == "root/fifo"));
    }

    #[tokio::test]
    async fn depth_limit_stops_runaway_nesting() {
        let nested = || {
            MemoryHandle::dir(
                "root",
                vec![MemoryHandle::dir("a", vec![MemoryHandle::dir("b", vec![])])],
            )
            .into_handle()
        };

        // `b` sits at depth 2: deeper than 1, but not deeper than 2.
        let err = TreeBuilder::new(1).build(nested(), true).await.unwrap_err();
        assert!(matches!(err, TraversalError::TooDeep { limit: 1, .. }));
        assert_eq!(err.location(), "root/a/b");

        assert!(TreeBuilder::new(2).build(nested(), true).await.is_ok());
    }
}
