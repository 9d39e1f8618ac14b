// src/tree/node.rs
//! The in-memory tree mirrored from a picked directory.

use std::{fmt, sync::Arc};

use crate::fs::Handle;

/// Position of a node as child indices from the root. The root is the empty path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    /// `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        let (_, rest) = self.0.split_last()?;
        Some(Self(rest.to_vec()))
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<usize>> for NodePath {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/")?;
        let parts: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "{}", parts.join("/"))
    }
}

/// A file.
#[derive(Debug, Clone)]
pub struct LeafNode {
    name: String,
    handle: Arc<dyn Handle>,
}

impl LeafNode {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Source handle, used to fetch content.
    pub fn handle(&self) -> &Arc<dyn Handle> {
        &self.handle
    }
}

/// A directory and its fully built children.
#[derive(Debug, Clone)]
pub struct ContainerNode {
    name: String,
    handle: Arc<dyn Handle>,
    children: Vec<TreeNode>,
    pub(crate) is_expanded: bool,
}

impl ContainerNode {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn handle(&self) -> &Arc<dyn Handle> {
        &self.handle
    }

    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    pub fn is_expanded(&self) -> bool {
        self.is_expanded
    }
}

#[derive(Debug, Clone)]
pub enum TreeNode {
    Leaf(LeafNode),
    Container(ContainerNode),
}

impl TreeNode {
    pub fn leaf(handle: Arc<dyn Handle>) -> Self {
        Self::Leaf(LeafNode {
            name: handle.name().to_string(),
            handle,
        })
    }

    pub fn container(handle: Arc<dyn Handle>, children: Vec<TreeNode>, is_expanded: bool) -> Self {
        Self::Container(ContainerNode {
            name: handle.name().to_string(),
            handle,
            children,
            is_expanded,
        })
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Leaf(leaf) => leaf.name(),
            Self::Container(dir) => dir.name(),
        }
    }

    pub fn handle(&self) -> &Arc<dyn Handle> {
        match self {
            Self::Leaf(leaf) => leaf.handle(),
            Self::Container(dir) => dir.handle(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Children of a container; empty for a leaf.
    pub fn children(&self) -> &[TreeNode] {
        match self {
            Self::Leaf(_) => &[],
            Self::Container(dir) => dir.children(),
        }
    }

    pub fn as_leaf(&self) -> Option<&LeafNode> {
        match self {
            Self::Leaf(leaf) => Some(leaf),
            Self::Container(_) => None,
        }
    }

    pub fn as_container(&self) -> Option<&ContainerNode> {
        match self {
            Self::Container(dir) => Some(dir),
            Self::Leaf(_) => None,
        }
    }

    /// Resolve `path` relative to this node.
    pub fn get(&self, path: &NodePath) -> Option<&TreeNode> {
        path.indices()
            .iter()
            .try_fold(self, |node, &index| node.children().get(index))
    }

    pub(crate) fn get_mut(&mut self, path: &NodePath) -> Option<&mut TreeNode> {
        let mut node = self;
        for &index in path.indices() {
            node = match node {
                Self::Container(dir) => dir.children.get_mut(index)?,
                Self::Leaf(_) => return None,
            };
        }
        Some(node)
    }

    /// Number of leaves at any depth.
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Container(dir) => dir.children.iter().map(TreeNode::leaf_count).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MemoryHandle;

    fn sample() -> TreeNode {
        let a = TreeNode::leaf(MemoryHandle::file("a.txt", "").into_handle());
        let b = TreeNode::leaf(MemoryHandle::file("b.txt", "").into_handle());
        let sub = TreeNode::container(MemoryHandle::dir("sub", vec![]).into_handle(), vec![b], false);
        TreeNode::container(MemoryHandle::dir("root", vec![]).into_handle(), vec![a, sub], true)
    }

    #[test]
    fn node_path_navigation() {
        let path = NodePath::root().child(1).child(0);
        assert_eq!(path.indices(), &[1, 0]);
        assert_eq!(path.depth(), 2);
        assert_eq!(path.parent(), Some(NodePath::from(vec![1])));
        assert_eq!(NodePath::root().parent(), None);
        assert_eq!(path.to_string(), "/1/0");
    }

    #[test]
    fn get_resolves_nested_paths() {
        let root = sample();
        assert_eq!(root.get(&NodePath::root()).unwrap().name(), "root");
        assert_eq!(root.get(&NodePath::from(vec![1, 0])).unwrap().name(), "b.txt");
        assert!(root.get(&NodePath::from(vec![0, 0])).is_none());
        assert!(root.get(&NodePath::from(vec![5])).is_none());
    }

    #[test]
    fn leaf_count_includes_nested_files() {
        assert_eq!(sample().leaf_count(), 2);
    }
}
