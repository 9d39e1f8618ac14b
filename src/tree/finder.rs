// src/tree/finder.rs
//! Locating the first readable file of a tree.

use super::node::{NodePath, TreeNode};

/// First leaf in depth-first pre-order, children in stored order.
///
/// Returns the node itself when it is a leaf, and `None` when no leaf exists
/// at any depth.
pub fn find_first(node: &TreeNode) -> Option<NodePath> {
    find_from(node, NodePath::root())
}

fn find_from(node: &TreeNode, path: NodePath) -> Option<NodePath> {
    if node.is_leaf() {
        return Some(path);
    }
    node.children()
        .iter()
        .enumerate()
        .find_map(|(index, child)| find_from(child, path.child(index)))
}
