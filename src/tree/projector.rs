// src/tree/projector.rs
//! Flattening the tree into the rows a renderer shows.

use super::node::{NodePath, TreeNode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Leaf { selected: bool },
    Container { expanded: bool, empty: bool },
}

/// One visible line of the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleRow {
    pub path: NodePath,
    pub name: String,
    pub depth: usize,
    pub kind: RowKind,
}

impl VisibleRow {
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, RowKind::Leaf { .. })
    }
}

/// Rows in pre-order, descending only into expanded containers.
///
/// The root itself is the first row. Only leaves can carry the selection mark.
pub fn project(root: Option<&TreeNode>, selected: Option<&NodePath>) -> Vec<VisibleRow> {
    let mut rows = Vec::new();
    if let Some(root) = root {
        push_rows(root, NodePath::root(), selected, &mut rows);
    }
    rows
}

fn push_rows(
    node: &TreeNode,
    path: NodePath,
    selected: Option<&NodePath>,
    rows: &mut Vec<VisibleRow>,
) {
    let kind = match node {
        TreeNode::Leaf(_) => RowKind::Leaf {
            selected: selected == Some(&path),
        },
        TreeNode::Container(dir) => RowKind::Container {
            expanded: dir.is_expanded(),
            empty: dir.children().is_empty(),
        },
    };
    let open = matches!(kind, RowKind::Container { expanded: true, .. });

    rows.push(VisibleRow {
        depth: path.depth(),
        name: node.name().to_string(),
        path: path.clone(),
        kind,
    });

    if open {
        for (index, child) in node.children().iter().enumerate() {
            push_rows(child, path.child(index), selected, rows);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MemoryHandle;

    fn leaf(name: &str) -> TreeNode {
        TreeNode::leaf(MemoryHandle::file(name, "").into_handle())
    }

    fn dir(name: &str, children: Vec<TreeNode>, expanded: bool) -> TreeNode {
        TreeNode::container(MemoryHandle::dir(name, vec![]).into_handle(), children, expanded)
    }

    #[test]
    fn collapsed_children_are_hidden() {
        let root = dir(
            "root",
            vec![dir("closed", vec![leaf("hidden.rs")], false), leaf("shown.rs")],
            true,
        );

        let rows = project(Some(&root), None);
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["root", "closed", "shown.rs"]);
        assert_eq!(rows[2].depth, 1);
        assert_eq!(rows[2].path, NodePath::from(vec![1]));
    }

    #[test]
    fn expanded_nested_children_follow_their_parent() {
        let root = dir(
            "root",
            vec![dir("open", vec![leaf("inner.rs")], true), leaf("after.rs")],
            true,
        );

        let rows = project(Some(&root), None);
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["root", "open", "inner.rs", "after.rs"]);
        assert_eq!(rows[2].depth, 2);
    }

    #[test]
    fn only_the_selected_leaf_is_marked() {
        let root = dir("root", vec![leaf("a"), dir("d", vec![], true)], true);
        let selected = NodePath::from(vec![0]);

        let rows = project(Some(&root), Some(&selected));
        assert_eq!(rows[1].kind, RowKind::Leaf { selected: true });
        assert_eq!(
            rows[2].kind,
            RowKind::Container {
                expanded: true,
                empty: true
            }
        );
        assert_eq!(
            rows[0].kind,
            RowKind::Container {
                expanded: true,
                empty: false
            }
        );
    }

    #[test]
    fn no_tree_no_rows() {
        assert!(project(None, None).is_empty());
    }
}
