// src/tree/mod.rs
//! Tree module - building, storing, searching and projecting the directory tree.

pub mod builder;
pub mod finder;
pub mod node;
pub mod projector;
pub mod store;

pub use builder::{TreeBuilder, DEFAULT_MAX_DEPTH};
pub use finder::find_first;
pub use node::{ContainerNode, LeafNode, NodePath, TreeNode};
pub use projector::{project, RowKind, VisibleRow};
pub use store::{Generation, StoreEvent, TreeStore};
