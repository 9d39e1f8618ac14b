// src/ui/widgets/mod.rs
//! Custom widgets for the treepeek UI.

pub mod file_tree;
pub mod preview;
pub mod status_bar;

// Re-export widget rendering functions
pub use file_tree::render_file_tree;
pub use preview::render_preview;
pub use status_bar::{render_status_bar, Status};
