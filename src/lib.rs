// src/lib.rs
//! Treepeek - A terminal directory tree viewer with file previews.
//!
//! This library provides the tree model, the filesystem handles and the
//! terminal UI used by the `treepeek` binary.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod highlight;
pub mod logging;
pub mod tree;
pub mod ui;
