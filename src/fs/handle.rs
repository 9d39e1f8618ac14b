// src/fs/handle.rs
//! The capability a tree is built from.

use std::{fmt, sync::Arc};

use async_trait::async_trait;

use crate::error::HandleError;

/// What an entry claims to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleKind {
    /// A file.
    Leaf,
    /// A directory.
    Container,
    /// Anything else (sockets, devices, dangling links).
    Unknown,
}

/// One filesystem entry, file or directory.
///
/// `kind` and `name` are synchronous; listing children and reading text are
/// the only suspension points.
#[async_trait]
pub trait Handle: Send + Sync + fmt::Debug {
    fn kind(&self) -> HandleKind;

    fn name(&self) -> &str;

    /// Immediate children in the order the backing store yields them.
    async fn enumerate(&self) -> Result<Vec<Arc<dyn Handle>>, HandleError>;

    /// Whole content of a leaf as text.
    async fn read_text(&self) -> Result<String, HandleError>;
}
