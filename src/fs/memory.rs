// src/fs/memory.rs
//! In-memory handles for tests and embedders.
//!
//! ```
//! use treepeek::fs::MemoryHandle;
//!
//! let root = MemoryHandle::dir("project", vec![
//!     MemoryHandle::file("README.md", "# hi"),
//!     MemoryHandle::dir("src", vec![MemoryHandle::file("lib.rs", "")]),
//! ]);
//! ```

use std::{io, sync::Arc, time::Duration};

use async_trait::async_trait;

use super::handle::{Handle, HandleKind};
use crate::error::HandleError;

#[derive(Debug, Clone)]
enum Entry {
    File(String),
    Dir(Vec<Arc<MemoryHandle>>),
    Unknown,
}

/// A handle whose whole subtree lives in memory.
#[derive(Debug, Clone)]
pub struct MemoryHandle {
    name: String,
    entry: Entry,
    latency: Option<Duration>,
    failing: bool,
}

impl MemoryHandle {
    pub fn file(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self::with_entry(name, Entry::File(content.into()))
    }

    pub fn dir(name: impl Into<String>, children: Vec<MemoryHandle>) -> Self {
        Self::with_entry(name, Entry::Dir(children.into_iter().map(Arc::new).collect()))
    }

    /// An entry that is neither file nor directory.
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::with_entry(name, Entry::Unknown)
    }

    fn with_entry(name: impl Into<String>, entry: Entry) -> Self {
        Self {
            name: name.into(),
            entry,
            latency: None,
            failing: false,
        }
    }

    /// Make `enumerate` and `read_text` fail as if access was revoked.
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    /// Delay `enumerate` and `read_text` by `latency`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn into_handle(self) -> Arc<dyn Handle> {
        Arc::new(self)
    }

    async fn settle(&self) -> Result<(), HandleError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        if self.failing {
            return Err(HandleError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "access revoked",
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl Handle for MemoryHandle {
    fn kind(&self) -> HandleKind {
        match self.entry {
            Entry::File(_) => HandleKind::Leaf,
            Entry::Dir(_) => HandleKind::Container,
            Entry::Unknown => HandleKind::Unknown,
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    async fn enumerate(&self) -> Result<Vec<Arc<dyn Handle>>, HandleError> {
        self.settle().await?;
        match &self.entry {
            Entry::Dir(children) => Ok(children
                .iter()
                .map(|child| Arc::clone(child) as Arc<dyn Handle>)
                .collect()),
            _ => Err(HandleError::WrongKind {
                expected: "directory",
            }),
        }
    }

    async fn read_text(&self) -> Result<String, HandleError> {
        self.settle().await?;
        match &self.entry {
            Entry::File(content) => Ok(content.clone()),
            _ => Err(HandleError::WrongKind { expected: "file" }),
        }
    }
}
