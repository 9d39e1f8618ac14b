// src/error.rs
//! Error types for picking, traversing and reading entries.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Failure reported by a [`Handle`](crate::fs::Handle) operation.
#[derive(Debug, Error)]
pub enum HandleError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    /// The operation does not apply to this kind of entry.
    #[error("entry is not a {expected}")]
    WrongKind { expected: &'static str },

    /// Content sniffed as a non-text format.
    #[error("binary content ({mime})")]
    Binary { mime: String },

    #[error("content is not valid UTF-8")]
    NotText,

    /// File is over the preview size cap.
    #[error("file too large ({size} bytes, limit {limit})")]
    TooLarge { size: u64, limit: u64 },
}

/// The directory pick did not yield a usable root.
///
/// Every variant is an "access denied" outcome: it is reported to the user
/// and never touches the tree that is already installed.
#[derive(Debug, Error)]
pub enum PickError {
    #[error("open cancelled")]
    Cancelled,

    #[error("cannot access {}: {source}", path.display())]
    AccessDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not a directory", path.display())]
    NotADirectory { path: PathBuf },
}

/// A build aborted. No partial tree is produced.
#[derive(Debug, Error)]
pub enum TraversalError {
    #[error("failed to list {location}: {source}")]
    Enumerate {
        location: String,
        #[source]
        source: HandleError,
    },

    /// The entry is neither a file nor a directory.
    #[error("unrecognized entry kind at {location}")]
    Malformed { location: String },

    #[error("{location} is nested deeper than {limit} levels")]
    TooDeep { location: String, limit: usize },
}

impl TraversalError {
    /// Location (slash-joined names from the root) where the build stopped.
    pub fn location(&self) -> &str {
        match self {
            Self::Enumerate { location, .. }
            | Self::Malformed { location }
            | Self::TooDeep { location, .. } => location,
        }
    }
}

/// Reading the selected leaf failed. The tree and selection stay valid.
#[derive(Debug, Error)]
#[error("cannot read {name}: {source}")]
pub struct ContentReadError {
    pub name: String,
    #[source]
    pub source: HandleError,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn traversal_error_reports_location() {
        let err = TraversalError::Malformed {
            location: "root/socket".to_string(),
        };
        assert_eq!(err.location(), "root/socket");
        assert_eq!(err.to_string(), "unrecognized entry kind at root/socket");
    }

    #[test]
    fn content_error_wraps_source() {
        let err = ContentReadError {
            name: "logo.png".to_string(),
            source: HandleError::Binary {
                mime: "image/png".to_string(),
            },
        };
        assert_eq!(err.to_string(), "cannot read logo.png: binary content (image/png)");
    }
}
