// src/fs/disk.rs
//! Handles backed by the local filesystem.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use async_trait::async_trait;
use tokio::fs;

use super::{
    detection::sniff_binary,
    handle::{Handle, HandleKind},
};
use crate::error::{HandleError, PickError};

/// Files larger than this are not read for preview.
pub const MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

/// A file or directory on disk. Symlinks are followed.
#[derive(Debug, Clone)]
pub struct DiskHandle {
    path: PathBuf,
    name: String,
    kind: HandleKind,
}

impl DiskHandle {
    /// Stat `path` and wrap it. Unreadable metadata yields `HandleKind::Unknown`.
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let kind = match fs::metadata(&path).await {
            Ok(meta) if meta.is_dir() => HandleKind::Container,
            Ok(meta) if meta.is_file() => HandleKind::Leaf,
            _ => HandleKind::Unknown,
        };
        let name = display_name(&path);
        Self { path, name, kind }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[async_trait]
impl Handle for DiskHandle {
    fn kind(&self) -> HandleKind {
        self.kind
    }

    fn name(&self) -> &str {
        &self.name
    }

    async fn enumerate(&self) -> Result<Vec<Arc<dyn Handle>>, HandleError> {
        if self.kind != HandleKind::Container {
            return Err(HandleError::WrongKind {
                expected: "directory",
            });
        }

        let mut dir = fs::read_dir(&self.path).await?;
        let mut children: Vec<Arc<dyn Handle>> = Vec::new();
        while let Some(entry) = dir.next_entry().await? {
            children.push(Arc::new(DiskHandle::open(entry.path()).await));
        }
        Ok(children)
    }

    async fn read_text(&self) -> Result<String, HandleError> {
        if self.kind != HandleKind::Leaf {
            return Err(HandleError::WrongKind { expected: "file" });
        }

        let size = fs::metadata(&self.path).await?.len();
        if size > MAX_FILE_SIZE {
            return Err(HandleError::TooLarge {
                size,
                limit: MAX_FILE_SIZE,
            });
        }

        let bytes = fs::read(&self.path).await?;
        if let Some(mime) = sniff_binary(&bytes) {
            return Err(HandleError::Binary { mime });
        }
        String::from_utf8(bytes).map_err(|_| HandleError::NotText)
    }
}

/// Resolve a user-supplied path into a readable directory handle.
///
/// A leading `~` expands to the home directory.
pub async fn pick_directory(path: impl AsRef<Path>) -> Result<DiskHandle, PickError> {
    let requested = expand_home(path.as_ref());

    let canonical = fs::canonicalize(&requested)
        .await
        .map_err(|source| PickError::AccessDenied {
            path: requested.clone(),
            source,
        })?;

    let handle = DiskHandle::open(&canonical).await;
    match handle.kind() {
        HandleKind::Container => {}
        _ => return Err(PickError::NotADirectory { path: canonical }),
    }

    // Listing permission is only checked by actually opening the directory.
    let _entries = fs::read_dir(&canonical)
        .await
        .map_err(|source| PickError::AccessDenied {
            path: canonical.clone(),
            source,
        })?;

    tracing::info!(path = %canonical.display(), "picked directory");
    Ok(handle)
}

fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use std::fs as stdfs;

    use tempfile::TempDir;

    use super::*;

    #[tokio::test]
    async fn enumerate_lists_files_and_directories() {
        let tmp = TempDir::new().unwrap();
        stdfs::write(tmp.path().join("a.txt"), "alpha").unwrap();
        stdfs::create_dir(tmp.path().join("sub")).unwrap();

        let root = pick_directory(tmp.path()).await.unwrap();
        let mut children: Vec<(String, HandleKind)> = root
            .enumerate()
            .await
            .unwrap()
            .iter()
            .map(|h| (h.name().to_string(), h.kind()))
            .collect();
        children.sort_by(|a, b| a.0.cmp(&b.0));

        assert_eq!(
            children,
            vec![
                ("a.txt".to_string(), HandleKind::Leaf),
                ("sub".to_string(), HandleKind::Container),
            ]
        );
    }

    #[tokio::test]
    async fn read_text_returns_utf8_content() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("main.rs");
        stdfs::write(&path, "fn main() {}\n").unwrap();

        let handle = DiskHandle::open(&path).await;
        assert_eq!(handle.read_text().await.unwrap(), "fn main() {}\n");
    }

    #[tokio::test]
    async fn read_text_rejects_binary_and_invalid_utf8() {
        let tmp = TempDir::new().unwrap();
        let png = tmp.path().join("logo.png");
        stdfs::write(&png, [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0]).unwrap();
        let junk = tmp.path().join("junk.dat");
        stdfs::write(&junk, [b'o', b'k', 0xc3, 0x28, 0xa0]).unwrap();

        let err = DiskHandle::open(&png).await.read_text().await.unwrap_err();
        assert!(matches!(err, HandleError::Binary { ref mime } if mime == "image/png"));

        let err = DiskHandle::open(&junk).await.read_text().await.unwrap_err();
        assert!(matches!(err, HandleError::NotText));
    }

    #[tokio::test]
    async fn read_text_refuses_oversized_files() {
        let tmp = TempDir::new().unwrap();
        let big = tmp.path().join("bundle.min.js");
        stdfs::File::create(&big).unwrap().set_len(MAX_FILE_SIZE + 1).unwrap();
        let edge = tmp.path().join("edge.txt");
        stdfs::write(&edge, vec![b'a'; MAX_FILE_SIZE as usize]).unwrap();

        let err = DiskHandle::open(&big).await.read_text().await.unwrap_err();
        assert!(matches!(
            err,
            HandleError::TooLarge { size, limit } if size == MAX_FILE_SIZE + 1 && limit == MAX_FILE_SIZE
        ));

        // Exactly at the cap is still read.
        let text = DiskHandle::open(&edge).await.read_text().await.unwrap();
        assert_eq!(text.len() as u64, MAX_FILE_SIZE);
    }

    #[tokio::test]
    async fn pick_missing_path_is_access_denied() {
        let tmp = TempDir::new().unwrap();
        let err = pick_directory(tmp.path().join("missing")).await.unwrap_err();
        assert!(matches!(err, PickError::AccessDenied { .. }));
    }

    #[tokio::test]
    async fn pick_file_is_not_a_directory() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("file.txt");
        stdfs::write(&file, "x").unwrap();

        let err = pick_directory(&file).await.unwrap_err();
        assert!(matches!(err, PickError::NotADirectory { .. }));
    }

    #[test]
    fn expand_home_leaves_plain_paths() {
        assert_eq!(expand_home(Path::new("/tmp/x")), PathBuf::from("/tmp/x"));
    }
}
