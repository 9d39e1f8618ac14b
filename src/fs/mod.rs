// src/fs/mod.rs
//! Filesystem module - entry handles, directory picking and type detection.

pub mod detection;
pub mod disk;
pub mod handle;
pub mod memory;

// Re-export commonly used types
pub use detection::{category_for_name, sniff_binary, FileCategory};
pub use disk::{pick_directory, DiskHandle, MAX_FILE_SIZE};
pub use handle::{Handle, HandleKind};
pub use memory::MemoryHandle;
