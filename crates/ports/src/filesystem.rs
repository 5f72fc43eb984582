// crates/ports/src/filesystem.rs
use std::{
    io,
    path::{Path, PathBuf},
};

use dirlist_shared_kernel::{EntryKind, FileSize, ModificationTime, Ownership, PermissionBits};

/// Metadata captured for one child, without following symlinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryMetadata {
    pub kind: EntryKind,
    pub permission: PermissionBits,
    pub size: FileSize,
    pub modified: ModificationTime,
    /// Owner ids recorded by the filesystem, when the platform exposes them.
    pub native_owner: Option<Ownership>,
}

/// One immediate child of a listed directory.
#[derive(Debug)]
pub struct DirectoryChild {
    pub name: String,
    pub path: PathBuf,
    pub metadata: io::Result<EntryMetadata>,
}

/// Port for reading directory contents.
pub trait DirectoryReader: Send + Sync {
    /// Immediate children in the order the filesystem yields them.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirectoryChild>>;

    /// Number of names inside `path`, hidden ones included.
    fn count_children(&self, path: &Path) -> io::Result<usize>;
}
