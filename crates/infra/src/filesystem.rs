// crates/infra/src/filesystem.rs
use std::{fs, io, path::Path};

use dirlist_ports::filesystem::{DirectoryChild, DirectoryReader, EntryMetadata};
use dirlist_shared_kernel::{EntryKind, FileSize, ModificationTime, PermissionBits};
use log::trace;

use crate::platform::native_owner;

/// [`DirectoryReader`] backed by `std::fs`.
///
/// Children are reported in the order `read_dir` yields them. Metadata comes
/// from the directory entry itself, so symlinks are described, not followed.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdDirectoryReader;

impl DirectoryReader for StdDirectoryReader {
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirectoryChild>> {
        fs::read_dir(path)?
            .map(|entry| entry.map(child_from_entry))
            .collect()
    }

    fn count_children(&self, path: &Path) -> io::Result<usize> {
        let mut count = 0;
        for entry in fs::read_dir(path)? {
            entry?;
            count += 1;
        }
        trace!("{}: {count} names", path.display());
        Ok(count)
    }
}

fn child_from_entry(entry: fs::DirEntry) -> DirectoryChild {
    let name = entry.file_name().to_string_lossy().into_owned();
    let metadata = entry.metadata().and_then(|md| entry_metadata(&md));
    DirectoryChild { name, path: entry.path(), metadata }
}

/// Converts `std` metadata into the port DTO. Fails only when the
/// modification time is unavailable.
pub fn entry_metadata(metadata: &fs::Metadata) -> io::Result<EntryMetadata> {
    Ok(EntryMetadata {
        kind: EntryKind::from(metadata.file_type()),
        permission: PermissionBits::from_metadata(metadata),
        size: FileSize::new(metadata.len()),
        modified: ModificationTime::from(metadata.modified()?),
        native_owner: native_owner(metadata),
    })
}
