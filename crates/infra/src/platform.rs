//! Platform-specific abstractions for cross-platform compatibility.
//!
//! Ownership is the one place where listing differs per OS: unix records a
//! uid/gid on every inode, other platforms have nothing comparable. This
//! module keeps those `cfg` branches out of the collector.

use std::fs::Metadata;

use dirlist_ports::{accounts::OwnershipResolver, filesystem::EntryMetadata};
use dirlist_shared_kernel::Ownership;

// ============================================================================
// Native Owner Extraction
// ============================================================================

/// Owner ids stored with the entry, if the platform keeps any.
#[cfg(unix)]
pub fn native_owner(metadata: &Metadata) -> Option<Ownership> {
    use std::os::unix::fs::MetadataExt;

    Some(Ownership::new(metadata.uid(), metadata.gid()))
}

#[cfg(not(unix))]
pub fn native_owner(_metadata: &Metadata) -> Option<Ownership> {
    None
}

/// Effective ids of the running process.
#[cfg(unix)]
pub fn process_ownership() -> Ownership {
    Ownership::new(uzers::get_effective_uid(), uzers::get_effective_gid())
}

/// Non-unix processes have no numeric ids; zero stands in for both.
#[cfg(not(unix))]
pub fn process_ownership() -> Ownership {
    Ownership::new(0, 0)
}

// ============================================================================
// Ownership Resolvers
// ============================================================================

/// Attributes entries to the ids recorded by the filesystem.
///
/// Entries without recorded ids fall back to the process ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetadataOwnership;

impl OwnershipResolver for MetadataOwnership {
    fn resolve_ownership(&self, metadata: &EntryMetadata) -> Ownership {
        metadata.native_owner.unwrap_or_else(process_ownership)
    }
}

/// Attributes every entry to the running process, whoever really owns it.
///
/// This is the only option on platforms without per-file ownership, and the
/// listing is less accurate for it: files created by other accounts still
/// show the current user and group.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessOwnership;

impl OwnershipResolver for ProcessOwnership {
    fn resolve_ownership(&self, _metadata: &EntryMetadata) -> Ownership {
        process_ownership()
    }
}

/// Default ownership resolver for the current platform.
#[cfg(unix)]
pub type DefaultOwnershipResolver = MetadataOwnership;

#[cfg(not(unix))]
pub type DefaultOwnershipResolver = ProcessOwnership;

/// Create the default ownership resolver for the current platform.
pub fn default_ownership_resolver() -> DefaultOwnershipResolver {
    #[cfg(unix)]
    return MetadataOwnership;

    #[cfg(not(unix))]
    return ProcessOwnership;
}
