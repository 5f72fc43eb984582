// crates/ports/src/accounts.rs
use dirlist_shared_kernel::{Gid, Ownership, Uid};

use crate::filesystem::EntryMetadata;

/// Decides which ids an entry is attributed to.
pub trait OwnershipResolver: Send + Sync {
    fn resolve_ownership(&self, metadata: &EntryMetadata) -> Ownership;
}

/// Maps numeric ids to account names.
pub trait AccountDirectory: Send + Sync {
    fn user_name(&self, uid: Uid) -> Option<String>;
    fn group_name(&self, gid: Gid) -> Option<String>;
}
