// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    CollectionError, CollectionResult, DirListError, EntryError, EntryResult, ErrorContext,
    PresentationError, PresentationResult, Result,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{
    EntryKind, FileSize, Gid, LinkCount, ModificationTime, Ownership, PermissionBits, Uid,
};
