// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;
pub mod entry_kind;
pub mod file_info;
pub mod ownership;
pub mod permissions;

pub use counts::LinkCount;
pub use entry_kind::EntryKind;
pub use file_info::{FileSize, ModificationTime};
pub use ownership::{Gid, Ownership, Uid};
pub use permissions::PermissionBits;
