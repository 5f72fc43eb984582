// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod accounts;
pub mod filesystem;
pub mod platform;
pub mod styling;

pub use accounts::SystemAccounts;
pub use filesystem::StdDirectoryReader;
pub use platform::{
    DefaultOwnershipResolver, MetadataOwnership, ProcessOwnership, default_ownership_resolver,
};
pub use styling::AnsiStyler;
