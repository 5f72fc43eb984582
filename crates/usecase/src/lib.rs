//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: the metadata collector that turns one directory
//!   into a [`Listing`](dirlist_domain::Listing)
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod orchestrator;

pub use orchestrator::CollectEntries;
