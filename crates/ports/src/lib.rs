//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`filesystem`]: Directory enumeration and per-entry metadata
//! - [`accounts`]: Ownership resolution and user/group name lookup
//! - [`styling`]: Decorating entry names for display
//!
//! These ports allow the collector to remain independent of the
//! operating system it runs on.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod accounts;
pub mod filesystem;
pub mod styling;
