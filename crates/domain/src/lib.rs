#![allow(clippy::multiple_crate_versions)]

pub mod model;
pub mod options;

pub use model::{EntryRecord, Listing, SkippedEntry, is_hidden_name};
pub use options::{CollectOptions, ColorMode, ListOptions, OutputFormat, RenderOptions};
