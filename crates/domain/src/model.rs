pub mod entities;

pub use entities::{EntryRecord, Listing, SkippedEntry, is_hidden_name};
