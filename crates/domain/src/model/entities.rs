pub mod entry_record;
pub mod listing;

pub use entry_record::{EntryRecord, is_hidden_name};
pub use listing::{Listing, SkippedEntry};
