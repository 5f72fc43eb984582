use crate::model::EntryRecord;

/// An entry left out of the listing, with the reason it was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub name: String,
    pub reason: String,
}

/// Result of collecting one directory.
///
/// `skipped` is advisory: a non-empty list never turns the listing into an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    pub records: Vec<EntryRecord>,
    pub skipped: Vec<SkippedEntry>,
}

impl Listing {
    pub fn new(records: Vec<EntryRecord>, skipped: Vec<SkippedEntry>) -> Self {
        Self { records, skipped }
    }

    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    pub fn skip(&mut self, name: impl Into<String>, reason: impl Into<String>) {
        self.skipped.push(SkippedEntry { name: name.into(), reason: reason.into() });
    }
}
