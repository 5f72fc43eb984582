use std::path::Path;

use dirlist_domain::{CollectOptions, EntryRecord, Listing, is_hidden_name};
use dirlist_ports::{
    accounts::{AccountDirectory, OwnershipResolver},
    filesystem::{DirectoryChild, DirectoryReader, EntryMetadata},
    styling::NameStyler,
};
use dirlist_shared_kernel::{CollectionError, EntryError, EntryResult, LinkCount, Result};
use log::{debug, warn};

/// Builds the entry records of one directory.
///
/// Per-entry failures are logged and reported through [`Listing::skipped`];
/// only an unreadable root or vanished metadata fail the whole call.
pub struct CollectEntries<'a> {
    reader: &'a dyn DirectoryReader,
    ownership: &'a dyn OwnershipResolver,
    accounts: &'a dyn AccountDirectory,
    styler: &'a dyn NameStyler,
}

impl<'a> CollectEntries<'a> {
    pub fn new(
        reader: &'a dyn DirectoryReader,
        ownership: &'a dyn OwnershipResolver,
        accounts: &'a dyn AccountDirectory,
        styler: &'a dyn NameStyler,
    ) -> Self {
        Self { reader, ownership, accounts, styler }
    }

    pub fn run(&self, path: &Path, options: &CollectOptions) -> Result<Listing> {
        let children = self.reader.read_dir(path).map_err(|source| CollectionError::DirectoryRead {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("{}: {} children", path.display(), children.len());

        let mut listing = Listing::default();
        for DirectoryChild { name, path: child_path, metadata } in children {
            if is_hidden_name(&name) && !options.show_hidden {
                continue;
            }

            let metadata = metadata.map_err(|e| CollectionError::UnexpectedFault {
                path: child_path.clone(),
                reason: e.to_string(),
            })?;

            match self.build_record(&name, &child_path, metadata, options) {
                Ok(record) => listing.records.push(record),
                Err(err) => {
                    warn!("{err}");
                    listing.skip(name, err.to_string());
                }
            }
        }

        debug!(
            "{}: {} listed, {} skipped",
            path.display(),
            listing.records.len(),
            listing.skipped.len()
        );
        Ok(listing)
    }

    fn build_record(
        &self,
        name: &str,
        path: &Path,
        metadata: EntryMetadata,
        options: &CollectOptions,
    ) -> EntryResult<EntryRecord> {
        let display_name = if options.colorize && metadata.kind.is_highlighted() {
            self.styler.style(name, metadata.kind)
        } else {
            name.to_string()
        };

        let links = if metadata.kind.is_dir() {
            let count = self.reader.count_children(path).map_err(|source| {
                EntryError::SubdirectoryLinkCount { path: path.to_path_buf(), source }
            })?;
            LinkCount::new(count)
        } else {
            LinkCount::single()
        };

        let ownership = self.ownership.resolve_ownership(&metadata);
        let group = self
            .accounts
            .group_name(ownership.gid)
            .ok_or(EntryError::GroupLookup { gid: ownership.gid })?;
        let owner = self
            .accounts
            .user_name(ownership.uid)
            .ok_or(EntryError::OwnerLookup { uid: ownership.uid })?;

        Ok(EntryRecord {
            kind: metadata.kind,
            permission: metadata.permission,
            links,
            owner,
            group,
            size: metadata.size,
            modified: metadata.modified,
            name: name.to_string(),
            display_name,
        })
    }
}
