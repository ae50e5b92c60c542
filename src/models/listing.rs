use std::path::PathBuf;

use super::file_entry::DirectoryEntry;
use crate::services::fs::permissions::PermissionString;

/// One entry that survived filtering, ready to be printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingLine {
    /// Position in the sorted raw sequence. Filtered entries still use up an index.
    pub index: usize,
    pub entry: DirectoryEntry,
    pub permissions: Option<PermissionString>,
}

/// The sorted, filtered view of one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryListing {
    /// The argument as given, never canonicalized.
    pub path: PathBuf,
    pub lines: Vec<ListingLine>,
    /// Entries read before filtering, hidden ones included.
    pub raw_count: usize,
}

impl DirectoryListing {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &DirectoryEntry> {
        self.lines.iter().map(|line| &line.entry)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub directories: usize,
    pub total_files: usize,
}

impl RunSummary {
    pub fn record(&mut self, listing: &DirectoryListing) {
        self.directories += 1;
        self.total_files += listing.raw_count;
    }
}
