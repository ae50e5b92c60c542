pub mod file_entry;
pub mod listing;

pub use file_entry::{is_hidden, DirectoryEntry};
pub use listing::{DirectoryListing, ListingLine, RunSummary};
