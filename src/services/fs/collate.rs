use std::cmp::Ordering;
use std::ffi::OsStr;

use crate::models::DirectoryEntry;

/// Ordinal byte comparison. No case folding, no locale, no natural numbers.
pub fn compare_names(a: &OsStr, b: &OsStr) -> Ordering {
    a.as_encoded_bytes().cmp(b.as_encoded_bytes())
}

pub fn sort_entries(entries: &mut [DirectoryEntry]) {
    entries.sort_unstable_by(|a, b| compare_names(a.name(), b.name()));
}
