use std::ffi::OsString;
use std::fs;
use std::path::Path;

use tracing::{debug, trace};

use crate::core::config::{DotEntries, Limits};
use crate::core::errors::{Error, Resource, Result};
use crate::models::DirectoryEntry;

/// Entries of one directory in the order the OS reported them.
#[derive(Debug, Clone, Default)]
pub struct RawEntries {
    pub entries: Vec<DirectoryEntry>,
}

impl RawEntries {
    pub fn count(&self) -> usize {
        self.entries.len()
    }
}

/// Reads every name in `path`, bounded by `limits`.
///
/// `read_dir` never yields `.` and `..`; they are added up front under
/// [`DotEntries::Include`] so the result matches what `readdir(3)` reports.
/// Both bounds fail fast, nothing is truncated.
pub fn read_entries(path: &Path, limits: &Limits, dots: DotEntries) -> Result<RawEntries> {
    let unavailable = |source| Error::DirectoryUnavailable {
        path: path.to_path_buf(),
        source,
    };

    let iter = fs::read_dir(path).map_err(unavailable)?;
    let mut raw = RawEntries::default();

    if dots == DotEntries::Include {
        push_entry(&mut raw, OsString::from("."), path, limits)?;
        push_entry(&mut raw, OsString::from(".."), path, limits)?;
    }

    for entry in iter {
        let entry = entry.map_err(unavailable)?;
        push_entry(&mut raw, entry.file_name(), path, limits)?;
    }

    debug!(dir = %path.display(), count = raw.count(), "enumerated directory");
    Ok(raw)
}

fn push_entry(raw: &mut RawEntries, name: OsString, dir: &Path, limits: &Limits) -> Result<()> {
    let len = name.len();
    if len == 0 {
        return Err(Error::DirectoryUnavailable {
            path: dir.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, "empty entry name"),
        });
    }
    if len > limits.max_name_len {
        return Err(Error::NameTooLong {
            dir: dir.to_path_buf(),
            len,
            limit: limits.max_name_len,
        });
    }
    if raw.entries.len() >= limits.max_entries {
        return Err(Error::CapacityExceeded {
            resource: Resource::Entries,
            limit: limits.max_entries,
            path: Some(dir.to_path_buf()),
        });
    }

    trace!(name = %name.to_string_lossy(), "entry");
    raw.entries.push(DirectoryEntry::new(name));
    Ok(())
}
