use std::borrow::Cow;
use std::ffi::{OsStr, OsString};

/// One name read from a directory. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    name: OsString,
    hidden: bool,
}

impl DirectoryEntry {
    pub fn new(name: impl Into<OsString>) -> Self {
        let name = name.into();
        let hidden = is_hidden(&name);
        Self { name, hidden }
    }

    pub fn name(&self) -> &OsStr {
        &self.name
    }

    pub fn display_name(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}

/// A name is hidden when it starts with `.` and is longer than two bytes,
/// so `.` and `..` (and any two-byte name like `.a`) stay visible.
pub fn is_hidden(name: &OsStr) -> bool {
    let bytes = name.as_encoded_bytes();
    bytes.len() > 2 && bytes[0] == b'.'
}
