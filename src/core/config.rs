use std::path::PathBuf;

use crate::core::errors::{Error, Resource, Result};

pub const DEFAULT_MAX_ENTRIES: usize = 256;
pub const DEFAULT_MAX_NAME_LEN: usize = 255;
pub const DEFAULT_MAX_DIRS: usize = 256;
pub const DEFAULT_MAX_PATH_LEN: usize = 254;

/// Bounds enforced at enumeration time and when validating a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Entries collected per directory, dot entries included.
    pub max_entries: usize,
    /// Bytes per entry name.
    pub max_name_len: usize,
    /// Directories per invocation.
    pub max_dirs: usize,
    /// Bytes per directory argument.
    pub max_path_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_ENTRIES,
            max_name_len: DEFAULT_MAX_NAME_LEN,
            max_dirs: DEFAULT_MAX_DIRS,
            max_path_len: DEFAULT_MAX_PATH_LEN,
        }
    }
}

/// Whether the implied `.` and `..` entries are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DotEntries {
    #[default]
    Include,
    Exclude,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Resolved configuration for a single invocation.
#[derive(Debug, Clone)]
pub struct ListingConfig {
    pub dirs: Vec<PathBuf>,
    pub show_hidden: bool,
    pub verbose: bool,
    pub dot_entries: DotEntries,
    pub format: OutputFormat,
    pub limits: Limits,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            dirs: vec![PathBuf::from(".")],
            show_hidden: false,
            verbose: false,
            dot_entries: DotEntries::default(),
            format: OutputFormat::default(),
            limits: Limits::default(),
        }
    }
}

impl ListingConfig {
    pub fn new(dirs: Vec<PathBuf>) -> Self {
        Self {
            dirs,
            ..Self::default()
        }
    }

    /// Rejects configurations the aggregator must not start on.
    pub fn validate(&self) -> Result<()> {
        if self.dirs.len() > self.limits.max_dirs {
            return Err(Error::CapacityExceeded {
                resource: Resource::Directories,
                limit: self.limits.max_dirs,
                path: None,
            });
        }

        for dir in &self.dirs {
            let len = dir.as_os_str().len();
            if len > self.limits.max_path_len {
                return Err(Error::PathTooLong {
                    path: dir.clone(),
                    len,
                    limit: self.limits.max_path_len,
                });
            }
        }

        Ok(())
    }
}
