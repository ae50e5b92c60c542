use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// What a capacity bound was counting when it was exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Entries,
    Directories,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Entries => f.write_str("entries"),
            Resource::Directories => f.write_str("directories"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot open directory \"{}\"", .path.display())]
    DirectoryUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot read metadata for \"{}\"", .path.display())]
    MetadataUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("too many {resource}{} (limit {limit})", in_path(.path))]
    CapacityExceeded {
        resource: Resource,
        limit: usize,
        path: Option<PathBuf>,
    },
    #[error("entry name in \"{}\" is {len} bytes (limit {limit})", .dir.display())]
    NameTooLong { dir: PathBuf, len: usize, limit: usize },
    #[error("directory argument \"{}\" is {len} bytes (limit {limit})", .path.display())]
    PathTooLong { path: PathBuf, len: usize, limit: usize },
    #[error("write error")]
    Output(#[from] std::io::Error),
    #[error("json encoding failed")]
    Json(#[from] serde_json::Error),
}

fn in_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!(" in \"{}\"", p.display()),
        None => String::new(),
    }
}
