//! Directory listing engine behind the `jls` command.
//!
//! - [`services::fs`] enumerates, sorts and decodes permissions.
//! - [`services::aggregate`] drives a whole run across directories.
//! - [`services::format`] renders text or JSON lines.

pub mod core;
pub mod models;
pub mod services;

pub use crate::core::config::{DotEntries, Limits, ListingConfig, OutputFormat};
pub use crate::core::errors::{Error, Result};
pub use crate::services::aggregate::Aggregator;
