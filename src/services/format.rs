use serde::Serialize;

use crate::core::config::OutputFormat;
use crate::core::errors::Result;
use crate::models::{DirectoryListing, ListingLine, RunSummary};

pub const EMPTY_INDICATOR: &str = "\t:: Directory is empty!";

/// Turns listings into output lines. Lines carry no trailing newline.
pub trait ListingFormatter {
    fn directory(&self, listing: &DirectoryListing) -> Result<Vec<String>>;
    fn summary(&self, summary: &RunSummary) -> Result<Vec<String>>;
}

pub fn formatter_for(format: OutputFormat) -> Box<dyn ListingFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormatter;

impl TextFormatter {
    pub fn entry_line(line: &ListingLine) -> String {
        let name = line.entry.display_name();
        match &line.permissions {
            Some(perms) => format!("{:>2}: {:>25} {:#}", line.index, name, perms),
            None => format!("{:>2}: {:>25}", line.index, name),
        }
    }
}

impl ListingFormatter for TextFormatter {
    fn directory(&self, listing: &DirectoryListing) -> Result<Vec<String>> {
        let mut out = Vec::with_capacity(listing.lines.len() + 3);
        out.push(format!(":: Contents of \"{}\":", listing.path.display()));
        if listing.is_empty() {
            out.push(EMPTY_INDICATOR.to_string());
        } else {
            out.extend(listing.lines.iter().map(Self::entry_line));
        }
        out.push(format!(":: Total files: {}", listing.raw_count));
        Ok(out)
    }

    fn summary(&self, summary: &RunSummary) -> Result<Vec<String>> {
        Ok(vec![format!(
            ":: Total Directories searched: {}",
            summary.directories
        )])
    }
}

#[derive(Debug, Serialize)]
pub struct EntryDto {
    pub index: usize,
    pub name: String,
    pub hidden: bool,
    pub permissions: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DirectoryDto {
    pub path: String,
    pub raw_count: usize,
    pub entries: Vec<EntryDto>,
}

#[derive(Debug, Serialize)]
pub struct SummaryDto {
    pub directories: usize,
    pub total_files: usize,
}

impl From<&DirectoryListing> for DirectoryDto {
    fn from(listing: &DirectoryListing) -> Self {
        Self {
            path: listing.path.to_string_lossy().into_owned(),
            raw_count: listing.raw_count,
            entries: listing
                .lines
                .iter()
                .map(|line| EntryDto {
                    index: line.index,
                    name: line.entry.display_name().into_owned(),
                    hidden: line.entry.is_hidden(),
                    permissions: line.permissions.map(|p| p.to_string()),
                })
                .collect(),
        }
    }
}

/// One JSON object per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl ListingFormatter for JsonFormatter {
    fn directory(&self, listing: &DirectoryListing) -> Result<Vec<String>> {
        Ok(vec![serde_json::to_string(&DirectoryDto::from(listing))?])
    }

    fn summary(&self, summary: &RunSummary) -> Result<Vec<String>> {
        let dto = SummaryDto {
            directories: summary.directories,
            total_files: summary.total_files,
        };
        Ok(vec![serde_json::to_string(&dto)?])
    }
}
