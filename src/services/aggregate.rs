use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::{debug, info};

use crate::core::config::ListingConfig;
use crate::core::errors::{Error, Result};
use crate::models::{DirectoryListing, ListingLine, RunSummary};
use crate::services::format::{formatter_for, ListingFormatter};
use crate::services::fs::collate::sort_entries;
use crate::services::fs::listing::read_entries;
use crate::services::fs::permissions::PermissionString;

/// Lists each configured directory in order and writes the result.
///
/// The first failure aborts the run. A directory is fully rendered before
/// any of it is written, so a failing directory leaves no partial output.
pub struct Aggregator<'a> {
    config: &'a ListingConfig,
    formatter: Box<dyn ListingFormatter>,
}

impl<'a> Aggregator<'a> {
    pub fn new(config: &'a ListingConfig) -> Self {
        Self {
            config,
            formatter: formatter_for(config.format),
        }
    }

    pub fn with_formatter(config: &'a ListingConfig, formatter: Box<dyn ListingFormatter>) -> Self {
        Self { config, formatter }
    }

    /// Enumerates, sorts, filters and (when verbose) stats one directory.
    pub fn list(&self, path: &Path) -> Result<DirectoryListing> {
        let mut raw = read_entries(path, &self.config.limits, self.config.dot_entries)?;
        let raw_count = raw.count();
        sort_entries(&mut raw.entries);

        let mut lines = Vec::with_capacity(raw_count);
        for (index, entry) in raw.entries.into_iter().enumerate() {
            if entry.is_hidden() && !self.config.show_hidden {
                continue;
            }

            let permissions = if self.config.verbose {
                // Resolved against the listed directory, not the working directory.
                let full = path.join(entry.name());
                let md = fs::metadata(&full)
                    .map_err(|source| Error::MetadataUnavailable { path: full, source })?;
                Some(PermissionString::from_metadata(&md))
            } else {
                None
            };

            lines.push(ListingLine {
                index,
                entry,
                permissions,
            });
        }

        Ok(DirectoryListing {
            path: path.to_path_buf(),
            lines,
            raw_count,
        })
    }

    pub fn run<W: Write>(&self, out: &mut W) -> Result<RunSummary> {
        self.config.validate()?;

        let mut summary = RunSummary::default();
        let total = self.config.dirs.len();
        for (i, dir) in self.config.dirs.iter().enumerate() {
            debug!(dir = %dir.display(), position = i + 1, total, "listing directory");
            let listing = self.list(dir)?;
            let rendered = self.formatter.directory(&listing)?;
            write_lines(out, &rendered)?;
            summary.record(&listing);
        }

        write_lines(out, &self.formatter.summary(&summary)?)?;
        out.flush()?;

        info!(
            directories = summary.directories,
            total_files = summary.total_files,
            "listing complete"
        );
        Ok(summary)
    }
}

fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DotEntries;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn config_for(dir: &Path) -> ListingConfig {
        ListingConfig::new(vec![dir.to_path_buf()])
    }

    fn seeded() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::write(dir.path().join(".hidden"), "h").unwrap();
        dir
    }

    fn names(listing: &DirectoryListing) -> Vec<String> {
        listing
            .names()
            .map(|e| e.display_name().into_owned())
            .collect()
    }

    #[test]
    fn show_hidden_lists_everything_sorted() -> Result<()> {
        let dir = seeded();
        let mut config = config_for(dir.path());
        config.show_hidden = true;

        let listing = Aggregator::new(&config).list(dir.path())?;
        assert_eq!(names(&listing), [".", "..", ".hidden", "a.txt", "b.txt"]);
        assert_eq!(listing.raw_count, 5);
        Ok(())
    }

    #[test]
    fn hidden_entries_are_filtered_but_counted() -> Result<()> {
        let dir = seeded();
        let config = config_for(dir.path());

        let listing = Aggregator::new(&config).list(dir.path())?;
        assert_eq!(names(&listing), [".", "..", "a.txt", "b.txt"]);
        assert_eq!(listing.raw_count, 5);
        let indices: Vec<usize> = listing.lines.iter().map(|l| l.index).collect();
        assert_eq!(indices, [0, 1, 3, 4]);
        Ok(())
    }

    #[test]
    fn empty_directory_without_dot_entries() -> Result<()> {
        let dir = TempDir::new().unwrap();
        let mut config = config_for(dir.path());
        config.dot_entries = DotEntries::Exclude;

        let listing = Aggregator::new(&config).list(dir.path())?;
        assert!(listing.is_empty());
        assert_eq!(listing.raw_count, 0);
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn verbose_resolves_names_inside_listed_directory() -> Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let file = dir.path().join("script.sh");
        fs::write(&file, "#!/bin/sh\n")?;
        fs::set_permissions(&file, fs::Permissions::from_mode(0o754))?;

        let mut config = config_for(dir.path());
        config.verbose = true;
        config.dot_entries = DotEntries::Exclude;

        let listing = Aggregator::new(&config).list(dir.path())?;
        assert_eq!(listing.lines.len(), 1);
        let perms = listing.lines[0].permissions.expect("verbose line has permissions");
        assert_eq!(perms.as_str(), "rwxr-xr--");
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_is_metadata_unavailable() {
        let dir = TempDir::new().unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone"), dir.path().join("link")).unwrap();

        let mut config = config_for(dir.path());
        config.verbose = true;

        match Aggregator::new(&config).list(dir.path()) {
            Err(Error::MetadataUnavailable { path, .. }) => {
                assert_eq!(path, dir.path().join("link"))
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn run_writes_every_directory_and_summary() -> Result<()> {
        let first = seeded();
        let second = TempDir::new().unwrap();
        let mut config = ListingConfig::new(vec![
            first.path().to_path_buf(),
            second.path().to_path_buf(),
        ]);
        config.dot_entries = DotEntries::Exclude;

        let mut out = Vec::new();
        let summary = Aggregator::new(&config).run(&mut out)?;
        assert_eq!(summary.directories, 2);
        assert_eq!(summary.total_files, 3);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], format!(":: Contents of \"{}\":", first.path().display()));
        assert_eq!(lines[1], format!(" 1: {:>25}", "a.txt"));
        assert_eq!(lines[2], format!(" 2: {:>25}", "b.txt"));
        assert_eq!(lines[3], ":: Total files: 3");
        assert_eq!(lines[4], format!(":: Contents of \"{}\":", second.path().display()));
        assert_eq!(lines[5], "\t:: Directory is empty!");
        assert_eq!(lines[6], ":: Total files: 0");
        assert_eq!(lines[7], ":: Total Directories searched: 2");
        assert_eq!(lines.len(), 8);
        Ok(())
    }

    #[test]
    fn missing_directory_aborts_remaining_run() {
        let good = seeded();
        let missing = good.path().join("missing");
        let later = seeded();
        let config = ListingConfig::new(vec![
            good.path().to_path_buf(),
            missing.clone(),
            later.path().to_path_buf(),
        ]);

        let mut out = Vec::new();
        match Aggregator::new(&config).run(&mut out) {
            Err(Error::DirectoryUnavailable { path, .. }) => assert_eq!(path, missing),
            other => panic!("unexpected result: {other:?}"),
        }

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches(":: Contents of").count(), 1);
        assert!(!text.contains(&later.path().display().to_string()));
        assert!(!text.contains("Total Directories searched"));
    }

    #[test]
    fn custom_formatter_receives_every_listing() -> Result<()> {
        use crate::services::format::JsonFormatter;

        let dir = seeded();
        let config = config_for(dir.path());

        let mut out = Vec::new();
        Aggregator::with_formatter(&config, Box::new(JsonFormatter)).run(&mut out)?;

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let summary: serde_json::Value = serde_json::from_str(lines[1])?;
        assert_eq!(summary["directories"], 1);
        assert_eq!(summary["total_files"], 5);
        Ok(())
    }

    #[test]
    fn run_rejects_too_many_directories_before_output() {
        let dir = seeded();
        let mut config = ListingConfig::new(vec![PathBuf::from(dir.path()); 3]);
        config.limits.max_dirs = 2;

        let mut out = Vec::new();
        assert!(matches!(
            Aggregator::new(&config).run(&mut out),
            Err(Error::CapacityExceeded { .. })
        ));
        assert!(out.is_empty());
    }
}
