//! jls: list directory contents.
//!
//! Thin binary entry point. Flag parsing and exit codes live here, the
//! listing engine lives in the `jls` library.

use std::io::{self, BufWriter, ErrorKind};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{ArgAction, CommandFactory, Parser};
use jls::core::config::{DEFAULT_MAX_DIRS, DEFAULT_MAX_ENTRIES};
use jls::core::telemetry::logging::init_logging;
use jls::models::RunSummary;
use jls::{Aggregator, DotEntries, Error, Limits, ListingConfig, OutputFormat};
use tracing::{debug, error};

/// Exit code when usage is printed instead of a listing.
const HELP_EXIT: u8 = 2;

/// List directory contents, sorted by name.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, disable_help_flag = true)]
#[command(after_help = "Examples:\n  jls -a -l .\n  jls /")]
struct Cli {
    /// Directories to list (default: the current directory)
    #[arg(value_name = "DIR")]
    dirs: Vec<PathBuf>,

    /// Do not ignore entries starting with '.'
    #[arg(short = 'a', long = "all")]
    all: bool,

    /// Print the permission string of each entry
    #[arg(short = 'l', long = "long")]
    long: bool,

    /// Do not report the implied '.' and '..' entries
    #[arg(short = 'A', long = "almost-all")]
    almost_all: bool,

    /// Emit one JSON object per directory instead of text
    #[arg(long)]
    json: bool,

    /// Maximum entries read per directory
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_ENTRIES)]
    max_entries: usize,

    /// Maximum directories per invocation
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_DIRS)]
    max_dirs: usize,

    /// Enable debug logging on stderr
    #[arg(long)]
    debug: bool,

    /// Print usage and exit
    #[arg(short = 'h', long = "help", action = ArgAction::SetTrue)]
    help: bool,
}

impl Cli {
    fn into_config(self) -> ListingConfig {
        let dirs = if self.dirs.is_empty() {
            vec![PathBuf::from(".")]
        } else {
            self.dirs
        };

        ListingConfig {
            dirs,
            show_hidden: self.all,
            verbose: self.long,
            dot_entries: if self.almost_all {
                DotEntries::Exclude
            } else {
                DotEntries::Include
            },
            format: if self.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
            limits: Limits {
                max_entries: self.max_entries,
                max_dirs: self.max_dirs,
                ..Limits::default()
            },
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.help {
        println!("{}", Cli::command().render_help());
        return ExitCode::from(HELP_EXIT);
    }

    init_logging(if cli.debug { "debug" } else { "off" });

    let config = cli.into_config();
    debug!(?config, "resolved configuration");

    match run(&config) {
        Ok(summary) => {
            debug!(directories = summary.directories, "done");
            ExitCode::SUCCESS
        }
        Err(err) if is_broken_pipe(&err) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %format!("{err:#}"), "listing aborted");
            eprintln!(":: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &ListingConfig) -> Result<RunSummary> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let summary = Aggregator::new(config).run(&mut out)?;
    Ok(summary)
}

// `jls | head` closes stdout early; that is not a failure.
fn is_broken_pipe(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<Error>(),
        Some(Error::Output(io)) if io.kind() == ErrorKind::BrokenPipe
    )
}
