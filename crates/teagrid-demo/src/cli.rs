//! Command-line interface for `teagrid-demo`.
//!
//! # Examples
//!
//! ```bash
//! # Browse the built-in sample data interactively
//! teagrid-demo
//!
//! # Print the second page of a file, sorted by age descending
//! teagrid-demo --records people.json --print --sort age --desc --page 1
//!
//! # Interactive session with debug logs written to a file
//! teagrid-demo --log-file grid.log -vv
//! ```

use std::path::PathBuf;

use clap::Parser;
use teagrid::message::{FilterColumn, Msg};

/// Browse JSON records in a paginated, sortable, filterable grid.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "teagrid-demo",
    author,
    version,
    about = "Browse JSON records in a paginated, sortable, filterable grid"
)]
pub struct Cli {
    /// JSON file holding an array of objects
    ///
    /// Uses a built-in sample data set when omitted
    #[arg(long, short = 'r', env = "TEAGRID_RECORDS")]
    pub records: Option<PathBuf>,

    /// TOML file with grid settings
    #[arg(long, short = 'c', env = "TEAGRID_CONFIG")]
    pub config: Option<PathBuf>,

    /// Render one page to stdout and exit
    #[arg(long)]
    pub print: bool,

    /// Column to sort by
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort descending instead of ascending
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Initial search text
    #[arg(long, short = 'f')]
    pub filter: Option<String>,

    /// Restrict the search to one column
    #[arg(long)]
    pub filter_column: Option<String>,

    /// Zero-based page to start on
    #[arg(long, default_value_t = 0)]
    pub page: usize,

    /// Records per page (overrides the config file)
    #[arg(long, short = 'n')]
    pub page_size: Option<usize>,

    /// Write logs to this file
    ///
    /// Interactive sessions only log when a file is given
    #[arg(long, env = "TEAGRID_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse command line arguments.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Create CLI from iterator (useful for testing).
    pub fn try_parse_from<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Default log filter for the verbosity count.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Messages that put a fresh grid into the state the flags describe.
    ///
    /// Sorting descending takes two clicks on the header, so `--desc` sends
    /// the sort message twice.
    #[must_use]
    pub fn initial_messages<H>(&self) -> Vec<Msg<H>> {
        let mut msgs = Vec::new();

        if let Some(size) = self.page_size {
            msgs.push(Msg::SetPageSize(size));
        }
        if let Some(col) = &self.sort {
            msgs.push(Msg::sort_by(col.clone()));
            if self.desc {
                msgs.push(Msg::sort_by(col.clone()));
            }
        }
        if let Some(text) = &self.filter {
            msgs.push(Msg::filter_text(text.clone()));
        }
        if let Some(col) = &self.filter_column {
            msgs.push(Msg::SetFilterColumn(FilterColumn::column(col.clone())));
        }
        if self.page > 0 {
            msgs.push(Msg::JumpToPage(self.page));
        }

        msgs
    }
}
