//! CLI argument definitions for the publication browser.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use pubs_model::SortOrder;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "pubs",
    version,
    about = "Search, filter and sort a publication catalog",
    long_about = "Search, filter and sort a publication catalog.\n\n\
                  Catalogs are JSON or CSV files grouping publications by category.\n\
                  The catalog path may also be given through PUBS_CATALOG."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Prefix log lines with timestamps (pretty and compact formats).
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the publications matching a search, filter and sort order.
    List(ListArgs),

    /// List the categories in a catalog with their record counts.
    Categories(CatalogArgs),

    /// Export every dated publication as BibTeX.
    ExportBibtex(ExportArgs),

    /// Interactively change search, filter and sort from stdin.
    Browse(BrowseArgs),
}

#[derive(Args)]
pub struct CatalogArgs {
    /// Catalog file (.json or .csv). Defaults to $PUBS_CATALOG.
    #[arg(value_name = "CATALOG")]
    pub catalog: Option<PathBuf>,
}

#[derive(Args)]
pub struct ViewArgs {
    /// Case-insensitive text to look for in titles and details.
    #[arg(long = "search", short = 's', value_name = "TEXT")]
    pub search: Option<String>,

    /// Category to show, or "all".
    #[arg(long = "filter", short = 'f', value_name = "CATEGORY", default_value = "all")]
    pub filter: String,

    /// Ordering within each category.
    #[arg(long = "sort", value_enum, default_value = "year-desc")]
    pub sort: SortArg,
}

#[derive(Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    #[command(flatten)]
    pub view: ViewArgs,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Output file; "-" writes to stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH", default_value = pubs_report::DEFAULT_BIBTEX_FILE)]
    pub output: PathBuf,
}

#[derive(Args)]
pub struct BrowseArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    #[command(flatten)]
    pub view: ViewArgs,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SortArg {
    YearDesc,
    YearAsc,
    Default,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::YearDesc => SortOrder::YearDesc,
            SortArg::YearAsc => SortOrder::YearAsc,
            SortArg::Default => SortOrder::Default,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
