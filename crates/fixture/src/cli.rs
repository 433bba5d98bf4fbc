//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Listing format for each simulated day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListingFormat {
    /// `name, sellIn, quality` lines under a day banner
    Text,
    /// One JSON document per day
    Json,
}

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Json,
    Pretty,
}

impl From<LogFormatArg> for gildedrose_observability::LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Json => Self::Json,
            LogFormatArg::Pretty => Self::Pretty,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "gildedrose")]
#[command(version)]
#[command(about = "Age the shop's stock day by day and print each day's listing", long_about = None)]
pub struct Cli {
    /// Number of days to list (day 0 is the opening stock)
    #[arg(short, long, env = "GILDED_ROSE_DAYS", default_value_t = 2)]
    pub days: u32,

    /// JSON stock file: an array of { "name", "sellIn", "quality" } records
    #[arg(short, long, env = "GILDED_ROSE_INVENTORY", value_name = "PATH")]
    pub inventory: Option<PathBuf>,

    /// Listing format
    #[arg(long, value_enum, default_value = "text")]
    pub format: ListingFormat,

    /// Log line format (logs go to stderr)
    #[arg(long, value_enum, env = "GILDED_ROSE_LOG_FORMAT", default_value = "json")]
    pub log_format: LogFormatArg,
}
