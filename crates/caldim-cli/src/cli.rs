//! CLI argument definitions for the calendar generator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "caldim",
    version,
    about = "Calendar dimension generator - write a calendar table as SQL INSERT statements",
    long_about = "Generate one row per calendar date for a range of years and write them as a \
                  single batched SQL INSERT statement.\n\n\
                  Each row carries the weekday index (Sunday = 1), month, year, day of month, \
                  weekend and weekday flags, and a flag for recurring fixed-date public holidays."
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

    /// Prefix pretty and compact log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate the calendar INSERT statement for a range of years.
    Generate(GenerateArgs),

    /// List the recurring public holidays flagged in the output.
    Holidays(HolidaysArgs),
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// JSON config file with tableName, fromYear, toYear, output and layout keys.
    #[arg(long = "config", short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// First year to generate (inclusive).
    #[arg(long = "from-year", value_name = "YEAR", allow_negative_numbers = true)]
    pub from_year: Option<i32>,

    /// Last year to generate (inclusive).
    #[arg(long = "to-year", value_name = "YEAR", allow_negative_numbers = true)]
    pub to_year: Option<i32>,

    /// Target table name (default: Calendar).
    #[arg(long = "table-name", value_name = "NAME")]
    pub table_name: Option<String>,

    /// Output file (default: Calendar.sql in the current directory).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Statement layout (default: standard).
    ///
    /// `legacy` keeps a comma after the last row and quotes dates with `"`.
    #[arg(long = "layout", value_enum)]
    pub layout: Option<LayoutArg>,

    /// Print the statement to stdout instead of writing a file.
    #[arg(long = "stdout", conflicts_with = "dry_run")]
    pub stdout: bool,

    /// Generate and summarize without writing any output.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Skip the per-year summary table.
    #[arg(long = "no-summary")]
    pub no_summary: bool,
}

#[derive(Parser)]
pub struct HolidaysArgs {
    /// Print the holidays as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LayoutArg {
    Standard,
    Legacy,
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

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
