//! CLI argument definitions for the patient record converter.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "trialrepo",
    version,
    about = "Convert patient JSON records to a DICOM-formatted spreadsheet",
    long_about = "Convert a folder of patient*.json records into one XLSX spreadsheet.\n\n\
                  Names are written as SURNAME^GIVEN, dates as YYYYMMDD and scan\n\
                  times as HHMMSS. Nested fields become dot-separated columns."
)]
pub struct Cli {
    #[command(flatten)]
    pub convert: ConvertArgs,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Allow patient-identifying values in trace logs.
    ///
    /// Patient names are redacted by default.
    #[arg(long = "log-data")]
    pub log_data: bool,
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Directory with input patient JSON files.
    #[arg(long = "in", value_name = "DIR")]
    pub in_dir: PathBuf,

    /// Output spreadsheet (*.xlsx) to write (default: <DIR>/data.xlsx).
    #[arg(long = "out", value_name = "FILE")]
    pub out_file: Option<PathBuf>,

    /// Aggregate and report without writing the spreadsheet.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
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
