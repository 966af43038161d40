//! CLI argument definitions for harmona-scan.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "harmona-scan",
    version,
    about = "Profile genomic and clinical data sources",
    long_about = "Profile heterogeneous genomic/clinical data files and analyze\n\
                  cross-source relationships.\n\n\
                  Supports delimited text (TSV/CSV/TXT), JSON, and XML inputs;\n\
                  writes JSON, Markdown, and TSV reports."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Profile every file under a data directory and run cross-source analysis.
    All(AllArgs),

    /// Profile a single file.
    File(FileArgs),

    /// Run cross-source analysis only (profiles are computed, per-file
    /// reports are not written).
    Cross(CrossArgs),
}

#[derive(Parser)]
pub struct AllArgs {
    /// Data directory containing one subdirectory per source.
    #[arg(value_name = "DATA_DIR")]
    pub data_dir: PathBuf,

    /// Output directory for reports (default: <DATA_DIR>/../output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Cap the number of data rows read from each tabular file.
    #[arg(long = "sample", value_name = "ROWS")]
    pub sample: Option<usize>,
}

#[derive(Parser)]
pub struct FileArgs {
    /// Path to the file to profile.
    #[arg(value_name = "FILE")]
    pub path: PathBuf,

    /// Output directory for reports (default: ./output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Cap the number of data rows read from a tabular file.
    #[arg(long = "sample", value_name = "ROWS")]
    pub sample: Option<usize>,
}

#[derive(Parser)]
pub struct CrossArgs {
    /// Data directory containing one subdirectory per source.
    #[arg(value_name = "DATA_DIR")]
    pub data_dir: PathBuf,

    /// Output directory for the cross-source report (default: <DATA_DIR>/../output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Cap the number of data rows read from each tabular file.
    #[arg(long = "sample", value_name = "ROWS")]
    pub sample: Option<usize>,

    /// Minimum field-name similarity for mapping suggestions.
    #[arg(long = "similarity-threshold", value_name = "RATIO")]
    pub similarity_threshold: Option<f64>,
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
