//! CLI argument definitions for the AECC grouper.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "aecc-grouper",
    version,
    about = "AECC grouper - classify emergency department episodes",
    long_about = "Classify emergency department episodes into AECC end classes.\n\n\
                  Implements the published grouping algorithm: pre-ECDG processing,\n\
                  diagnosis group assignment, complexity scoring and final class\n\
                  allocation against a reference table pack."
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

    /// Allow episode-level values (identifiers, dates) in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Group an episode extract and write the graded output.
    Group(GroupArgs),

    /// List the fixed pre-ECDG and error classes.
    Classes,

    /// Load a reference pack and report defects.
    Check(CheckArgs),
}

#[derive(Parser)]
pub struct GroupArgs {
    /// Episode extract CSV to read.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Graded output CSV to write.
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Reference pack directory (default: AECC_TABLES_DIR or the bundled
    /// sample tables).
    #[arg(long = "tables-dir", value_name = "DIR")]
    pub tables_dir: Option<PathBuf>,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Reference pack directory (default: AECC_TABLES_DIR or the bundled
    /// sample tables).
    #[arg(long = "tables-dir", value_name = "DIR")]
    pub tables_dir: Option<PathBuf>,
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
