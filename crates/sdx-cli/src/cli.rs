//! CLI argument definitions for the SDX transformer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "sdx-transform",
    version,
    about = "SDX downstream transformer - Convert survey submissions to Tkn archives",
    long_about = "Convert survey-response submissions into the downstream\n\
                  collection format: Tkn data records, IDBR receipts, page\n\
                  images, and zipped delivery archives."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

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

    /// Allow respondent answer values in logs (redacted by default).
    #[arg(long = "log-answers", global = true)]
    pub log_answers: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build the delivery archive for a submission.
    Pack(PackArgs),

    /// Print the Tkn record lines for a submission.
    Tkn(TknArgs),

    /// List the field table for a survey instrument.
    Questions(QuestionsArgs),
}

#[derive(Parser)]
pub struct PackArgs {
    /// Path to the submission JSON document.
    #[arg(value_name = "SUBMISSION")]
    pub submission: PathBuf,

    /// Output path for the archive
    /// (default: <survey>_<sequence>.zip next to the submission).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Sequence number used in file names inside the archive.
    #[arg(long = "sequence-no", value_name = "N", default_value_t = 1000)]
    pub sequence_no: u32,
}

#[derive(Parser)]
pub struct TknArgs {
    /// Path to the submission JSON document.
    #[arg(value_name = "SUBMISSION")]
    pub submission: PathBuf,
}

#[derive(Parser)]
pub struct QuestionsArgs {
    /// Survey id.
    #[arg(long = "survey", default_value = "144")]
    pub survey_id: String,

    /// Collection instrument id.
    #[arg(long = "instrument", default_value = "0001")]
    pub instrument_id: String,
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
