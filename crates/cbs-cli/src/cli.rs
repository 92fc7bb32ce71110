//! CLI argument definitions for the dataset generator.

use std::path::PathBuf;

use cbs_generate::{DEFAULT_NULL_RATE, DEFAULT_OUTLIER_RATE, DEFAULT_RECORD_COUNT, DEFAULT_SEED};
use cbs_output::DEFAULT_OUTPUT_FILE;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "clinical-billing-synth",
    version,
    about = "Generate simulated clinical and billing data for analytics practice",
    long_about = "Generate a synthetic table of hospital visits and billing records.\n\n\
                  Records are drawn from per-department profiles with a seeded generator,\n\
                  then seeded with missing values and charge outliers for data-cleaning practice."
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

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate a dataset and write it to disk.
    Generate(GenerateArgs),

    /// List department profiles used for generation.
    Departments,
}

#[derive(Parser, Debug, Clone)]
pub struct GenerateArgs {
    /// Seed for the random generator. Equal seeds give identical output.
    #[arg(long = "seed", default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of records to generate.
    #[arg(short = 'n', long = "records", default_value_t = DEFAULT_RECORD_COUNT)]
    pub records: usize,

    /// Output file path.
    #[arg(short = 'o', long = "output", value_name = "PATH", default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Output format (default: inferred from the output extension, else csv).
    #[arg(long = "format", value_enum)]
    pub format: Option<OutputFormatArg>,

    /// Last day of the two-year visit window, as YYYY-MM-DD (default: today).
    ///
    /// Pin this together with --seed to reproduce a dataset on a later day.
    #[arg(long = "reference-date", value_name = "DATE")]
    pub reference_date: Option<NaiveDate>,

    /// Probability of blanking each of diagnosis, visit_reason, payer_name, insurance_id.
    #[arg(long = "null-rate", default_value_t = DEFAULT_NULL_RATE)]
    pub null_rate: f64,

    /// Probability of inflating a record's charge tenfold.
    #[arg(long = "outlier-rate", default_value_t = DEFAULT_OUTLIER_RATE)]
    pub outlier_rate: f64,

    /// Generate and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormatArg {
    Csv,
    Jsonl,
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
