use std::path::PathBuf;

use clap::builder::{BoolishValueParser, RangedU64ValueParser};
use clap::{Parser, Subcommand, ValueEnum};

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "pipeline-helper")]
#[command(author, version, about = "Turn build and test artifacts into pass/fail feedback")]
#[command(long_about = "Runs one checker against a submission and writes its verdict \
    as TEST-<name>.json into the output directory.\n\n\
    Exit codes:\n  \
    0 - Check completed (passed or failed)\n  \
    1 - The checker could not inspect its input\n  \
    2 - Configuration, usage or output error")]
pub struct Cli {
    /// Directory receiving the result files (overrides config)
    #[arg(short, long, global = true)]
    pub output_directory: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long, global = true, conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look for exactly one class declaring a public static main method
    MainMethod(MainMethodArgs),

    /// Verify that every listed file exists, is readable and is not blank
    FileExists(FileExistsArgs),

    /// Report source lines longer than a limit
    LineLength(LineLengthArgs),

    /// Evaluate one test section of a `DejaGnu` log
    Dejagnu(DejagnuArgs),

    /// Record a verdict supplied by the caller
    SimpleMessage(SimpleMessageArgs),
}

#[derive(Parser, Debug)]
pub struct MainMethodArgs {
    /// Root of the compiled classes
    pub directory: PathBuf,
}

#[derive(Parser, Debug)]
pub struct FileExistsArgs {
    /// Files that must be present
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct LineLengthArgs {
    /// Longest allowed line, in characters
    #[arg(value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub max_length: usize,

    /// Directory to scan
    pub directory: PathBuf,

    /// File extension to scan, without the dot (overrides config)
    pub extension: Option<String>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,
}

#[derive(Parser, Debug)]
pub struct DejagnuArgs {
    /// Name of the test section to evaluate
    pub test_name: String,

    /// Log file produced by runtest
    pub log_file: PathBuf,
}

#[derive(Parser, Debug)]
pub struct SimpleMessageArgs {
    /// Name of the result
    pub test_name: String,

    /// Verdict (true/false, yes/no, 1/0, on/off)
    #[arg(action = clap::ArgAction::Set, value_parser = BoolishValueParser::new())]
    pub successful: bool,

    /// Feedback message
    pub message: String,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
