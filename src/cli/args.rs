//! Command-line arguments

use clap::Parser;
use std::path::PathBuf;

use crate::cli::output::OutputFormat;

/// Check whether two YAML files are semantically equal
///
/// Key order, comments, quoting and flow/block style are ignored; document
/// order in multi-document files is not. Exits 0 when equal, 1 when not
/// equal and 2 on error.
#[derive(Parser, Debug)]
#[command(name = "yamlequal", version)]
pub struct Cli {
    /// First YAML file
    pub first: PathBuf,

    /// Second YAML file
    pub second: PathBuf,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text, env = "YAMLEQUAL_FORMAT")]
    pub format: OutputFormat,

    /// List where the files differ
    #[arg(long, short = 'e', env = "YAMLEQUAL_EXPLAIN")]
    pub explain: bool,

    /// Print nothing; report the verdict through the exit code only
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}
