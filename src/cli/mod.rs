//! CLI module - argument parsing, output and exit codes

pub mod args;
pub mod logging;
pub mod output;
pub mod run;

pub use args::Cli;
pub use output::OutputFormat;
pub use run::{run, EXIT_EQUAL, EXIT_ERROR, EXIT_NOT_EQUAL};
