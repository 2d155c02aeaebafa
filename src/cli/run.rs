//! `yamlequal <FIRST> <SECOND>` - compare two YAML files

use miette::Result;
use std::process::ExitCode;

use crate::cli::output::{render, Report};
use crate::cli::Cli;
use crate::core::{compare_files, explain_files, Comparison};

/// Exit code when the files are equal
pub const EXIT_EQUAL: u8 = 0;
/// Exit code when the files differ
pub const EXIT_NOT_EQUAL: u8 = 1;
/// Exit code when a file cannot be read or parsed
pub const EXIT_ERROR: u8 = 2;

pub fn run(cli: &Cli) -> Result<ExitCode> {
    tracing::info!(
        first = %cli.first.display(),
        second = %cli.second.display(),
        "comparing"
    );

    let (comparison, differences) = if cli.explain {
        // Explaining decodes both files anyway; an empty list means equal
        let differences = explain_files(&cli.first, &cli.second)?;
        let comparison = if differences.is_empty() {
            Comparison::equal()
        } else {
            Comparison::not_equal()
        };
        (comparison, Some(differences))
    } else {
        (compare_files(&cli.first, &cli.second)?, None)
    };

    if !cli.quiet {
        let report = Report {
            comparison,
            differences: differences.as_deref(),
        };
        println!("{}", render(&report, cli.format)?);
    }

    Ok(ExitCode::from(exit_code(&comparison)))
}

pub fn exit_code(comparison: &Comparison) -> u8 {
    if comparison.equal {
        EXIT_EQUAL
    } else {
        EXIT_NOT_EQUAL
    }
}
