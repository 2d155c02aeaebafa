//! Errors raised while comparing YAML inputs

use std::fmt;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::yaml::YamlSyntaxError;

/// Which of the two compared inputs something refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    First,
    Second,
}

impl Side {
    /// Label used for in-memory inputs in diagnostics
    pub fn source_label(self) -> &'static str {
        match self {
            Side::First => "<first>",
            Side::Second => "<second>",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::First => write!(f, "first"),
            Side::Second => write!(f, "second"),
        }
    }
}

/// Failure to compare two inputs
///
/// A "not equal" verdict is never an error.
#[derive(Debug, Error, Diagnostic)]
pub enum CompareError {
    #[error("error reading file {:?}: {source}", .path.display().to_string())]
    #[diagnostic(
        code(yamlequal::io),
        help("check that the file exists and is readable")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error parsing {side} YAML content: {source}")]
    #[diagnostic(code(yamlequal::parse))]
    Parse {
        side: Side,
        #[source]
        #[diagnostic_source]
        source: YamlSyntaxError,
    },
}

impl CompareError {
    /// The input the error belongs to, if it is a parse error
    pub fn side(&self) -> Option<Side> {
        match self {
            CompareError::Parse { side, .. } => Some(*side),
            CompareError::Io { .. } => None,
        }
    }
}
