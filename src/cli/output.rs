//! Output formatting utilities

use console::style;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::core::{Comparison, Difference};

/// How the verdict is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable verdict, one difference per line
    Text,
    /// A single JSON object
    Json,
}

/// Everything one run reports
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    #[serde(flatten)]
    pub comparison: Comparison,

    /// Only present when differences were requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub differences: Option<&'a [Difference]>,
}

/// Render a report in the requested format, without a trailing newline
pub fn render(report: &Report<'_>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => serde_json::to_string_pretty(report).into_diagnostic(),
    }
}

fn render_text(report: &Report<'_>) -> String {
    let mut out = if report.comparison.equal {
        format!("{} {}", style("✓").green(), report.comparison.message)
    } else {
        format!("{} {}", style("✗").red(), report.comparison.message)
    };

    for difference in report.differences.unwrap_or_default() {
        out.push_str(&format!("\n  {} {}", style("-").dim(), difference));
    }
    out
}
