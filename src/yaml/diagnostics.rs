//! YAML syntax errors rendered as miette diagnostics

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::core::value::Value;

/// A YAML input that could not be decoded
///
/// Carries the parser message together with the source text so the
/// report can point at the offending line.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(yamlequal::yaml::syntax))]
pub struct YamlSyntaxError {
    pub message: String,

    /// 1-based line of the failure, when the parser reports one
    pub line: Option<usize>,

    /// 1-based column of the failure, when the parser reports one
    pub column: Option<usize>,

    #[source_code]
    src: NamedSource<String>,

    #[label("here")]
    span: Option<SourceSpan>,
}

impl YamlSyntaxError {
    /// Build from a serde_yml error, keeping its position if it has one
    pub fn from_serde_error(err: &serde_yml::Error, content: &str, name: &str) -> Self {
        let location = err.location();
        let span = location
            .as_ref()
            .map(|loc| label_span(content, loc.index()));

        Self {
            message: err.to_string(),
            line: location.as_ref().map(|loc| loc.line()),
            column: location.as_ref().map(|loc| loc.column()),
            src: NamedSource::new(name, content.to_string()),
            span,
        }
    }

    /// Build from a buffer that is not valid UTF-8
    pub fn from_utf8_error(err: &std::str::Utf8Error, content: &[u8], name: &str) -> Self {
        let text = String::from_utf8_lossy(content).into_owned();
        let valid = &content[..err.valid_up_to()];
        let line = valid.iter().filter(|&&b| b == b'\n').count() + 1;
        let column = valid.iter().rev().take_while(|&&b| b != b'\n').count() + 1;
        // Lossy decoding keeps the valid prefix intact, so the offset carries over
        let span = label_span(&text, err.valid_up_to());

        Self {
            message: format!("invalid UTF-8: {}", err),
            line: Some(line),
            column: Some(column),
            src: NamedSource::new(name, text),
            span: Some(span),
        }
    }

    /// A mapping whose keys collide once tags are dropped, such as
    /// `!a x` next to `!b x`
    pub fn duplicate_key(key: &Value, content: &str, name: &str) -> Self {
        Self {
            message: format!("duplicate mapping key {} (keys differ only by tag)", key),
            line: None,
            column: None,
            src: NamedSource::new(name, content.to_string()),
            span: None,
        }
    }

    /// Name of the source the error was reported against
    pub fn source_name(&self) -> &str {
        self.src.name()
    }
}

/// One-character span at `offset`, clamped to the source length
fn label_span(content: &str, offset: usize) -> SourceSpan {
    let offset = offset.min(content.len());
    let len = usize::from(offset < content.len());
    (offset, len).into()
}
