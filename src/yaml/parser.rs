//! YAML stream decoding

use serde::Deserialize;

use crate::core::value::{Documents, Value};
use crate::yaml::diagnostics::YamlSyntaxError;

/// Decode every document of a YAML stream
///
/// `name` labels the input in diagnostics (a file path, or a side such as
/// `<first>`). An empty buffer, or one holding only comments, decodes to zero
/// documents. Any failure aborts the whole stream; no partial result is
/// returned.
pub fn decode_documents(content: &[u8], name: &str) -> Result<Documents, YamlSyntaxError> {
    if content.is_empty() {
        return Ok(Documents::default());
    }

    let text = std::str::from_utf8(content)
        .map_err(|e| YamlSyntaxError::from_utf8_error(&e, content, name))?;

    // The document iterator reports a single null document for a stream
    // without any document in it
    if is_blank_stream(text) {
        return Ok(Documents::default());
    }

    let mut documents = Vec::new();
    for document in serde_yml::Deserializer::from_str(text) {
        let mut value = serde_yml::Value::deserialize(document)
            .map_err(|e| YamlSyntaxError::from_serde_error(&e, text, name))?;
        value
            .apply_merge()
            .map_err(|e| YamlSyntaxError::from_serde_error(&e, text, name))?;
        let value = Value::from(value);
        if let Some(key) = value.find_duplicate_key() {
            return Err(YamlSyntaxError::duplicate_key(key, text, name));
        }
        documents.push(value);
    }

    tracing::trace!(source = name, documents = documents.len(), "decoded YAML stream");
    Ok(Documents::new(documents))
}

/// True when the stream holds nothing but whitespace, comments and
/// document end markers
fn is_blank_stream(text: &str) -> bool {
    text.trim_start_matches('\u{feff}').lines().all(|line| {
        let line = line.trim_end();
        // A document end marker only counts at the start of a line
        let line = match line.strip_prefix("...") {
            Some(rest) if rest.is_empty() || rest.starts_with(char::is_whitespace) => rest,
            _ => line,
        };
        let line = line.trim_start();
        line.is_empty() || line.starts_with('#')
    })
}
