//! Comparison entry points
//!
//! Byte buffers and files go through the same pipeline: decode both sides
//! into [`Documents`], then check them with [`documents_equal`].

use std::path::Path;

use serde::Serialize;

use crate::core::equality::documents_equal;
use crate::core::error::{CompareError, Side};
use crate::core::value::Documents;
use crate::yaml::decode_documents;

/// Message reported when both inputs are equal
pub const EQUAL_MESSAGE: &str = "YAML content is equal";

/// Message reported when the inputs differ
pub const NOT_EQUAL_MESSAGE: &str = "YAML content is NOT equal";

/// Verdict of one comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Comparison {
    pub equal: bool,
    pub message: &'static str,
}

impl Comparison {
    pub fn equal() -> Self {
        Self {
            equal: true,
            message: EQUAL_MESSAGE,
        }
    }

    pub fn not_equal() -> Self {
        Self {
            equal: false,
            message: NOT_EQUAL_MESSAGE,
        }
    }

    fn from_bool(equal: bool) -> Self {
        if equal {
            Self::equal()
        } else {
            Self::not_equal()
        }
    }
}

/// Compare two YAML buffers for structural equality
///
/// Both streams are decoded fully before comparing; key order, comments and
/// formatting do not matter, document order does. Two zero-length buffers
/// are equal without being decoded.
pub fn compare(first: &[u8], second: &[u8]) -> Result<Comparison, CompareError> {
    compare_sources(
        (first, Side::First.source_label()),
        (second, Side::Second.source_label()),
    )
}

/// Compare two YAML files for structural equality
///
/// Both files are read before anything is decoded, so a missing second file
/// is reported even when the first one is malformed.
pub fn compare_files(
    first: impl AsRef<Path>,
    second: impl AsRef<Path>,
) -> Result<Comparison, CompareError> {
    let first = first.as_ref();
    let second = second.as_ref();
    let first_content = read_input(first)?;
    let second_content = read_input(second)?;

    let first_name = first.display().to_string();
    let second_name = second.display().to_string();
    compare_sources(
        (&first_content, &first_name),
        (&second_content, &second_name),
    )
}

/// Compare two already decoded streams
pub fn compare_documents(first: &Documents, second: &Documents) -> Comparison {
    Comparison::from_bool(documents_equal(first, second))
}

/// Decode both sides, or `None` when both are empty
///
/// Shared with the difference explainer so both agree on what was compared.
pub(crate) fn decode_pair(
    (first, first_name): (&[u8], &str),
    (second, second_name): (&[u8], &str),
) -> Result<Option<(Documents, Documents)>, CompareError> {
    if first.is_empty() && second.is_empty() {
        tracing::debug!("both inputs are empty, skipping decode");
        return Ok(None);
    }

    let first_docs = decode_side(first, first_name, Side::First)?;
    let second_docs = decode_side(second, second_name, Side::Second)?;
    tracing::debug!(
        first = first_docs.len(),
        second = second_docs.len(),
        "decoded documents"
    );
    Ok(Some((first_docs, second_docs)))
}

fn compare_sources(
    first: (&[u8], &str),
    second: (&[u8], &str),
) -> Result<Comparison, CompareError> {
    let comparison = match decode_pair(first, second)? {
        None => Comparison::equal(),
        Some((a, b)) => compare_documents(&a, &b),
    };
    tracing::debug!(equal = comparison.equal, "{}", comparison.message);
    Ok(comparison)
}

fn decode_side(content: &[u8], name: &str, side: Side) -> Result<Documents, CompareError> {
    decode_documents(content, name).map_err(|source| CompareError::Parse { side, source })
}

pub(crate) fn read_input(path: &Path) -> Result<Vec<u8>, CompareError> {
    std::fs::read(path).map_err(|source| CompareError::Io {
        path: path.to_path_buf(),
        source,
    })
}
