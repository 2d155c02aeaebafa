//! Explaining why two YAML streams differ
//!
//! [`explain`] walks both streams in lock-step and reports every place where
//! they diverge. It agrees with [`documents_equal`]: the list is empty exactly
//! when the streams are equal.
//!
//! [`documents_equal`]: crate::core::equality::documents_equal

use std::fmt;

use serde::{Serialize, Serializer};

use crate::core::compare::{decode_pair, read_input};
use crate::core::equality::values_equal;
use crate::core::error::{CompareError, Side};
use crate::core::value::{Documents, Mapping, Value};

/// One step from a document root towards a nested value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Key(String),
    Index(usize),
}

/// Location of a value: the document index plus the steps inside it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    pub document: usize,
    pub segments: Vec<Segment>,
}

impl Path {
    pub fn document(document: usize) -> Self {
        Self {
            document,
            segments: Vec::new(),
        }
    }

    fn child(&self, segment: Segment) -> Self {
        let mut path = self.clone();
        path.segments.push(segment);
        path
    }

    fn key(&self, key: &Value) -> Self {
        let key = match key {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        self.child(Segment::Key(key))
    }
}

/// Renders as `doc[0].server.ports[1]`; keys that are not plain words are
/// quoted, as in `doc[0]["a.b"]`
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "doc[{}]", self.document)?;
        for segment in &self.segments {
            match segment {
                Segment::Index(i) => write!(f, "[{}]", i)?,
                Segment::Key(k) if is_plain_key(k) => write!(f, ".{}", k)?,
                Segment::Key(k) => write!(f, "[{:?}]", k)?,
            }
        }
        Ok(())
    }
}

impl Serialize for Path {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

fn is_plain_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// A single divergence between the two streams
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Difference {
    /// The streams hold a different number of documents
    DocumentCount { first: usize, second: usize },
    /// Present in the first stream only
    OnlyInFirst { path: Path },
    /// Present in the second stream only
    OnlyInSecond { path: Path },
    /// Present on both sides with different values, rendered in flow style
    Changed {
        path: Path,
        first: String,
        second: String,
    },
}

impl Difference {
    /// Which side holds the value the difference is about, if only one does
    pub fn side(&self) -> Option<Side> {
        match self {
            Difference::OnlyInFirst { .. } => Some(Side::First),
            Difference::OnlyInSecond { .. } => Some(Side::Second),
            _ => None,
        }
    }
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difference::DocumentCount { first, second } => {
                write!(f, "document count: {} != {}", first, second)
            }
            Difference::OnlyInFirst { path } => write!(f, "{}: only in first", path),
            Difference::OnlyInSecond { path } => write!(f, "{}: only in second", path),
            Difference::Changed {
                path,
                first,
                second,
            } => write!(f, "{}: {} != {}", path, first, second),
        }
    }
}

/// List every difference between two decoded streams
pub fn explain(first: &Documents, second: &Documents) -> Vec<Difference> {
    let mut out = Vec::new();

    if first.len() != second.len() {
        out.push(Difference::DocumentCount {
            first: first.len(),
            second: second.len(),
        });
    }

    for (index, (a, b)) in first.iter().zip(second.iter()).enumerate() {
        diff_values(&Path::document(index), a, b, &mut out);
    }
    for index in second.len()..first.len() {
        out.push(Difference::OnlyInFirst {
            path: Path::document(index),
        });
    }
    for index in first.len()..second.len() {
        out.push(Difference::OnlyInSecond {
            path: Path::document(index),
        });
    }

    out
}

/// Decode two buffers and explain how they differ
///
/// Uses the same decoding rules as [`compare`](crate::core::compare::compare),
/// including treating two empty buffers as equal.
pub fn explain_bytes(first: &[u8], second: &[u8]) -> Result<Vec<Difference>, CompareError> {
    let decoded = decode_pair(
        (first, Side::First.source_label()),
        (second, Side::Second.source_label()),
    )?;
    Ok(decoded.map(|(a, b)| explain(&a, &b)).unwrap_or_default())
}

/// Read two files and explain how they differ
pub fn explain_files(
    first: impl AsRef<std::path::Path>,
    second: impl AsRef<std::path::Path>,
) -> Result<Vec<Difference>, CompareError> {
    let first = first.as_ref();
    let second = second.as_ref();
    let first_content = read_input(first)?;
    let second_content = read_input(second)?;

    let first_name = first.display().to_string();
    let second_name = second.display().to_string();
    let decoded = decode_pair(
        (&first_content, &first_name),
        (&second_content, &second_name),
    )?;
    Ok(decoded.map(|(a, b)| explain(&a, &b)).unwrap_or_default())
}

fn diff_values(path: &Path, first: &Value, second: &Value, out: &mut Vec<Difference>) {
    match (first, second) {
        (Value::Sequence(a), Value::Sequence(b)) => diff_sequences(path, a, b, out),
        (Value::Mapping(a), Value::Mapping(b)) => diff_mappings(path, a, b, out),
        _ if values_equal(first, second) => {}
        _ => out.push(Difference::Changed {
            path: path.clone(),
            first: first.to_string(),
            second: second.to_string(),
        }),
    }
}

fn diff_sequences(path: &Path, first: &[Value], second: &[Value], out: &mut Vec<Difference>) {
    for (i, (a, b)) in first.iter().zip(second).enumerate() {
        diff_values(&path.child(Segment::Index(i)), a, b, out);
    }
    for i in second.len()..first.len() {
        out.push(Difference::OnlyInFirst {
            path: path.child(Segment::Index(i)),
        });
    }
    for i in first.len()..second.len() {
        out.push(Difference::OnlyInSecond {
            path: path.child(Segment::Index(i)),
        });
    }
}

fn diff_mappings(path: &Path, first: &Mapping, second: &Mapping, out: &mut Vec<Difference>) {
    for (key, a) in first.iter() {
        match second.get(key) {
            Some(b) => diff_values(&path.key(key), a, b, out),
            None => out.push(Difference::OnlyInFirst {
                path: path.key(key),
            }),
        }
    }
    for key in second.keys().filter(|k| !first.contains_key(k)) {
        out.push(Difference::OnlyInSecond {
            path: path.key(key),
        });
    }
}
