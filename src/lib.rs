//! yamlequal: semantic equality for YAML
//!
//! Two YAML inputs are equal when they decode to the same structure,
//! regardless of key order, comments, quoting or flow/block style.
//! Multi-document streams are compared document by document, in order.
//!
//! ```
//! let verdict = yamlequal::compare(b"a: 1\nb: 2\n", b"{b: 2, a: 1}").unwrap();
//! assert!(verdict.equal);
//! ```

pub mod cli;
pub mod core;
pub mod yaml;

pub use crate::core::{
    compare, compare_documents, compare_files, explain, CompareError, Comparison, Difference,
    Documents, Side, Value,
};
pub use crate::yaml::{decode_documents, YamlSyntaxError};
