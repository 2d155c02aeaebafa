//! Core module - structural values, equality and comparison

pub mod compare;
pub mod diff;
pub mod equality;
pub mod error;
pub mod value;

pub use compare::{
    compare, compare_documents, compare_files, Comparison, EQUAL_MESSAGE, NOT_EQUAL_MESSAGE,
};
pub use diff::{explain, explain_bytes, explain_files, Difference, Path, Segment};
pub use equality::{documents_equal, values_equal};
pub use error::{CompareError, Side};
pub use value::{Documents, Mapping, Value};
