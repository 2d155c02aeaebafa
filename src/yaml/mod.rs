//! YAML decoding and syntax diagnostics

pub mod diagnostics;
pub mod parser;

pub use diagnostics::YamlSyntaxError;
pub use parser::decode_documents;
