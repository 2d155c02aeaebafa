//! Library-level comparison tests

mod common;

use common::{setup_pair, write_yaml};
use tempfile::TempDir;
use yamlequal::core::{explain_bytes, EQUAL_MESSAGE, NOT_EQUAL_MESSAGE};
use yamlequal::{compare, compare_files, CompareError, Comparison, Side};

const INVALID: &[u8] = b":\n  :\n    - :\n      invalid: [";
const VALID: &[u8] = b"foo: bar\n";

// ============================================================================
// Buffer Comparison Tests
// ============================================================================

#[test]
fn test_empty_content_equal() {
    let result = compare(b"", b"").unwrap();
    assert!(result.equal);
    assert_eq!(result.message, EQUAL_MESSAGE);
}

#[test]
fn test_key_order_is_irrelevant() {
    assert!(compare(b"a: 1\nb: 2\n", b"b: 2\na: 1\n").unwrap().equal);
}

#[test]
fn test_multi_doc_equal() {
    let yaml = b"foo: bar\n---\nbaz: qux\n";
    assert_eq!(compare(yaml, yaml).unwrap(), Comparison::equal());
}

#[test]
fn test_multi_doc_different_second_doc() {
    let result = compare(
        b"foo: bar\n---\nbaz: qux\n",
        b"foo: bar\n---\ndifferent: value\n",
    )
    .unwrap();
    assert!(!result.equal);
    assert_eq!(result.message, NOT_EQUAL_MESSAGE);
}

#[test]
fn test_multi_doc_different_count() {
    let result = compare(b"foo: bar\n---\nbaz: qux\n", b"foo: bar\n").unwrap();
    assert!(!result.equal);
}

#[test]
fn test_document_order_matters() {
    let result = compare(b"a: 1\n---\nb: 2\n", b"b: 2\n---\na: 1\n").unwrap();
    assert!(!result.equal);
}

#[test]
fn test_invalid_first_yaml() {
    let err = compare(INVALID, VALID).unwrap_err();
    assert!(err.to_string().contains("first YAML"), "got: {err}");
    assert_eq!(err.side(), Some(Side::First));
}

#[test]
fn test_invalid_second_yaml() {
    let err = compare(VALID, INVALID).unwrap_err();
    assert!(err.to_string().contains("second YAML"), "got: {err}");
    assert_eq!(err.side(), Some(Side::Second));
}

#[test]
fn test_repeated_calls_are_identical() {
    let a = b"list: [3, 2, 1]\nmap: {z: 1, a: 2}\n";
    let b = b"map: {a: 2, z: 1}\nlist: [3, 2, 1]\n";
    let first = compare(a, b).unwrap();
    for _ in 0..5 {
        assert_eq!(compare(a, b).unwrap(), first);
    }
}

#[test]
fn test_explain_bytes_reports_parse_errors_like_compare() {
    let err = explain_bytes(VALID, INVALID).unwrap_err();
    assert_eq!(err.side(), Some(Side::Second));
}

// ============================================================================
// File Comparison Tests
// ============================================================================

#[test]
fn test_compare_files_equal() {
    let (_tmp, a, b) = setup_pair("x: 1\ny: [a, b]\n", "y: [a, b]\nx: 1\n");
    assert!(compare_files(&a, &b).unwrap().equal);
}

#[test]
fn test_compare_empty_files() {
    let (_tmp, a, b) = setup_pair("", "");
    assert_eq!(compare_files(&a, &b).unwrap(), Comparison::equal());
}

#[test]
fn test_first_file_missing() {
    let err = compare_files("nonexistent1.yaml", "nonexistent2.yaml").unwrap_err();
    assert!(matches!(err, CompareError::Io { .. }));
    assert!(err.to_string().contains("nonexistent1.yaml"), "got: {err}");
}

#[test]
fn test_second_file_missing() {
    let tmp = TempDir::new().unwrap();
    let present = write_yaml(&tmp, "present.yaml", "foo: bar\n");

    let err = compare_files(&present, "nonexistent2.yaml").unwrap_err();
    assert!(err.to_string().contains("nonexistent2.yaml"), "got: {err}");
}

#[test]
fn test_second_file_missing_reported_before_first_parse_error() {
    let tmp = TempDir::new().unwrap();
    let broken = write_yaml(&tmp, "broken.yaml", "a: [\n");

    let err = compare_files(&broken, tmp.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, CompareError::Io { .. }));
}

#[test]
fn test_file_parse_error_is_labelled_with_path() {
    let (_tmp, a, b) = setup_pair("ok: true\n", "broken: [\n");

    match compare_files(&a, &b).unwrap_err() {
        CompareError::Parse { side, source } => {
            assert_eq!(side, Side::Second);
            assert!(source.source_name().ends_with("second.yaml"));
        }
        other => panic!("unexpected error: {other}"),
    }
}
