use std::fs;

use podscrape_core::{ImageRef, Pod, SearchResult};
use podscrape_engine::{ensure_output_dir, save_json, write_atomic, PersistError};
use pretty_assertions::assert_eq;
use serde_json::Value;
use tempfile::TempDir;

fn sample_result() -> SearchResult {
    SearchResult::pending("integral of x^2", "https://www.wolframalpha.com/input?i=integral%20of%20x%5E2")
        .with_pods(vec![Pod {
            title: "Indefinite integral".to_string(),
            content: vec!["∫ x² dx = x³/3 + constant".to_string()],
            images: vec![ImageRef {
                src: "https://example.com/i.gif".to_string(),
                alt: "∫x^2 dx".to_string(),
            }],
            formulas: vec!["∫x^2 dx".to_string()],
        }])
}

#[test]
fn creates_missing_output_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("out");
    assert!(!new_dir.exists());
    ensure_output_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn atomic_write_replaces_existing_file() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("results.json");

    let first = write_atomic(&target, b"[]").unwrap();
    assert_eq!(fs::read_to_string(&first).unwrap(), "[]");

    let second = write_atomic(&target, b"{}").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), "{}");
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 1, "temp file left behind");
}

#[test]
fn path_without_file_name_is_rejected() {
    let err = write_atomic(std::path::Path::new("/"), b"{}").unwrap_err();
    assert!(matches!(err, PersistError::NoFileName(_)));
}

#[test]
fn single_result_is_saved_as_an_indented_object() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("quadratic.json");

    let written = save_json(&path, &sample_result()).unwrap();
    let text = fs::read_to_string(&written).unwrap();

    assert!(text.starts_with("{\n  \"query\": \"integral of x^2\","));
    assert!(text.contains("∫ x² dx = x³/3 + constant"), "non-ASCII must not be escaped");
    assert!(text.contains("\"status\": \"success\""));
    assert!(text.contains("\"error\": null"));

    let parsed: SearchResult = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, sample_result());
}

#[test]
fn batch_is_saved_as_an_array_with_the_documented_fields() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("batch.json");
    let failed = SearchResult::pending("q", "u").failed("Network error: timeout");
    let batch = vec![sample_result(), failed];

    save_json(&path, &batch).unwrap();
    let value: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();

    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    let keys: Vec<_> = entries[0].as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys.len(), 5);
    for key in ["query", "url", "results", "status", "error"] {
        assert!(keys.iter().any(|k| k == key), "missing {key}");
    }
    let pod = entries[0]["results"][0].as_object().unwrap();
    for key in ["title", "content", "images", "formulas"] {
        assert!(pod.contains_key(key), "missing pod field {key}");
    }
    assert_eq!(entries[0]["results"][0]["images"][0]["alt"], "∫x^2 dx");
    assert_eq!(entries[1]["status"], "error");
    assert_eq!(entries[1]["error"], "Network error: timeout");
    assert_eq!(entries[1]["results"], Value::Array(Vec::new()));
}

#[test]
fn writing_into_a_file_path_fails_cleanly() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("not_a_dir");
    fs::write(&blocker, "x").unwrap();

    let result = save_json(&blocker.join("results.json"), &sample_result());
    assert!(result.is_err());
    assert_eq!(fs::read_to_string(&blocker).unwrap(), "x");
}
