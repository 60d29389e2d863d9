use std::fs;
use std::io::Write;

use flate2::write::GzEncoder;
use flate2::Compression;
use tempfile::TempDir;
use yamlnav::file::loader::{load_yaml_file, parse_content};

#[test]
fn test_load_plain_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.yaml");
    fs::write(&path, "a: 1\nb: [2, 3]\n").unwrap();

    let file = load_yaml_file(&path).unwrap();
    assert_eq!(file.documents().len(), 1);
    assert_eq!(file.source(), "a: 1\nb: [2, 3]\n");
}

#[test]
fn test_load_gzipped_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.yaml.gz");
    let mut encoder = GzEncoder::new(fs::File::create(&path).unwrap(), Compression::default());
    encoder.write_all(b"a: 1\n---\na: 2\n").unwrap();
    encoder.finish().unwrap();

    let file = load_yaml_file(&path).unwrap();
    assert_eq!(file.documents().len(), 2);
}

#[test]
fn test_crlf_is_normalized() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dos.yaml");
    fs::write(&path, "a: 1\r\nb: 2\r\n").unwrap();

    let file = load_yaml_file(&path).unwrap();
    assert_eq!(file.source(), "a: 1\nb: 2\n");
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = load_yaml_file(dir.path().join("nope.yaml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read"));
}

#[test]
fn test_empty_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.yaml");
    fs::write(&path, "").unwrap();

    let err = load_yaml_file(&path).unwrap_err();
    assert!(err.to_string().contains("input cannot be empty"));
}

#[test]
fn test_parse_content_reports_invalid_yaml() {
    let err = parse_content("a: {b: 1\n").unwrap_err();
    assert!(format!("{err:#}").contains("invalid YAML"));
}
