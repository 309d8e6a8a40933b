//! Integration tests for isatab
//!
//! These tests run whole datasets from `tests/data` through reading,
//! validation, export and writing.

use std::fs;
use std::path::{Path, PathBuf};

use isatab::dot::write_investigation_dot;
use isatab::prelude::*;
use tempfile::{tempdir, TempDir};

// ============================================================================
// Helper Functions
// ============================================================================

const FILES: &[&str] = &["i_minimal.txt", "s_minimal.txt", "a_minimal.txt"];

fn data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("data")
}

/// Copy the minimal dataset into a fresh directory
fn stage_dataset() -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    for name in FILES {
        fs::copy(data_dir().join(name), dir.path().join(name)).unwrap();
    }
    let path = dir.path().join("i_minimal.txt");
    (dir, path)
}

// ============================================================================
// Dataset Round Trip
// ============================================================================

/// Test that an unquoted rewrite reproduces every file byte for byte
#[test]
fn test_dataset_rewrite_is_identical() {
    let (_input, path) = stage_dataset();
    let output = tempdir().unwrap();

    let dataset = IsaDataset::open(&path).unwrap();
    dataset
        .write_to(output.path(), &WriterConfig::default())
        .unwrap();

    for name in FILES {
        let original = fs::read(data_dir().join(name)).unwrap();
        let written = fs::read(output.path().join(name)).unwrap();
        assert_eq!(original, written, "{name} changed on rewrite");
    }
}

/// Test that a quoted CRLF rewrite reads back into the same graphs
#[test]
fn test_quoted_rewrite_reads_back() {
    let (_input, path) = stage_dataset();
    let first = tempdir().unwrap();
    let second = tempdir().unwrap();

    let dataset = IsaDataset::open(&path).unwrap();
    let config = WriterConfig {
        quote: Some(b'\''),
        line_terminator: LineTerminator::CrLf,
    };
    dataset.write_to(first.path(), &config).unwrap();

    let reader_config = ReaderConfig {
        quote: b'\'',
        ..ReaderConfig::default()
    };
    let quoted =
        IsaDataset::open_with_config(first.path().join("i_minimal.txt"), reader_config).unwrap();
    assert_eq!(quoted.studies, dataset.studies);

    // Back to plain output from the quoted copy
    quoted
        .write_to(second.path(), &WriterConfig::default())
        .unwrap();
    let assay = fs::read_to_string(second.path().join("a_minimal.txt")).unwrap();
    assert_eq!(
        assay,
        fs::read_to_string(data_dir().join("a_minimal.txt")).unwrap()
    );
}

/// Test that a graph survives the JSON dump
#[test]
fn test_graph_json_round_trip() {
    let table = TableReader::new(FileType::Assay)
        .read_path(data_dir().join("a_minimal.txt"))
        .unwrap();

    let json = table.graph.to_json().unwrap();
    let restored = Graph::from_json(&json).unwrap();
    assert_eq!(restored, table.graph);

    let text = TableWriter::default()
        .graph_to_string(&restored, FileType::Assay)
        .unwrap();
    assert_eq!(
        text,
        fs::read_to_string(data_dir().join("a_minimal.txt")).unwrap()
    );
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_minimal_dataset_is_clean() {
    let (_dir, path) = stage_dataset();
    let report = IsaDataset::open(&path).unwrap().validate();
    assert!(report.is_clean(), "{report}");
}

/// Test that findings from several files end up in one report
#[test]
fn test_findings_from_every_file() {
    let (dir, path) = stage_dataset();

    let study = fs::read_to_string(dir.path().join("s_minimal.txt")).unwrap();
    fs::write(
        dir.path().join("s_minimal.txt"),
        study.replace("\tsample collection\t", "\tsampling\t"),
    )
    .unwrap();
    let assay = fs::read_to_string(dir.path().join("a_minimal.txt")).unwrap();
    fs::write(
        dir.path().join("a_minimal.txt"),
        assay.replace("sample2\t", "sample9\t"),
    )
    .unwrap();

    let report = IsaDataset::open(&path).unwrap().validate();
    assert!(report.has_critical());

    let critical: Vec<&str> = report
        .warnings
        .iter()
        .filter(|w| w.severity == Severity::Critical)
        .map(|w| w.message.as_str())
        .collect();
    assert!(critical
        .iter()
        .any(|m| m.starts_with("s_minimal.txt: Protocol \"sampling\"")));
    assert!(critical
        .iter()
        .any(|m| m.starts_with("a_minimal.txt: Samples in assay") && m.ends_with("sample9")));
}

// ============================================================================
// Investigation and Export
// ============================================================================

#[test]
fn test_investigation_declarations() {
    let info = InvestigationReader::new()
        .read_path(data_dir().join("i_minimal.txt"))
        .unwrap();

    assert_eq!(info.identifier, "i_minimal");
    assert_eq!(info.ontology_sources.len(), 2);
    assert_eq!(info.studies.len(), 1);

    let study = &info.studies[0];
    assert_eq!(study.file_name, "s_minimal.txt");
    assert!(study.factors.contains_key("treatment"));
    assert_eq!(study.assays.len(), 1);
    assert_eq!(study.assays[0].platform, "Orbitrap");
    assert_eq!(study.protocols["extraction"].parameters, vec!["kit"]);
}

#[test]
fn test_dataset_dot_export() {
    let (_dir, path) = stage_dataset();
    let dataset = IsaDataset::open(&path).unwrap();

    let mut out = Vec::new();
    write_investigation_dot(&dataset, &mut out).unwrap();
    let dot = String::from_utf8(out).unwrap();

    assert!(dot.starts_with("digraph investigation {"));
    assert!(dot.contains("label = \"Study: s_minimal.txt\""));
    assert!(dot.contains("label = \"Assay: a_minimal.txt\""));
    assert!(dot.trim_end().ends_with('}'));
}

#[test]
fn test_missing_table_is_reported_with_path() {
    let (dir, path) = stage_dataset();
    fs::remove_file(dir.path().join("s_minimal.txt")).unwrap();

    let err = IsaDataset::open(&path).unwrap_err();
    assert!(matches!(err, DatasetError::ReadError { .. }));
    assert!(err.to_string().contains("s_minimal.txt"));
}
