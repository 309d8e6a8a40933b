use std::fs;
use std::path::Path;

use super::*;
use crate::writer::{LineTerminator, WriterConfig};
use tempfile::tempdir;

const INVESTIGATION: &str = include_str!("../../tests/data/i_minimal.txt");
const STUDY: &str = include_str!("../../tests/data/s_minimal.txt");
const ASSAY: &str = include_str!("../../tests/data/a_minimal.txt");

fn write_dataset(dir: &Path) -> std::io::Result<std::path::PathBuf> {
    let path = dir.join("i_minimal.txt");
    fs::write(&path, INVESTIGATION)?;
    fs::write(dir.join("s_minimal.txt"), STUDY)?;
    fs::write(dir.join("a_minimal.txt"), ASSAY)?;
    Ok(path)
}

#[test]
fn test_open_dataset() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let dataset = IsaDataset::open(write_dataset(dir.path())?)?;

    assert_eq!(dataset.investigation.identifier, "i_minimal");
    assert_eq!(dataset.directory(), dir.path());
    assert_eq!(dataset.studies.len(), 1);

    let tables = &dataset.studies[0];
    let study = tables.study.as_ref().ok_or("study missing")?;
    assert_eq!(study.graph.materials.len(), 3);
    assert_eq!(study.graph.processes.len(), 2);

    assert_eq!(tables.assays.len(), 1);
    let assay = tables.assays[0].as_ref().ok_or("assay missing")?;
    assert!(assay.graph.contains("sample1"));
    assert!(assay.graph.contains("run1-COL7"));
    assert!(assay.graph.contains("run2.raw-COL8"));
    Ok(())
}

#[test]
fn test_minimal_dataset_validates_clean() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let dataset = IsaDataset::open(write_dataset(dir.path())?)?;

    let report = dataset.validate();
    assert!(report.is_clean(), "{report}");
    Ok(())
}

#[test]
fn test_validate_prefixes_table_findings() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = write_dataset(dir.path())?;
    let assay = ASSAY.replace("\textraction\t", "\tdigestion\t");
    fs::write(dir.path().join("a_minimal.txt"), assay)?;

    let report = IsaDataset::open(path)?.validate();
    assert!(report.has_critical());
    assert!(report.warnings.iter().all(|w| w
        .message
        .starts_with("a_minimal.txt: Protocol \"digestion\"")));
    Ok(())
}

#[test]
fn test_write_to_round_trips() -> Result<(), Box<dyn std::error::Error>> {
    let input = tempdir()?;
    let output = tempdir()?;
    let dataset = IsaDataset::open(write_dataset(input.path())?)?;

    dataset.write_to(output.path(), &WriterConfig::default())?;

    assert_eq!(fs::read_to_string(output.path().join("i_minimal.txt"))?, INVESTIGATION);
    assert_eq!(fs::read_to_string(output.path().join("s_minimal.txt"))?, STUDY);
    assert_eq!(fs::read_to_string(output.path().join("a_minimal.txt"))?, ASSAY);
    Ok(())
}

#[test]
fn test_write_to_with_quoting() -> Result<(), Box<dyn std::error::Error>> {
    let input = tempdir()?;
    let output = tempdir()?;
    let dataset = IsaDataset::open(write_dataset(input.path())?)?;

    let config = WriterConfig {
        quote: Some(b'"'),
        line_terminator: LineTerminator::CrLf,
    };
    dataset.write_to(output.path(), &config)?;

    let study = fs::read_to_string(output.path().join("s_minimal.txt"))?;
    assert!(study.starts_with("\"Source Name\"\t\"Characteristics[organism]\""));
    assert!(study.contains("\r\n"));

    let again = IsaDataset::open(output.path().join("i_minimal.txt"))?;
    assert_eq!(again.studies, dataset.studies);
    Ok(())
}

#[test]
fn test_write_to_input_directory_fails() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let dataset = IsaDataset::open(write_dataset(dir.path())?)?;

    let err = dataset
        .write_to(dir.path(), &WriterConfig::default())
        .unwrap_err();
    assert!(matches!(err, DatasetError::SameDirectory(_)));
    Ok(())
}

#[test]
fn test_missing_assay_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = write_dataset(dir.path())?;
    fs::remove_file(dir.path().join("a_minimal.txt"))?;

    let err = IsaDataset::open(path).unwrap_err();
    match err {
        DatasetError::ReadError { path, .. } => assert!(path.ends_with("a_minimal.txt")),
        other => panic!("unexpected error: {other}"),
    }
    Ok(())
}

#[test]
fn test_study_without_file_name_is_skipped() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = write_dataset(dir.path())?;
    let investigation = INVESTIGATION.replace("Study File Name\ts_minimal.txt", "Study File Name\t");
    fs::write(&path, investigation)?;

    let dataset = IsaDataset::open(path)?;
    assert!(dataset.studies[0].study.is_none());
    assert!(dataset.studies[0].assays[0].is_some());
    Ok(())
}
