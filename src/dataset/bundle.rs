use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;

use super::DatasetError;
use crate::header::FileType;
use crate::investigation::InvestigationReader;
use crate::model::{AssayInfo, InvestigationInfo, StudyInfo};
use crate::reader::{ParsedTable, ReaderConfig, TableReader};
use crate::validator::{validate_assay, validate_investigation, validate_study, ValidationReport};
use crate::writer::{TableWriter, WriterConfig};

/// Tables of one study, parallel to its [`StudyInfo`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StudyTables {
    /// Study table, `None` when the investigation names no file
    pub study: Option<ParsedTable>,
    /// Assay tables in [`StudyInfo::assays`] order
    pub assays: Vec<Option<ParsedTable>>,
}

/// An investigation with every study and assay table it references
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IsaDataset {
    /// Investigation file
    pub path: PathBuf,
    /// Declarations read from the investigation file
    pub investigation: InvestigationInfo,
    /// Tables in [`InvestigationInfo::studies`] order
    pub studies: Vec<StudyTables>,
}

impl IsaDataset {
    /// Read an investigation and all tables it references
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        Self::open_with_config(path, ReaderConfig::default())
    }

    /// Read an investigation and all tables it references with custom reader settings
    pub fn open_with_config(
        path: impl AsRef<Path>,
        config: ReaderConfig,
    ) -> Result<Self, DatasetError> {
        let path = path.as_ref().to_path_buf();
        if path.file_name().is_none() {
            return Err(DatasetError::InvalidPath(path));
        }
        let investigation = InvestigationReader::new()
            .with_config(config)
            .read_path(&path)?;
        let dir = parent_dir(&path);

        let mut studies = Vec::with_capacity(investigation.studies.len());
        for (index, study) in investigation.studies.iter().enumerate() {
            studies.push(read_study(dir, index, study, config)?);
        }

        info!(
            "Opened {}: {} studies, {} assays",
            path.display(),
            studies.len(),
            studies.iter().map(|s| s.assays.len()).sum::<usize>()
        );
        Ok(Self {
            path,
            investigation,
            studies,
        })
    }

    /// Directory the table file names are relative to
    pub fn directory(&self) -> &Path {
        parent_dir(&self.path)
    }

    /// Study declarations paired with their tables
    pub fn iter_studies(&self) -> impl Iterator<Item = (&StudyInfo, &StudyTables)> {
        self.investigation.studies.iter().zip(&self.studies)
    }

    /// Validate the investigation and every study and assay table
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new(self.path.display().to_string());
        let mut own = validate_investigation(&self.investigation);
        own.file_path = String::new();
        report.merge(own);

        for (info, tables) in self.iter_studies() {
            let study_graph = tables.study.as_ref().map(|t| &t.graph);
            if let Some(graph) = study_graph {
                report.merge(validate_study(&self.investigation, info, graph));
            }
            for (assay_info, assay) in info.assays.iter().zip(&tables.assays) {
                if let Some(assay) = assay {
                    report.merge(validate_assay(
                        &self.investigation,
                        info,
                        assay_info,
                        &assay.graph,
                        study_graph,
                    ));
                }
            }
        }
        report
    }

    /// Copy the investigation file into `dir` and write every table back out
    /// under its original file name.
    pub fn write_to(&self, dir: impl AsRef<Path>, config: &WriterConfig) -> Result<(), DatasetError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        if fs::canonicalize(dir)? == fs::canonicalize(self.directory())? {
            return Err(DatasetError::SameDirectory(dir.to_path_buf()));
        }

        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| DatasetError::InvalidPath(self.path.clone()))?;
        fs::copy(&self.path, dir.join(file_name))?;

        let writer = TableWriter::new(*config);
        for (info, tables) in self.iter_studies() {
            if let Some(study) = &tables.study {
                write_table(&writer, study, &dir.join(&info.file_name))?;
            }
            for (assay_info, assay) in info.assays.iter().zip(&tables.assays) {
                if let Some(assay) = assay {
                    write_table(&writer, assay, &dir.join(&assay_info.file_name))?;
                }
            }
        }
        info!("Wrote dataset to {}", dir.display());
        Ok(())
    }
}

fn parent_dir(path: &Path) -> &Path {
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
}

fn read_table(
    dir: &Path,
    file_name: &str,
    reader: &TableReader,
) -> Result<ParsedTable, DatasetError> {
    let path = dir.join(file_name);
    reader
        .read_path(&path)
        .map_err(|source| DatasetError::ReadError { path, source })
}

fn read_study(
    dir: &Path,
    index: usize,
    info: &StudyInfo,
    config: ReaderConfig,
) -> Result<StudyTables, DatasetError> {
    let study = if info.file_name.is_empty() {
        warn!("No file for study {}", index + 1);
        None
    } else {
        let reader = TableReader::new(FileType::Study)
            .with_config(config)
            .with_factors(info.factors.keys().cloned());
        Some(read_table(dir, &info.file_name, &reader)?)
    };

    let reader = TableReader::new(FileType::Assay).with_config(config);
    let read_assay = |assay: &AssayInfo| -> Result<Option<ParsedTable>, DatasetError> {
        if assay.file_name.is_empty() {
            warn!("No file for an assay of study {}", index + 1);
            return Ok(None);
        }
        read_table(dir, &assay.file_name, &reader).map(Some)
    };

    // Results keep declaration order either way
    #[cfg(feature = "parallel")]
    let assays = info
        .assays
        .par_iter()
        .map(read_assay)
        .collect::<Result<Vec<_>, _>>()?;

    #[cfg(not(feature = "parallel"))]
    let assays = info
        .assays
        .iter()
        .map(read_assay)
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Read study {} with {} assays", info.identifier, assays.len());
    Ok(StudyTables { study, assays })
}

fn write_table(writer: &TableWriter, table: &ParsedTable, path: &Path) -> Result<(), DatasetError> {
    writer
        .write_path(&table.graph, table.file_type, path)
        .map_err(|source| DatasetError::WriteError {
            path: path.to_path_buf(),
            source,
        })
}
