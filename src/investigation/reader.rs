use std::fs::File;
use std::io::Read;
use std::path::Path;

use indexmap::IndexMap;
use log::{debug, info, warn};

use super::InvestigationError;
use crate::constants::LIST_SEPARATOR;
use crate::model::{
    AssayInfo, FactorInfo, InvestigationInfo, OntologySource, OntologyTermRef, ProtocolInfo,
    StudyInfo,
};
use crate::reader::ReaderConfig;

/// Section headings of an investigation file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// `ONTOLOGY SOURCE REFERENCE`
    OntologySourceReference,
    /// `INVESTIGATION`
    Investigation,
    /// `INVESTIGATION PUBLICATIONS`
    InvestigationPublications,
    /// `INVESTIGATION CONTACTS`
    InvestigationContacts,
    /// `STUDY`
    Study,
    /// `STUDY DESIGN DESCRIPTORS`
    StudyDesignDescriptors,
    /// `STUDY PUBLICATIONS`
    StudyPublications,
    /// `STUDY FACTORS`
    StudyFactors,
    /// `STUDY ASSAYS`
    StudyAssays,
    /// `STUDY PROTOCOLS`
    StudyProtocols,
    /// `STUDY CONTACTS`
    StudyContacts,
}

impl Section {
    /// Parse a section heading
    pub fn from_heading(heading: &str) -> Option<Self> {
        let section = match heading {
            "ONTOLOGY SOURCE REFERENCE" => Self::OntologySourceReference,
            "INVESTIGATION" => Self::Investigation,
            "INVESTIGATION PUBLICATIONS" => Self::InvestigationPublications,
            "INVESTIGATION CONTACTS" => Self::InvestigationContacts,
            "STUDY" => Self::Study,
            "STUDY DESIGN DESCRIPTORS" => Self::StudyDesignDescriptors,
            "STUDY PUBLICATIONS" => Self::StudyPublications,
            "STUDY FACTORS" => Self::StudyFactors,
            "STUDY ASSAYS" => Self::StudyAssays,
            "STUDY PROTOCOLS" => Self::StudyProtocols,
            "STUDY CONTACTS" => Self::StudyContacts,
            _ => return None,
        };
        Some(section)
    }

    /// Heading text
    pub fn heading(self) -> &'static str {
        match self {
            Self::OntologySourceReference => "ONTOLOGY SOURCE REFERENCE",
            Self::Investigation => "INVESTIGATION",
            Self::InvestigationPublications => "INVESTIGATION PUBLICATIONS",
            Self::InvestigationContacts => "INVESTIGATION CONTACTS",
            Self::Study => "STUDY",
            Self::StudyDesignDescriptors => "STUDY DESIGN DESCRIPTORS",
            Self::StudyPublications => "STUDY PUBLICATIONS",
            Self::StudyFactors => "STUDY FACTORS",
            Self::StudyAssays => "STUDY ASSAYS",
            Self::StudyProtocols => "STUDY PROTOCOLS",
            Self::StudyContacts => "STUDY CONTACTS",
        }
    }

    fn belongs_to_study(self) -> bool {
        matches!(
            self,
            Self::Study
                | Self::StudyDesignDescriptors
                | Self::StudyPublications
                | Self::StudyFactors
                | Self::StudyAssays
                | Self::StudyProtocols
                | Self::StudyContacts
        )
    }
}

fn is_heading(key: &str) -> bool {
    key.chars().any(|c| c.is_ascii_uppercase())
        && key.chars().all(|c| c.is_ascii_uppercase() || c == ' ')
}

/// Key lines of one section, in file order
#[derive(Debug)]
struct SectionBlock {
    section: Section,
    rows: IndexMap<String, Vec<String>>,
}

impl SectionBlock {
    fn new(section: Section) -> Self {
        Self {
            section,
            rows: IndexMap::new(),
        }
    }

    fn columns(&self) -> usize {
        self.rows.values().map(Vec::len).max().unwrap_or(0)
    }

    fn value(&self, key: &str, column: usize) -> &str {
        self.rows
            .get(key)
            .and_then(|values| values.get(column))
            .map_or("", String::as_str)
    }

    fn term(&self, prefix: &str, column: usize) -> OntologyTermRef {
        OntologyTermRef::new(
            self.value(prefix, column),
            self.value(&format!("{prefix} Term Accession Number"), column),
            self.value(&format!("{prefix} Term Source REF"), column),
        )
    }

    /// Column has no value under any of the non-comment keys
    fn is_blank(&self, column: usize) -> bool {
        self.rows
            .iter()
            .filter(|(key, _)| !key.starts_with("Comment"))
            .all(|(key, _)| self.value(key, column).is_empty())
    }
}

/// Reads the declarations of an investigation file.
///
/// Only the parts the table engine consumes are extracted. Publication,
/// contact and design descriptor sections are accepted and skipped.
#[derive(Debug, Clone, Default)]
pub struct InvestigationReader {
    config: ReaderConfig,
}

impl InvestigationReader {
    /// Create a reader with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Use custom reader settings
    pub fn with_config(mut self, config: ReaderConfig) -> Self {
        self.config = config;
        self
    }

    /// Read an investigation from a file
    pub fn read_path(&self, path: impl AsRef<Path>) -> Result<InvestigationInfo, InvestigationError> {
        let path = path.as_ref();
        debug!("Reading investigation {}", path.display());
        self.read(File::open(path)?)
    }

    /// Read an investigation from any byte source
    pub fn read<R: Read>(&self, reader: R) -> Result<InvestigationInfo, InvestigationError> {
        let mut csv = self.config.csv_builder().from_reader(reader);
        let mut info = InvestigationInfo::default();
        let mut current: Option<SectionBlock> = None;

        for record in csv.records() {
            let record = record?;
            let line = record.position().map_or(0, |p| p.line());
            let mut cells = record.iter().map(|cell| cell.trim().to_string());
            let key = match cells.next() {
                Some(key) if !key.is_empty() => key,
                _ => continue,
            };

            if is_heading(&key) {
                let section = Section::from_heading(&key).ok_or_else(|| {
                    InvestigationError::UnknownSection {
                        heading: key.clone(),
                        line,
                    }
                })?;
                if let Some(block) = current.take() {
                    apply_block(&mut info, block)?;
                }
                if section == Section::Study {
                    info.studies.push(StudyInfo::default());
                } else if section.belongs_to_study() && info.studies.is_empty() {
                    return Err(InvestigationError::MissingStudy { heading: key, line });
                }
                current = Some(SectionBlock::new(section));
                continue;
            }

            let block = current
                .as_mut()
                .ok_or_else(|| InvestigationError::KeyOutsideSection {
                    key: key.clone(),
                    line,
                })?;
            if block.rows.contains_key(&key) {
                return Err(InvestigationError::RepeatedKey {
                    key,
                    section: block.section.heading().to_string(),
                    line,
                });
            }
            block.rows.insert(key, cells.collect());
        }
        if let Some(block) = current.take() {
            apply_block(&mut info, block)?;
        }

        info!(
            "Read investigation \"{}\": {} ontology sources, {} studies",
            info.identifier,
            info.ontology_sources.len(),
            info.studies.len()
        );
        Ok(info)
    }
}

fn apply_block(info: &mut InvestigationInfo, block: SectionBlock) -> Result<(), InvestigationError> {
    match block.section {
        Section::OntologySourceReference => {
            for column in 0..block.columns() {
                if block.is_blank(column) {
                    warn!("Skipping empty ontology source column {column}");
                    continue;
                }
                let source = OntologySource {
                    name: block.value("Term Source Name", column).to_string(),
                    file: block.value("Term Source File", column).to_string(),
                    version: block.value("Term Source Version", column).to_string(),
                    description: block.value("Term Source Description", column).to_string(),
                };
                info.ontology_sources.insert(source.name.clone(), source);
            }
        }
        Section::Investigation => {
            info.identifier = block.value("Investigation Identifier", 0).to_string();
            info.title = block.value("Investigation Title", 0).to_string();
        }
        Section::Study => {
            if let Some(study) = info.studies.last_mut() {
                study.identifier = block.value("Study Identifier", 0).to_string();
                study.title = block.value("Study Title", 0).to_string();
                study.file_name = block.value("Study File Name", 0).to_string();
            }
        }
        Section::StudyFactors => {
            if let Some(study) = info.studies.last_mut() {
                for column in 0..block.columns() {
                    if block.is_blank(column) {
                        warn!("Skipping empty factor column {column}");
                        continue;
                    }
                    let factor = FactorInfo {
                        name: block.value("Study Factor Name", column).to_string(),
                        factor_type: block.term("Study Factor Type", column),
                    };
                    study.factors.insert(factor.name.clone(), factor);
                }
            }
        }
        Section::StudyAssays => {
            if let Some(study) = info.studies.last_mut() {
                for column in 0..block.columns() {
                    if block.is_blank(column) {
                        warn!("Skipping empty assay column {column}");
                        continue;
                    }
                    study.assays.push(AssayInfo {
                        file_name: block.value("Study Assay File Name", column).to_string(),
                        measurement_type: block.term("Study Assay Measurement Type", column),
                        technology_type: block.term("Study Assay Technology Type", column),
                        platform: block
                            .value("Study Assay Technology Platform", column)
                            .to_string(),
                    });
                }
            }
        }
        Section::StudyProtocols => {
            if let Some(study) = info.studies.last_mut() {
                for column in 0..block.columns() {
                    if block.is_blank(column) {
                        continue;
                    }
                    let name = block.value("Study Protocol Name", column);
                    if name.is_empty() {
                        return Err(InvestigationError::UnnamedProtocol { column });
                    }
                    let parameters = block
                        .value("Study Protocol Parameters Name", column)
                        .split(LIST_SEPARATOR)
                        .map(str::trim)
                        .filter(|p| !p.is_empty())
                        .map(str::to_string)
                        .collect();
                    study.protocols.insert(
                        name.to_string(),
                        ProtocolInfo {
                            name: name.to_string(),
                            protocol_type: block.term("Study Protocol Type", column),
                            parameters,
                        },
                    );
                }
            }
        }
        Section::InvestigationPublications
        | Section::InvestigationContacts
        | Section::StudyDesignDescriptors
        | Section::StudyPublications
        | Section::StudyContacts => {
            debug!("Skipping section {}", block.section.heading());
        }
    }
    Ok(())
}
