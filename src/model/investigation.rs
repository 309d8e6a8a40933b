use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::OntologyTermRef;

/// `ONTOLOGY SOURCE REFERENCE` column
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OntologySource {
    /// Name used in `Term Source REF` cells
    pub name: String,
    /// File or URL
    pub file: String,
    /// Version
    pub version: String,
    /// Description
    pub description: String,
}

/// `STUDY FACTORS` column
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorInfo {
    /// Factor name, the label of `Factor Value[...]`
    pub name: String,
    /// Factor type
    pub factor_type: OntologyTermRef,
}

/// `STUDY ASSAYS` column
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssayInfo {
    /// Assay table file name, relative to the investigation
    pub file_name: String,
    /// Measurement type, e.g. `protein identification`
    pub measurement_type: OntologyTermRef,
    /// Technology type, e.g. `mass spectrometry`
    pub technology_type: OntologyTermRef,
    /// Technology platform
    pub platform: String,
}

/// `STUDY PROTOCOLS` column
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolInfo {
    /// Protocol name, the value of `Protocol REF` cells
    pub name: String,
    /// Protocol type
    pub protocol_type: OntologyTermRef,
    /// Declared parameter names, the labels of `Parameter Value[...]`
    pub parameters: Vec<String>,
}

/// One `STUDY` block of an investigation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyInfo {
    /// `Study Identifier`
    pub identifier: String,
    /// `Study Title`
    pub title: String,
    /// `Study File Name`
    pub file_name: String,
    /// Declared factors by name
    pub factors: IndexMap<String, FactorInfo>,
    /// Assays in declaration order
    pub assays: Vec<AssayInfo>,
    /// Declared protocols by name
    pub protocols: IndexMap<String, ProtocolInfo>,
}

/// The parts of an investigation file the table engine consumes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestigationInfo {
    /// `Investigation Identifier`
    pub identifier: String,
    /// `Investigation Title`
    pub title: String,
    /// Declared ontology sources by name
    pub ontology_sources: IndexMap<String, OntologySource>,
    /// Studies in declaration order
    pub studies: Vec<StudyInfo>,
}
