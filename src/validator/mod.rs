//! # ISA-Tab Validation Module
//!
//! Non-fatal checks over parsed investigations, studies and assays. Parsing
//! already rejects anything that cannot be represented; the validator reports
//! content that is representable but questionable.
//!
//! ## Severities
//!
//! | Severity | Examples |
//! |----------|----------|
//! | [`Severity::Critical`] | undeclared protocol, incomplete term reference, Label on a non-labeled extract |
//! | [`Severity::Moderate`] | undeclared factor or parameter, data file unusual for the assay technology |
//! | [`Severity::Advisory`] | study without assays, assay without platform |
//!
//! ## Usage
//!
//! ```rust
//! use isatab::header::FileType;
//! use isatab::model::{InvestigationInfo, StudyInfo};
//! use isatab::reader::TableReader;
//! use isatab::validator::validate_study;
//!
//! let tsv = "Source Name\tProtocol REF\tSample Name\nsrc1\tcollect\tsample1\n";
//! let table = TableReader::new(FileType::Study).read(tsv.as_bytes())?;
//!
//! let report = validate_study(&InvestigationInfo::default(), &StudyInfo::default(), &table.graph);
//! // "collect" is not declared by the (empty) study
//! assert!(report.has_critical());
//! # Ok::<(), isatab::reader::ReadError>(())
//! ```

use log::debug;

use crate::header::FileType;
use crate::model::{AssayInfo, Graph, InvestigationInfo, StudyInfo};

pub use report::{Severity, ValidationReport, ValidationWarning};

mod graph;
mod investigation;
mod report;


/// Validate the declarations of an investigation file
pub fn validate_investigation(info: &InvestigationInfo) -> ValidationReport {
    let mut report = ValidationReport::new(format!("investigation {}", info.identifier));
    investigation::check_investigation(info, &mut report);
    report
}

/// Validate a study graph against its declarations
pub fn validate_study(
    investigation: &InvestigationInfo,
    study: &StudyInfo,
    graph: &Graph,
) -> ValidationReport {
    let mut report = ValidationReport::new(study.file_name.clone());
    graph::GraphRules {
        file_type: FileType::Study,
        investigation,
        study,
        assay: None,
    }
    .check(graph, &mut report);
    debug!(
        "Validated study {}: {} findings",
        study.file_name,
        report.warnings.len()
    );
    report
}

/// Validate an assay graph against its declarations.
///
/// With `parent_study`, samples of the assay must also appear in the study.
pub fn validate_assay(
    investigation: &InvestigationInfo,
    study: &StudyInfo,
    assay: &AssayInfo,
    graph: &Graph,
    parent_study: Option<&Graph>,
) -> ValidationReport {
    let mut report = ValidationReport::new(assay.file_name.clone());
    graph::GraphRules {
        file_type: FileType::Assay,
        investigation,
        study,
        assay: Some(assay),
    }
    .check(graph, &mut report);
    if let Some(study_graph) = parent_study {
        graph::check_assay_samples(graph, study_graph, &assay.file_name, &mut report);
    }
    debug!(
        "Validated assay {}: {} findings",
        assay.file_name,
        report.warnings.len()
    );
    report
}
