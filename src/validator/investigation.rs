use std::collections::HashSet;

use crate::model::InvestigationInfo;

use super::{ValidationReport, ValidationWarning};

/// Declarations of the investigation file itself
pub(crate) fn check_investigation(info: &InvestigationInfo, report: &mut ValidationReport) {
    for source in info.ontology_sources.values() {
        if source.name.is_empty()
            || source.file.is_empty()
            || source.version.is_empty()
            || source.description.is_empty()
        {
            report.add_warning(ValidationWarning::critical(format!(
                "Incomplete ontology source \"{}\" (file \"{}\", version \"{}\")",
                source.name, source.file, source.version
            )));
        }
        if source.name.chars().any(char::is_whitespace) {
            report.add_warning(ValidationWarning::advisory(format!(
                "Ontology source name contains whitespace: \"{}\"",
                source.name
            )));
        }
    }

    if info.studies.is_empty() {
        report.add_warning(ValidationWarning::critical("No studies declared in investigation"));
    }
    if info.studies.len() > 1 && (info.identifier.is_empty() || info.title.is_empty()) {
        report.add_warning(ValidationWarning::moderate(
            "Investigation with several studies lacks an identifier or title",
        ));
    }

    let mut study_ids = HashSet::new();
    let mut study_files = HashSet::new();
    let mut assay_files = HashSet::new();
    for study in &info.studies {
        if study.identifier.is_empty() || study.file_name.is_empty() {
            report.add_warning(ValidationWarning::critical(format!(
                "Study without identifier or file name: \"{}\" / \"{}\"",
                study.identifier, study.file_name
            )));
        }
        if study.title.is_empty() {
            report.add_warning(ValidationWarning::moderate(format!(
                "Study \"{}\" without title",
                study.identifier
            )));
        }
        if !study.identifier.is_empty() && !study_ids.insert(study.identifier.as_str()) {
            report.add_warning(ValidationWarning::critical(format!(
                "Study identifier used more than once: {}",
                study.identifier
            )));
        }
        if !study.file_name.is_empty() && !study_files.insert(study.file_name.as_str()) {
            report.add_warning(ValidationWarning::critical(format!(
                "Study file used more than once: {}",
                study.file_name
            )));
        }

        if study.assays.is_empty() {
            report.add_warning(ValidationWarning::advisory(format!(
                "No assays declared in study \"{}\"",
                study.identifier
            )));
        }
        for assay in &study.assays {
            if assay.file_name.is_empty()
                || assay.measurement_type.is_empty()
                || assay.technology_type.is_empty()
            {
                report.add_warning(ValidationWarning::critical(format!(
                    "Assay \"{}\" lacks file name, measurement type or technology type",
                    assay.file_name
                )));
            }
            if assay.platform.is_empty() {
                report.add_warning(ValidationWarning::advisory(format!(
                    "Assay \"{}\" without platform",
                    assay.file_name
                )));
            }
            if !assay.file_name.is_empty() && !assay_files.insert(assay.file_name.as_str()) {
                report.add_warning(ValidationWarning::critical(format!(
                    "Assay file used more than once: {}",
                    assay.file_name
                )));
            }
        }
    }
}
