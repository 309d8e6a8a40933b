use std::collections::HashSet;

use crate::constants::{restricted_measurements, restricted_technologies};
use crate::header::{ColumnKind, FileType};
use crate::model::{
    AssayInfo, FreeTextOrTermRef, Graph, InvestigationInfo, Material, OntologyTermRef, Process,
    StudyInfo,
};

use super::{ValidationReport, ValidationWarning};

/// Rules over the nodes and arcs of one study or assay graph
pub(crate) struct GraphRules<'a> {
    pub(crate) file_type: FileType,
    pub(crate) investigation: &'a InvestigationInfo,
    pub(crate) study: &'a StudyInfo,
    pub(crate) assay: Option<&'a AssayInfo>,
}

impl GraphRules<'_> {
    pub(crate) fn check(&self, graph: &Graph, report: &mut ValidationReport) {
        for material in graph.materials.values() {
            self.check_material(material, report);
        }
        for process in graph.processes.values() {
            self.check_process(process, report);
        }
        self.check_arcs(graph, report);
    }

    fn check_term(&self, term: &OntologyTermRef, report: &mut ValidationReport) {
        if term.is_incomplete() {
            report.add_warning(ValidationWarning::critical(format!(
                "Incomplete ontology term reference: name \"{}\", ontology \"{}\", accession \"{}\"",
                term.name.as_deref().unwrap_or("?"),
                term.ontology_name.as_deref().unwrap_or("?"),
                term.accession.as_deref().unwrap_or("?"),
            )));
        }
        if let Some(ontology) = &term.ontology_name {
            let sources = &self.investigation.ontology_sources;
            if !sources.is_empty() && !sources.contains_key(ontology) {
                report.add_warning(ValidationWarning::critical(format!(
                    "Ontology \"{ontology}\" not declared in investigation"
                )));
            }
        }
    }

    fn check_value(&self, value: &FreeTextOrTermRef, report: &mut ValidationReport) {
        if let Some(term) = value.as_term_ref() {
            self.check_term(term, report);
        }
    }

    fn check_material(&self, material: &Material, report: &mut ValidationReport) {
        let kind = material.node_type;
        let annotated = material.is_annotated();

        if material.name.is_empty() && annotated {
            report.add_warning(ValidationWarning::critical(format!(
                "Annotated {kind} without name: {}",
                material.unique_name
            )));
        }
        if self.file_type == FileType::Assay && kind == ColumnKind::SampleName && annotated {
            report.add_warning(ValidationWarning::critical(format!(
                "Annotated Sample \"{}\" in assay; samples are annotated in studies only",
                material.name
            )));
        }

        if material
            .extract_label
            .as_ref()
            .is_some_and(FreeTextOrTermRef::has_content)
            && kind != ColumnKind::LabeledExtractName
        {
            report.add_warning(ValidationWarning::critical(format!(
                "Label applied to {kind} \"{}\"; only Labeled Extract Name takes a label",
                material.name
            )));
        }
        if kind.is_data_file() {
            if !material.characteristics.is_empty() {
                report.add_warning(ValidationWarning::critical(format!(
                    "{kind} \"{}\" has Characteristics; data files take none",
                    material.name
                )));
            }
            if material
                .material_type
                .as_ref()
                .is_some_and(FreeTextOrTermRef::has_content)
            {
                report.add_warning(ValidationWarning::critical(format!(
                    "{kind} \"{}\" has a Material Type; data files take none",
                    material.name
                )));
            }
        }

        for factor in &material.factor_values {
            if !self.study.factors.contains_key(&factor.name) {
                report.add_warning(ValidationWarning::moderate(format!(
                    "Factor \"{}\" not declared in investigation",
                    factor.name
                )));
            }
        }

        if self.file_type == FileType::Assay {
            self.check_assay_restrictions(kind, report);
        }

        let labels = material.extract_label.iter().chain(&material.material_type);
        for value in labels {
            self.check_value(value, report);
        }
        for characteristic in &material.characteristics {
            for value in characteristic.value.iter().chain(&characteristic.unit) {
                self.check_value(value, report);
            }
        }
        for factor in &material.factor_values {
            for value in std::iter::once(&factor.value).chain(&factor.unit) {
                self.check_value(value, report);
            }
        }
    }

    fn check_assay_restrictions(&self, kind: ColumnKind, report: &mut ValidationReport) {
        let technologies = restricted_technologies(kind);
        let measurements = restricted_measurements(kind);
        if technologies.is_none() && measurements.is_none() {
            return;
        }
        let Some(assay) = self.assay else {
            report.add_warning(ValidationWarning::moderate(format!(
                "{kind} not recommended for unspecified assay"
            )));
            return;
        };

        let checks = [
            ("technology", technologies, &assay.technology_type),
            ("measurement", measurements, &assay.measurement_type),
        ];
        for (what, allowed, actual) in checks {
            let Some(allowed) = allowed else { continue };
            let actual = actual.name_str().to_lowercase();
            if !allowed.iter().any(|a| *a == actual) {
                report.add_warning(ValidationWarning::moderate(format!(
                    "{kind} not expected for assay {what} \"{actual}\" (only \"{}\")",
                    allowed.join("\", \"")
                )));
            }
        }
    }

    fn check_process(&self, process: &Process, report: &mut ValidationReport) {
        if !process.has_protocol() {
            report.add_warning(ValidationWarning::moderate(format!(
                "Cannot check parameter values of process \"{}\" without protocol reference",
                process.unique_name
            )));
        } else {
            match self.study.protocols.get(&process.protocol_ref) {
                None => report.add_warning(ValidationWarning::critical(format!(
                    "Protocol \"{}\" not declared in investigation",
                    process.protocol_ref
                ))),
                Some(protocol) => {
                    for parameter in &process.parameter_values {
                        if !protocol.parameters.contains(&parameter.name) {
                            report.add_warning(ValidationWarning::moderate(format!(
                                "Parameter Value \"{}\" not declared for protocol \"{}\"",
                                parameter.name, process.protocol_ref
                            )));
                        }
                    }
                }
            }
        }

        for parameter in &process.parameter_values {
            for value in parameter.value.iter().chain(&parameter.unit) {
                self.check_value(value, report);
            }
        }
        let dimensions = process.first_dimension.iter().chain(&process.second_dimension);
        for value in dimensions {
            self.check_value(value, report);
        }
    }

    fn check_arcs(&self, graph: &Graph, report: &mut ValidationReport) {
        let kind_of = |name: &str| graph.materials.get(name).map(|m| m.node_type);
        for arc in &graph.arcs {
            let head = kind_of(&arc.head);
            let tail = kind_of(&arc.tail);
            match self.file_type {
                FileType::Assay => {
                    if head == Some(ColumnKind::SampleName) {
                        report.add_warning(ValidationWarning::critical(format!(
                            "Sample \"{}\" does not start the assay graph",
                            arc.head
                        )));
                    }
                }
                FileType::Study => {
                    if head == Some(ColumnKind::SourceName) {
                        report.add_warning(ValidationWarning::critical(format!(
                            "Source \"{}\" does not start the study graph",
                            arc.head
                        )));
                    }
                    if tail == Some(ColumnKind::SampleName) {
                        report.add_warning(ValidationWarning::critical(format!(
                            "Sample \"{}\" does not end the study graph",
                            arc.tail
                        )));
                    }
                }
            }
        }
    }
}

/// Samples named in an assay that its study does not declare
pub(crate) fn check_assay_samples(
    assay: &Graph,
    study: &Graph,
    assay_file: &str,
    report: &mut ValidationReport,
) {
    let declared: HashSet<&str> = study
        .materials
        .values()
        .filter(|m| m.node_type == ColumnKind::SampleName)
        .map(|m| m.name.as_str())
        .collect();
    let missing: Vec<&str> = assay
        .materials
        .values()
        .filter(|m| m.node_type == ColumnKind::SampleName)
        .map(|m| m.name.as_str())
        .filter(|name| !declared.contains(name))
        .collect();
    if !missing.is_empty() {
        report.add_warning(ValidationWarning::critical(format!(
            "Samples in assay \"{assay_file}\" missing from study: {}",
            missing.join(", ")
        )));
    }
}
