use super::escape::split_escaped;
use super::{BuildContext, BuildError};
use crate::constants::{COLUMN_QUALIFIER, DATE_FORMAT, TOKEN_ANONYMOUS, TOKEN_EMPTY, TOKEN_UNKNOWN};
use crate::grouping::{Segment, SegmentKind};
use crate::header::{ColumnDescriptor, ColumnKind};
use crate::model::{
    Characteristic, Comment, FactorValue, FreeTextOrTermRef, Material, Node, OntologyTermRef,
    ParameterValue, Process,
};

fn cell<S: AsRef<str>>(row: &[S], col_no: usize) -> &str {
    row.get(col_no).map(AsRef::as_ref).unwrap_or("")
}

fn label(descriptor: &ColumnDescriptor) -> String {
    descriptor.label.clone().unwrap_or_default()
}

/// Unique name of a named node. Sources and samples keep their name so
/// assays can refer to study samples; every other node is qualified by
/// its one-based column.
fn qualified_name(name: &str, descriptor: &ColumnDescriptor) -> String {
    match descriptor.kind {
        ColumnKind::SourceName | ColumnKind::SampleName => name.to_string(),
        _ => format!("{name}-{COLUMN_QUALIFIER}{}", descriptor.col_no + 1),
    }
}

fn check_date(value: &str, column: usize) -> Result<String, BuildError> {
    let valid = value.is_empty()
        || (value.len() == 10 && chrono::NaiveDate::parse_from_str(value, DATE_FORMAT).is_ok());
    if valid {
        Ok(value.to_string())
    } else {
        Err(BuildError::DateFormat {
            value: value.to_string(),
            column,
        })
    }
}

/// Builds one [`Node`] per data row from a header [`Segment`]
#[derive(Debug, Clone)]
pub struct NodeBuilder {
    segment: Segment,
    headers: Vec<String>,
}

impl NodeBuilder {
    /// Create a builder for one segment
    pub fn new(segment: Segment) -> Self {
        let headers = segment.header_strings();
        Self { segment, headers }
    }

    /// Segment this builder reads
    pub fn segment(&self) -> &Segment {
        &self.segment
    }

    /// Build the node for one row. The row must cover the segment's columns.
    pub fn build<S: AsRef<str>>(
        &self,
        row: &[S],
        ctx: &mut BuildContext,
    ) -> Result<Node, BuildError> {
        match self.segment.kind {
            SegmentKind::Material => self.build_material(row, ctx).map(Node::Material),
            SegmentKind::Process => self.build_process(row, ctx).map(Node::Process),
        }
    }

    fn annotations(&self) -> impl Iterator<Item = &ColumnDescriptor> {
        self.segment.columns.iter().skip(1)
    }

    fn find(&self, kind: ColumnKind) -> Option<&ColumnDescriptor> {
        self.segment.columns.iter().find(|c| c.kind == kind)
    }

    fn term_or_text<S: AsRef<str>>(
        &self,
        descriptor: &ColumnDescriptor,
        row: &[S],
    ) -> FreeTextOrTermRef {
        let name = cell(row, descriptor.col_no);
        match self.segment.linked(descriptor.term_source_ref) {
            Some(tsr) => OntologyTermRef::new(
                name,
                cell(row, tsr.col_no + 1),
                cell(row, tsr.col_no),
            )
            .into(),
            None => name.into(),
        }
    }

    fn term_or_text_list<S: AsRef<str>>(
        &self,
        descriptor: &ColumnDescriptor,
        row: &[S],
    ) -> Result<Vec<FreeTextOrTermRef>, BuildError> {
        let names = split_escaped(cell(row, descriptor.col_no));
        let Some(tsr) = self.segment.linked(descriptor.term_source_ref) else {
            return Ok(names.into_iter().map(FreeTextOrTermRef::from).collect());
        };

        let parallel = |col_no: usize| -> Result<Vec<String>, BuildError> {
            let parts = split_escaped(cell(row, col_no));
            match parts.len() {
                n if n == names.len() => Ok(parts),
                // A single blank cell qualifies every value
                1 if parts[0].is_empty() => Ok(vec![String::new(); names.len()]),
                n => Err(BuildError::TermListMismatch {
                    header: descriptor.key(),
                    values: names.len(),
                    terms: n,
                    column: descriptor.col_no,
                }),
            }
        };
        let ontologies = parallel(tsr.col_no)?;
        let accessions = parallel(tsr.col_no + 1)?;

        Ok(names
            .into_iter()
            .zip(accessions)
            .zip(ontologies)
            .map(|((name, accession), ontology)| {
                OntologyTermRef::new(name, accession, ontology).into()
            })
            .collect())
    }

    fn unit<S: AsRef<str>>(
        &self,
        descriptor: &ColumnDescriptor,
        row: &[S],
    ) -> Option<FreeTextOrTermRef> {
        self.segment
            .linked(descriptor.unit)
            .map(|unit| self.term_or_text(unit, row))
    }

    fn build_material<S: AsRef<str>>(
        &self,
        row: &[S],
        ctx: &mut BuildContext,
    ) -> Result<Material, BuildError> {
        let start = self.segment.start();
        let name = cell(row, start.col_no).to_string();
        let unique_name = if name.is_empty() {
            ctx.next_name(&format!("{TOKEN_EMPTY} {}", start.kind))
        } else {
            qualified_name(&name, start)
        };

        let mut material = Material {
            node_type: start.kind,
            unique_name,
            name,
            extract_label: None,
            characteristics: Vec::new(),
            comments: Vec::new(),
            factor_values: Vec::new(),
            material_type: None,
            headers: self.headers.clone(),
        };

        for descriptor in self.annotations() {
            match descriptor.kind {
                ColumnKind::Characteristics => material.characteristics.push(Characteristic {
                    name: label(descriptor),
                    value: self.term_or_text_list(descriptor, row)?,
                    unit: self.unit(descriptor, row),
                }),
                ColumnKind::Comment => material.comments.push(Comment {
                    name: label(descriptor),
                    value: cell(row, descriptor.col_no).to_string(),
                }),
                ColumnKind::FactorValue => material.factor_values.push(FactorValue {
                    name: label(descriptor),
                    value: self.term_or_text(descriptor, row),
                    unit: self.unit(descriptor, row),
                }),
                ColumnKind::MaterialType => {
                    material.material_type = Some(self.term_or_text(descriptor, row));
                }
                ColumnKind::Label => {
                    material.extract_label = Some(self.term_or_text(descriptor, row));
                }
                // Qualifiers are read through their owner's links
                _ => {}
            }
        }

        let has_unit = |unit: &Option<FreeTextOrTermRef>| {
            unit.as_ref().is_some_and(FreeTextOrTermRef::has_content)
        };
        if material.name.is_empty()
            && (material.is_annotated()
                || material.characteristics.iter().any(|c| has_unit(&c.unit))
                || material.factor_values.iter().any(|f| has_unit(&f.unit)))
        {
            return Err(BuildError::AnnotatedWithoutName {
                kind: start.kind,
                column: start.col_no,
            });
        }

        Ok(material)
    }

    fn build_process<S: AsRef<str>>(
        &self,
        row: &[S],
        ctx: &mut BuildContext,
    ) -> Result<Process, BuildError> {
        let protocol_column = self.segment.protocol_column();
        let name_column = self.segment.name_column();

        let protocol_ref = match protocol_column {
            Some(column) => {
                let value = cell(row, column.col_no);
                if value.is_empty() {
                    return Err(BuildError::MissingProtocolRef {
                        column: column.col_no,
                    });
                }
                value.to_string()
            }
            None => TOKEN_UNKNOWN.to_string(),
        };
        let name = name_column.map(|c| cell(row, c.col_no).to_string());
        let name_type = name_column.map(|c| c.kind);

        let unique_name = match (&name, name_column, protocol_column) {
            (Some(name), Some(column), _) if !name.is_empty() => qualified_name(name, column),
            (_, _, Some(_)) => ctx.next_name(&protocol_ref),
            (_, _, None) => {
                let kind = self.segment.start().kind.as_str();
                ctx.next_name(&format!(
                    "{TOKEN_ANONYMOUS} {}",
                    kind.trim_end_matches(" Name")
                ))
            }
        };

        let date = self
            .find(ColumnKind::Date)
            .map(|c| check_date(cell(row, c.col_no), c.col_no))
            .transpose()?;

        let mut process = Process {
            protocol_ref,
            unique_name,
            name,
            name_type,
            date,
            performer: self
                .find(ColumnKind::Performer)
                .map(|c| cell(row, c.col_no).to_string()),
            parameter_values: Vec::new(),
            comments: Vec::new(),
            array_design_ref: self
                .find(ColumnKind::ArrayDesignRef)
                .map(|c| cell(row, c.col_no).to_string()),
            first_dimension: self
                .find(ColumnKind::FirstDimension)
                .map(|c| self.term_or_text(c, row)),
            second_dimension: self
                .find(ColumnKind::SecondDimension)
                .map(|c| self.term_or_text(c, row)),
            headers: self.headers.clone(),
        };

        for descriptor in self.annotations() {
            match descriptor.kind {
                ColumnKind::ParameterValue => process.parameter_values.push(ParameterValue {
                    name: label(descriptor),
                    value: self.term_or_text_list(descriptor, row)?,
                    unit: self.unit(descriptor, row),
                }),
                ColumnKind::Comment => process.comments.push(Comment {
                    name: label(descriptor),
                    value: cell(row, descriptor.col_no).to_string(),
                }),
                _ => {}
            }
        }

        Ok(process)
    }
}
