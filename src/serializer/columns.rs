use std::collections::VecDeque;

use indexmap::IndexMap;

use super::WriteError;
use crate::builder::join_escaped;
use crate::grouping::{group_columns, Segment};
use crate::header::{parse_header, ColumnDescriptor, ColumnKind, FileType};
use crate::model::{FreeTextOrTermRef, Material, Node, OntologyTermRef, Process};

const TERM_SOURCE_KEY: &str = "Term Source REF";
const UNIT_KEY: &str = "Unit";

/// One queued cell group of a node
#[derive(Debug)]
enum Attribute {
    Text(String),
    TermOrText(FreeTextOrTermRef),
    Annotated {
        values: Vec<FreeTextOrTermRef>,
        list: bool,
        unit: Option<FreeTextOrTermRef>,
    },
    TermSource {
        ontology: String,
        accession: String,
    },
}

/// Node attributes keyed by header text, consumed in header order.
///
/// Emitting a term value queues its `Term Source REF` pair, and emitting an
/// annotated value queues its `Unit`, so qualifiers are drained right after
/// the column they belong to.
#[derive(Debug, Default)]
struct AttributeQueue {
    entries: IndexMap<String, VecDeque<Attribute>>,
}

impl AttributeQueue {
    fn push(&mut self, key: impl Into<String>, attribute: Attribute) {
        self.entries
            .entry(key.into())
            .or_default()
            .push_back(attribute);
    }

    fn from_material(material: &Material) -> Self {
        let mut queue = Self::default();
        queue.push(
            material.node_type.as_str(),
            Attribute::Text(material.name.clone()),
        );
        if let Some(label) = &material.extract_label {
            queue.push(
                ColumnKind::Label.as_str(),
                Attribute::TermOrText(label.clone()),
            );
        }
        for c in &material.characteristics {
            queue.push(
                format!("{}[{}]", ColumnKind::Characteristics, c.name),
                Attribute::Annotated {
                    values: c.value.clone(),
                    list: true,
                    unit: c.unit.clone(),
                },
            );
        }
        for c in &material.comments {
            queue.push(
                format!("{}[{}]", ColumnKind::Comment, c.name),
                Attribute::Text(c.value.clone()),
            );
        }
        for f in &material.factor_values {
            queue.push(
                format!("{}[{}]", ColumnKind::FactorValue, f.name),
                Attribute::Annotated {
                    values: vec![f.value.clone()],
                    list: false,
                    unit: f.unit.clone(),
                },
            );
        }
        if let Some(material_type) = &material.material_type {
            queue.push(
                ColumnKind::MaterialType.as_str(),
                Attribute::TermOrText(material_type.clone()),
            );
        }
        queue
    }

    fn from_process(process: &Process) -> Self {
        let mut queue = Self::default();
        if process.has_protocol() {
            queue.push(
                ColumnKind::ProtocolRef.as_str(),
                Attribute::Text(process.protocol_ref.clone()),
            );
        }
        if let (Some(name), Some(kind)) = (&process.name, process.name_type) {
            queue.push(kind.as_str(), Attribute::Text(name.clone()));
        }
        let texts = [
            (ColumnKind::Date, &process.date),
            (ColumnKind::Performer, &process.performer),
            (ColumnKind::ArrayDesignRef, &process.array_design_ref),
        ];
        for (kind, value) in texts {
            if let Some(value) = value {
                queue.push(kind.as_str(), Attribute::Text(value.clone()));
            }
        }
        for p in &process.parameter_values {
            queue.push(
                format!("{}[{}]", ColumnKind::ParameterValue, p.name),
                Attribute::Annotated {
                    values: p.value.clone(),
                    list: true,
                    unit: p.unit.clone(),
                },
            );
        }
        for c in &process.comments {
            queue.push(
                format!("{}[{}]", ColumnKind::Comment, c.name),
                Attribute::Text(c.value.clone()),
            );
        }
        let dimensions = [
            (ColumnKind::FirstDimension, &process.first_dimension),
            (ColumnKind::SecondDimension, &process.second_dimension),
        ];
        for (kind, value) in dimensions {
            if let Some(value) = value {
                queue.push(kind.as_str(), Attribute::TermOrText(value.clone()));
            }
        }
        queue
    }

    fn from_node(node: &Node) -> Self {
        match node {
            Node::Material(m) => Self::from_material(m),
            Node::Process(p) => Self::from_process(p),
        }
    }

    fn pop(&mut self, key: &str, node: &str) -> Result<Attribute, WriteError> {
        self.entries
            .get_mut(key)
            .and_then(VecDeque::pop_front)
            .ok_or_else(|| WriteError::MissingAttribute {
                header: key.to_string(),
                node: node.to_string(),
            })
    }

    fn queue_term_source(&mut self, value: &FreeTextOrTermRef) {
        if let Some(term) = value.as_term_ref() {
            self.push(
                TERM_SOURCE_KEY,
                Attribute::TermSource {
                    ontology: term.ontology_str().to_string(),
                    accession: term.accession_str().to_string(),
                },
            );
        }
    }

    /// Write the cells of one descriptor
    fn emit(
        &mut self,
        descriptor: &ColumnDescriptor,
        node: &str,
        cells: &mut Vec<String>,
    ) -> Result<(), WriteError> {
        let key = descriptor.key();
        match self.pop(&key, node)? {
            Attribute::Text(text) => cells.push(text),
            Attribute::TermOrText(value) => {
                cells.push(value.name().to_string());
                self.queue_term_source(&value);
            }
            Attribute::Annotated { values, list, unit } => {
                if list {
                    cells.push(join_escaped(values.iter().map(FreeTextOrTermRef::name)));
                } else {
                    cells.push(values.iter().map(FreeTextOrTermRef::name).collect());
                }
                let terms: Vec<_> = values.iter().filter_map(|v| v.as_term_ref()).collect();
                if !terms.is_empty() {
                    let joined = |part: fn(&OntologyTermRef) -> &str| {
                        if terms.iter().all(|t| part(t).is_empty()) {
                            String::new()
                        } else if list {
                            join_escaped(terms.iter().map(|t| part(t)))
                        } else {
                            terms.iter().map(|t| part(t)).collect()
                        }
                    };
                    self.push(
                        TERM_SOURCE_KEY,
                        Attribute::TermSource {
                            ontology: joined(OntologyTermRef::ontology_str),
                            accession: joined(OntologyTermRef::accession_str),
                        },
                    );
                }
                if let Some(unit) = unit {
                    self.push(UNIT_KEY, Attribute::TermOrText(unit));
                }
            }
            Attribute::TermSource {
                ontology,
                accession,
            } => {
                cells.push(ontology);
                cells.push(accession);
            }
        }
        Ok(())
    }

    /// Every queued attribute must have been written
    fn finish(self, node: &str) -> Result<(), WriteError> {
        let keys: Vec<String> = self
            .entries
            .into_iter()
            .filter(|(_, queue)| !queue.is_empty())
            .map(|(key, _)| key)
            .collect();
        if keys.is_empty() {
            Ok(())
        } else {
            Err(WriteError::LeftoverAttributes {
                node: node.to_string(),
                keys,
            })
        }
    }
}

/// Rebuild the header segment a node was read from
pub(crate) fn node_segment(node: &Node, file_type: FileType) -> Result<Segment, WriteError> {
    let unique_name = node.unique_name();
    if node.headers().is_empty() {
        return Err(WriteError::MissingHeaders {
            node: unique_name.to_string(),
        });
    }
    let descriptors = parse_header(node.headers(), file_type)?;
    let mut segments = group_columns(descriptors, file_type)?;
    match segments.len() {
        1 => Ok(segments.remove(0)),
        n => Err(WriteError::SplitHeaders {
            node: unique_name.to_string(),
            segments: n,
        }),
    }
}

/// Write the cells of one node following its header segment
pub(crate) fn node_cells(
    node: &Node,
    segment: &Segment,
    cells: &mut Vec<String>,
) -> Result<(), WriteError> {
    let mut queue = AttributeQueue::from_node(node);
    for descriptor in &segment.columns {
        queue.emit(descriptor, node.unique_name(), cells)?;
    }
    queue.finish(node.unique_name())
}
