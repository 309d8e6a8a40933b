use serde::{Deserialize, Serialize};

use super::GroupingError;
use crate::header::{ColumnDescriptor, ColumnKind, FileType};

/// Role of the node a segment builds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentKind {
    /// Material or data file
    Material,
    /// Process
    Process,
}

impl SegmentKind {
    fn accepts(self, kind: ColumnKind) -> bool {
        match self {
            Self::Material => matches!(
                kind,
                ColumnKind::MaterialType
                    | ColumnKind::Characteristics
                    | ColumnKind::Comment
                    | ColumnKind::FactorValue
                    | ColumnKind::Label
                    | ColumnKind::TermSourceRef
                    | ColumnKind::Unit
            ),
            Self::Process => matches!(
                kind,
                ColumnKind::Performer
                    | ColumnKind::Date
                    | ColumnKind::ArrayDesignRef
                    | ColumnKind::FirstDimension
                    | ColumnKind::SecondDimension
                    | ColumnKind::ParameterValue
                    | ColumnKind::Comment
                    | ColumnKind::TermSourceRef
                    | ColumnKind::Unit
            ),
        }
    }
}

/// Contiguous run of header columns describing one node.
///
/// The first column always starts the node. Secondary descriptors stay in
/// `columns` at their header position and are referenced from the
/// annotation they qualify.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Node role
    pub kind: SegmentKind,
    /// Descriptors in header order
    pub columns: Vec<ColumnDescriptor>,
}

impl Segment {
    fn new(kind: SegmentKind, start: ColumnDescriptor) -> Self {
        Self {
            kind,
            columns: vec![start],
        }
    }

    /// Descriptor that opened this segment
    pub fn start(&self) -> &ColumnDescriptor {
        &self.columns[0]
    }

    /// Name column: the material name, or the process name if present
    pub fn name_column(&self) -> Option<&ColumnDescriptor> {
        match self.kind {
            SegmentKind::Material => Some(self.start()),
            SegmentKind::Process => self.columns.iter().find(|c| c.kind.is_process_name()),
        }
    }

    /// `Protocol REF` column of a process segment
    pub fn protocol_column(&self) -> Option<&ColumnDescriptor> {
        self.columns
            .iter()
            .find(|c| c.kind == ColumnKind::ProtocolRef)
    }

    /// Resolve a segment-local link
    pub fn linked(&self, index: Option<usize>) -> Option<&ColumnDescriptor> {
        index.and_then(|i| self.columns.get(i))
    }

    /// Number of physical columns covered
    pub fn width(&self) -> usize {
        self.columns.iter().map(|c| c.span).sum()
    }

    /// Header texts of all physical columns, in order
    pub fn header_strings(&self) -> Vec<String> {
        self.columns.iter().flat_map(|c| c.header_strings()).collect()
    }

    fn push(&mut self, descriptor: ColumnDescriptor) -> Result<(), GroupingError> {
        let column = descriptor.col_no;
        if !self.kind.accepts(descriptor.kind) {
            return Err(GroupingError::UnexpectedColumn {
                header: descriptor.key(),
                node: self.start().kind,
                column,
            });
        }
        if descriptor.kind.is_singular() && self.columns.iter().any(|c| c.kind == descriptor.kind) {
            return Err(GroupingError::DuplicateAnnotation {
                header: descriptor.key(),
                column,
            });
        }

        let index = self.columns.len();
        match descriptor.kind {
            // Qualifies the last column that is not itself a term source
            ColumnKind::TermSourceRef => {
                let target = self.qualify_target(&descriptor, |k| k != ColumnKind::TermSourceRef)?;
                if !target.kind.accepts_term_source() {
                    return Err(unsupported(&descriptor, target));
                }
                if target.term_source_ref.replace(index).is_some() {
                    return Err(GroupingError::DuplicateAnnotation {
                        header: descriptor.key(),
                        column,
                    });
                }
            }
            // Qualifies the last primary annotation
            ColumnKind::Unit => {
                let target = self.qualify_target(&descriptor, |k| !k.is_secondary())?;
                if !target.kind.accepts_unit() {
                    return Err(unsupported(&descriptor, target));
                }
                if target.unit.replace(index).is_some() {
                    return Err(GroupingError::DuplicateAnnotation {
                        header: descriptor.key(),
                        column,
                    });
                }
            }
            _ => {}
        }
        self.columns.push(descriptor);
        Ok(())
    }

    fn qualify_target(
        &mut self,
        qualifier: &ColumnDescriptor,
        eligible: impl Fn(ColumnKind) -> bool,
    ) -> Result<&mut ColumnDescriptor, GroupingError> {
        self.columns
            .iter_mut()
            .rev()
            .find(|c| eligible(c.kind))
            .filter(|c| !c.kind.is_node_start())
            .ok_or_else(|| GroupingError::OrphanSecondary {
                header: qualifier.key(),
                column: qualifier.col_no,
            })
    }
}

fn unsupported(qualifier: &ColumnDescriptor, target: &ColumnDescriptor) -> GroupingError {
    GroupingError::UnsupportedQualifier {
        qualifier: qualifier.key(),
        header: target.key(),
        column: qualifier.col_no,
    }
}

/// Partition header descriptors into node segments.
///
/// Material names and `Protocol REF` always open a segment. A process name
/// directly naming a preceding unnamed `Protocol REF` joins that segment;
/// any other process name opens a segment of its own.
pub fn group_columns(
    descriptors: impl IntoIterator<Item = ColumnDescriptor>,
    file_type: FileType,
) -> Result<Vec<Segment>, GroupingError> {
    let mut segments: Vec<Segment> = Vec::new();
    let mut unnamed_protocol = false;

    for mut descriptor in descriptors {
        // Links are segment-local and rebuilt here
        descriptor.term_source_ref = None;
        descriptor.unit = None;

        if file_type.starts_node(descriptor.kind) {
            if descriptor.kind.is_material_name() {
                segments.push(Segment::new(SegmentKind::Material, descriptor));
                unnamed_protocol = false;
            } else if descriptor.kind == ColumnKind::ProtocolRef {
                segments.push(Segment::new(SegmentKind::Process, descriptor));
                unnamed_protocol = true;
            } else {
                match segments.last_mut() {
                    Some(current) if unnamed_protocol => current.columns.push(descriptor),
                    _ => segments.push(Segment::new(SegmentKind::Process, descriptor)),
                }
                unnamed_protocol = false;
            }
            continue;
        }

        match segments.last_mut() {
            Some(current) => current.push(descriptor)?,
            None => {
                return Err(GroupingError::MissingNode {
                    header: descriptor.key(),
                    column: descriptor.col_no,
                })
            }
        }
    }

    Ok(segments)
}
