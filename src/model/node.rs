use serde::{Deserialize, Serialize};

use super::FreeTextOrTermRef;
use crate::constants::TOKEN_UNKNOWN;
use crate::header::ColumnKind;

/// `Comment[name]` cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Comment label
    pub name: String,
    /// Cell value
    pub value: String,
}

/// `Characteristics[name]` cell with optional unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Characteristic {
    /// Characteristic label
    pub name: String,
    /// One or more values (`;`-separated in the table)
    pub value: Vec<FreeTextOrTermRef>,
    /// Unit, present whenever the column has a `Unit`
    pub unit: Option<FreeTextOrTermRef>,
}

/// `Factor Value[name]` cell with optional unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorValue {
    /// Factor label
    pub name: String,
    /// Value
    pub value: FreeTextOrTermRef,
    /// Unit, present whenever the column has a `Unit`
    pub unit: Option<FreeTextOrTermRef>,
}

/// `Parameter Value[name]` cell with optional unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterValue {
    /// Parameter label
    pub name: String,
    /// One or more values (`;`-separated in the table)
    pub value: Vec<FreeTextOrTermRef>,
    /// Unit, present whenever the column has a `Unit`
    pub unit: Option<FreeTextOrTermRef>,
}

/// Material or data file node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    /// Name column kind, e.g. `Sample Name` or `Raw Data File`
    pub node_type: ColumnKind,
    /// Identity within one table's graph
    pub unique_name: String,
    /// Original name cell, possibly empty
    pub name: String,
    /// `Label` annotation
    pub extract_label: Option<FreeTextOrTermRef>,
    /// `Characteristics[*]` annotations
    pub characteristics: Vec<Characteristic>,
    /// `Comment[*]` annotations
    pub comments: Vec<Comment>,
    /// `Factor Value[*]` annotations
    pub factor_values: Vec<FactorValue>,
    /// `Material Type` annotation
    pub material_type: Option<FreeTextOrTermRef>,
    /// Header columns this node was read from
    pub headers: Vec<String>,
}

impl Material {
    /// Any annotation carries content
    pub fn is_annotated(&self) -> bool {
        self.characteristics
            .iter()
            .any(|c| c.value.iter().any(FreeTextOrTermRef::has_content))
            || self.comments.iter().any(|c| !c.value.is_empty())
            || self.factor_values.iter().any(|f| f.value.has_content())
            || self.extract_label.as_ref().is_some_and(FreeTextOrTermRef::has_content)
            || self.material_type.as_ref().is_some_and(FreeTextOrTermRef::has_content)
    }

    fn eq_ignoring_unique_name(&self, other: &Self) -> bool {
        self.node_type == other.node_type
            && self.name == other.name
            && self.extract_label == other.extract_label
            && self.characteristics == other.characteristics
            && self.comments == other.comments
            && self.factor_values == other.factor_values
            && self.material_type == other.material_type
            && self.headers == other.headers
    }
}

/// Process node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Referenced protocol, `Unknown` without a `Protocol REF` column
    pub protocol_ref: String,
    /// Identity within one table's graph
    pub unique_name: String,
    /// Original name cell when a name column exists
    pub name: Option<String>,
    /// Name column kind, e.g. `Assay Name`
    pub name_type: Option<ColumnKind>,
    /// `Date` cell as validated `YYYY-MM-DD` text, empty for a blank cell
    pub date: Option<String>,
    /// `Performer` cell
    pub performer: Option<String>,
    /// `Parameter Value[*]` annotations
    pub parameter_values: Vec<ParameterValue>,
    /// `Comment[*]` annotations
    pub comments: Vec<Comment>,
    /// `Array Design REF` cell
    pub array_design_ref: Option<String>,
    /// `First Dimension` annotation
    pub first_dimension: Option<FreeTextOrTermRef>,
    /// `Second Dimension` annotation
    pub second_dimension: Option<FreeTextOrTermRef>,
    /// Header columns this node was read from
    pub headers: Vec<String>,
}

impl Process {
    /// Parsed date, if the cell is non-empty and well formed
    pub fn parsed_date(&self) -> Option<chrono::NaiveDate> {
        self.date
            .as_deref()
            .filter(|d| !d.is_empty())
            .and_then(|d| chrono::NaiveDate::parse_from_str(d, crate::constants::DATE_FORMAT).ok())
    }

    /// Whether the process references a protocol
    pub fn has_protocol(&self) -> bool {
        self.protocol_ref != TOKEN_UNKNOWN
    }

    fn eq_ignoring_unique_name(&self, other: &Self) -> bool {
        self.protocol_ref == other.protocol_ref
            && self.name == other.name
            && self.name_type == other.name_type
            && self.date == other.date
            && self.performer == other.performer
            && self.parameter_values == other.parameter_values
            && self.comments == other.comments
            && self.array_design_ref == other.array_design_ref
            && self.first_dimension == other.first_dimension
            && self.second_dimension == other.second_dimension
            && self.headers == other.headers
    }
}

/// A node of a study or assay graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "lowercase")]
pub enum Node {
    /// Material or data file
    Material(Material),
    /// Process
    Process(Process),
}

impl Node {
    /// Identity key
    pub fn unique_name(&self) -> &str {
        match self {
            Self::Material(m) => &m.unique_name,
            Self::Process(p) => &p.unique_name,
        }
    }

    pub(crate) fn set_unique_name(&mut self, unique_name: String) {
        match self {
            Self::Material(m) => m.unique_name = unique_name,
            Self::Process(p) => p.unique_name = unique_name,
        }
    }

    /// Original name cell, empty when absent
    pub fn name(&self) -> &str {
        match self {
            Self::Material(m) => &m.name,
            Self::Process(p) => p.name.as_deref().unwrap_or(""),
        }
    }

    /// Whether the table gave this node a name
    pub fn has_original_name(&self) -> bool {
        !self.name().is_empty()
    }

    /// Column kind naming the node (`Protocol REF` for unnamed processes)
    pub fn node_type(&self) -> ColumnKind {
        match self {
            Self::Material(m) => m.node_type,
            Self::Process(p) => p.name_type.unwrap_or(ColumnKind::ProtocolRef),
        }
    }

    /// Header columns this node was read from
    pub fn headers(&self) -> &[String] {
        match self {
            Self::Material(m) => &m.headers,
            Self::Process(p) => &p.headers,
        }
    }

    /// Same role and content; `unique_name` is not compared
    pub fn eq_ignoring_unique_name(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Material(a), Self::Material(b)) => a.eq_ignoring_unique_name(b),
            (Self::Process(a), Self::Process(b)) => a.eq_ignoring_unique_name(b),
            _ => false,
        }
    }
}

/// Directed edge between two nodes, by unique name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Arc {
    /// Source node
    pub tail: String,
    /// Target node
    pub head: String,
}

impl Arc {
    /// Create an arc
    pub fn new(tail: impl Into<String>, head: impl Into<String>) -> Self {
        Self {
            tail: tail.into(),
            head: head.into(),
        }
    }
}
