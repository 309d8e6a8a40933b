use crate::header::ColumnKind;

/// Errors raised while building nodes from one data row
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// Row has a different number of cells than the header
    #[error("row has {found} cells, header expects {expected}")]
    RowWidth {
        /// Physical header width
        expected: usize,
        /// Cells in the row
        found: usize,
    },

    /// `Date` cell not in `YYYY-MM-DD` form
    #[error("invalid ISO 8601 date \"{value}\" in column {column}")]
    DateFormat {
        /// Offending cell
        value: String,
        /// Zero-based column number
        column: usize,
    },

    /// Empty name cell next to annotation content
    #[error("annotated {kind} without name in column {column}")]
    AnnotatedWithoutName {
        /// Material or data file column
        kind: ColumnKind,
        /// Zero-based column number of the name
        column: usize,
    },

    /// Empty `Protocol REF` cell
    #[error("missing protocol reference in column {column}")]
    MissingProtocolRef {
        /// Zero-based column number
        column: usize,
    },

    /// List-valued term cell whose ontology or accession list has a
    /// different length than its value list
    #[error("\"{header}\" has {values} values but {terms} term references (column {column})")]
    TermListMismatch {
        /// Annotation header text
        header: String,
        /// Number of `;`-separated values
        values: usize,
        /// Number of `;`-separated ontology names or accessions
        terms: usize,
        /// Zero-based column number of the annotation
        column: usize,
    },
}
