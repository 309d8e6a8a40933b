use crate::header::ColumnKind;

/// Errors raised while partitioning header descriptors into node segments
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GroupingError {
    /// Annotation that is allowed once per node was seen again
    #[error("seen \"{header}\" header for same entity in column {column}")]
    DuplicateAnnotation {
        /// Repeated header text
        header: String,
        /// Zero-based column number of the repetition
        column: usize,
    },

    /// `Term Source REF` or `Unit` with no annotation before it in its node
    #[error("no primary annotation to qualify with \"{header}\" in column {column}")]
    OrphanSecondary {
        /// Secondary header text
        header: String,
        /// Zero-based column number
        column: usize,
    },

    /// Annotation that cannot carry the given qualifier
    #[error("\"{qualifier}\" not supported for annotation \"{header}\" (column {column})")]
    UnsupportedQualifier {
        /// `Term Source REF` or `Unit`
        qualifier: String,
        /// Annotation the qualifier would attach to
        header: String,
        /// Zero-based column number of the qualifier
        column: usize,
    },

    /// Annotation that does not belong to the node it follows
    #[error("column \"{header}\" cannot annotate a {node} node (column {column})")]
    UnexpectedColumn {
        /// Offending header text
        header: String,
        /// Kind that started the node
        node: ColumnKind,
        /// Zero-based column number
        column: usize,
    },

    /// Header does not start with a node column
    #[error("column \"{header}\" precedes any node column (column {column})")]
    MissingNode {
        /// Offending header text
        header: String,
        /// Zero-based column number
        column: usize,
    },
}
