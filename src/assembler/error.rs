/// Errors raised while merging built rows into one graph
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssemblyError {
    /// Row built a different number of nodes than the first row
    #[error("row {row} has {found} nodes, expected {expected}")]
    InconsistentRowWidth {
        /// Node count of the first row
        expected: usize,
        /// Node count of the offending row
        found: usize,
        /// Zero-based row index
        row: usize,
    },

    /// Row whose first node has no name in the table
    #[error("found start node without original name: {unique_name}")]
    UnnamedStartNode {
        /// Synthesized name of the node
        unique_name: String,
    },

    /// Two nodes share a unique name but differ in content
    #[error("found nodes with same name but different annotation: {unique_name}")]
    ConflictingDefinition {
        /// Shared unique name
        unique_name: String,
    },
}
