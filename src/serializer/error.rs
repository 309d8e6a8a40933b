use crate::grouping::GroupingError;
use crate::header::HeaderError;

/// Errors raised while turning a graph back into table rows
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WriteError {
    /// Path has a different number of nodes than the header template
    #[error("row {row} has {found} nodes but the header has {expected} node groups")]
    RowWidthMismatch {
        /// Node groups in the header template
        expected: usize,
        /// Nodes on the path
        found: usize,
        /// Zero-based row index
        row: usize,
    },

    /// Node attributes left over after every header column was filled
    #[error("leftover attributes {keys:?} on node {node}")]
    LeftoverAttributes {
        /// Unique name of the node
        node: String,
        /// Header keys of the unconsumed attributes
        keys: Vec<String>,
    },

    /// Header column with no matching attribute on the node
    #[error("no attribute for column \"{header}\" on node {node}")]
    MissingAttribute {
        /// Header key of the column
        header: String,
        /// Unique name of the node
        node: String,
    },

    /// Template node has no stored header columns
    #[error("node {node} has no header columns")]
    MissingHeaders {
        /// Unique name of the node
        node: String,
    },

    /// Stored header columns of a template node describe more than one node
    #[error("header columns of node {node} split into {segments} node groups")]
    SplitHeaders {
        /// Unique name of the node
        node: String,
        /// Number of groups found
        segments: usize,
    },

    /// Arc naming a node that is not in the graph
    #[error("arc refers to unknown node {unique_name}")]
    UnknownNode {
        /// Name used by the arc
        unique_name: String,
    },

    /// Node not on any row starting from a start node
    #[error("node {unique_name} is not reachable from any start node")]
    UnreachableNode {
        /// Unique name of the node
        unique_name: String,
    },

    /// Arcs form a cycle
    #[error("cycle detected at node {unique_name}")]
    CycleDetected {
        /// Node closing the cycle
        unique_name: String,
    },

    /// Stored node headers no longer tokenize
    #[error("invalid stored header: {0}")]
    Header(#[from] HeaderError),

    /// Stored node headers no longer group
    #[error("invalid stored header: {0}")]
    Grouping(#[from] GroupingError),
}
