//! # Graph-to-Table Serializer
//!
//! Turns a [`Graph`] back into the rows of a study or assay table.
//!
//! ## Algorithm
//!
//! 1. **Partition**: union-find over the arcs yields the weakly connected
//!    components, ordered by their first node.
//! 2. **Roots**: nodes of the file type's starting kind (`Source Name` for
//!    studies, `Sample Name` for assays), in global node order.
//! 3. **Paths**: depth-first walk from each root, one row per leaf. Fan-out
//!    repeats the shared prefix.
//! 4. **Columns**: the nodes of the first row define the header. Each node's
//!    attributes are queued by header key and drained in header order; a
//!    column without an attribute or an attribute without a column is an
//!    error.
//!
//! Ordering depends only on insertion order, so writing a freshly read
//! graph reproduces the rows of the original table.

mod columns;
mod error;
mod paths;
mod union_find;


use log::debug;
use serde::{Deserialize, Serialize};

use crate::header::FileType;
use crate::model::{Graph, Node};

pub use error::WriteError;
pub use paths::enumerate_paths;

/// Header and data rows of one table, ready to be written
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TsvTable {
    /// Header row
    pub header: Vec<String>,
    /// Data rows, each as wide as the header
    pub rows: Vec<Vec<String>>,
}

fn lookup(graph: &Graph, unique_name: &str) -> Result<Node, WriteError> {
    graph
        .node(unique_name)
        .ok_or_else(|| WriteError::UnknownNode {
            unique_name: unique_name.to_string(),
        })
}

/// Serialize a graph into header and rows.
///
/// An empty graph yields an empty table.
pub fn serialize(graph: &Graph, file_type: FileType) -> Result<TsvTable, WriteError> {
    let paths = enumerate_paths(graph, file_type.starting_kind())?;
    let Some(first) = paths.first() else {
        return Ok(TsvTable::default());
    };

    let template = first
        .iter()
        .map(|name| columns::node_segment(&lookup(graph, name)?, file_type))
        .collect::<Result<Vec<_>, _>>()?;
    let header = template.iter().flat_map(|s| s.header_strings()).collect();

    let mut rows = Vec::with_capacity(paths.len());
    for (row, path) in paths.iter().enumerate() {
        if path.len() != template.len() {
            return Err(WriteError::RowWidthMismatch {
                expected: template.len(),
                found: path.len(),
                row,
            });
        }
        let mut cells = Vec::new();
        for (name, segment) in path.iter().zip(&template) {
            columns::node_cells(&lookup(graph, name)?, segment, &mut cells)?;
        }
        rows.push(cells);
    }

    debug!("Serialized {} nodes into {} rows", graph.node_count(), rows.len());
    Ok(TsvTable { header, rows })
}
