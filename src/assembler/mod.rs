//! # Table Assembler
//!
//! Merges the node rows of one table into a [`Graph`].
//!
//! Consecutive nodes of a row are joined by an [`Arc`]. Nodes are keyed by
//! unique name and arcs are deduplicated, both keeping first-seen order.
//!
//! Unnamed nodes get a fresh synthesized name in every row. Before merging,
//! an unnamed node is collapsed onto an earlier one when both sit at the
//! same row position between the same named neighbours and carry the same
//! content, so a table that repeats an anonymous step across rows yields a
//! single node.

mod error;

#[cfg(test)]
mod tests;

use std::collections::{HashMap, HashSet};

use log::debug;

use crate::model::{Arc, Graph, Node};

pub use error::AssemblyError;

type CollapseKey = (usize, String, Option<String>);

/// Build a graph from the nodes of each data row
pub fn assemble(mut rows: Vec<Vec<Node>>) -> Result<Graph, AssemblyError> {
    if let Some(expected) = rows.first().map(Vec::len) {
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != expected)
        {
            return Err(AssemblyError::InconsistentRowWidth {
                expected,
                found,
                row,
            });
        }
    }

    collapse_anonymous(&mut rows)?;

    let mut graph = Graph::new();
    let mut seen_arcs = HashSet::new();
    for row in rows {
        for pair in row.windows(2) {
            let arc = Arc::new(pair[0].unique_name(), pair[1].unique_name());
            if seen_arcs.insert(arc.clone()) {
                graph.arcs.push(arc);
            }
        }
        for node in row {
            merge(&mut graph, node)?;
        }
    }

    debug!(
        "Assembled graph with {} materials, {} processes, {} arcs",
        graph.materials.len(),
        graph.processes.len(),
        graph.arcs.len()
    );
    Ok(graph)
}

fn collapse_anonymous(rows: &mut [Vec<Node>]) -> Result<(), AssemblyError> {
    let mut first_seen: HashMap<CollapseKey, Node> = HashMap::new();

    for row in rows.iter_mut() {
        let Some(start) = row.first() else {
            continue;
        };
        if !start.has_original_name() {
            return Err(AssemblyError::UnnamedStartNode {
                unique_name: start.unique_name().to_string(),
            });
        }

        for idx in 1..row.len() {
            if row[idx].has_original_name() {
                continue;
            }
            let before = row[..idx]
                .iter()
                .rev()
                .find(|n| n.has_original_name())
                .map(|n| n.unique_name().to_string())
                .unwrap_or_default();
            let after = row[idx + 1..]
                .iter()
                .find(|n| n.has_original_name())
                .map(|n| n.unique_name().to_string());

            match first_seen.get(&(idx, before.clone(), after.clone())) {
                Some(seen) if seen.eq_ignoring_unique_name(&row[idx]) => {
                    row[idx].set_unique_name(seen.unique_name().to_string());
                }
                Some(_) => {}
                None => {
                    first_seen.insert((idx, before, after), row[idx].clone());
                }
            }
        }
    }
    Ok(())
}

fn merge(graph: &mut Graph, node: Node) -> Result<(), AssemblyError> {
    let conflict = match &node {
        Node::Material(m) => {
            graph.processes.contains_key(&m.unique_name)
                || graph.materials.get(&m.unique_name).is_some_and(|e| e != m)
        }
        Node::Process(p) => {
            graph.materials.contains_key(&p.unique_name)
                || graph.processes.get(&p.unique_name).is_some_and(|e| e != p)
        }
    };
    if conflict {
        return Err(AssemblyError::ConflictingDefinition {
            unique_name: node.unique_name().to_string(),
        });
    }
    if !graph.contains(node.unique_name()) {
        graph.insert(node);
    }
    Ok(())
}
