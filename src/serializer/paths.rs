use std::collections::HashMap;

use super::union_find::UnionFind;
use super::WriteError;
use crate::header::ColumnKind;
use crate::model::Graph;

/// Index-based view of a graph used for the walk
struct Walker<'a> {
    names: Vec<&'a str>,
    outgoing: Vec<Vec<usize>>,
    on_path: Vec<bool>,
    covered: Vec<bool>,
    path: Vec<usize>,
    rows: Vec<Vec<usize>>,
}

impl Walker<'_> {
    fn walk(&mut self, vertex: usize) -> Result<(), WriteError> {
        self.path.push(vertex);
        self.on_path[vertex] = true;
        self.covered[vertex] = true;

        if self.outgoing[vertex].is_empty() {
            self.rows.push(self.path.clone());
        } else {
            for i in 0..self.outgoing[vertex].len() {
                let next = self.outgoing[vertex][i];
                if self.on_path[next] {
                    return Err(WriteError::CycleDetected {
                        unique_name: self.names[next].to_string(),
                    });
                }
                self.walk(next)?;
            }
        }

        self.on_path[vertex] = false;
        self.path.pop();
        Ok(())
    }
}

/// Enumerate every root-to-leaf path of the graph.
///
/// Components are visited in order of their first node (materials, then
/// processes, each in insertion order). Within a component, paths start
/// from the nodes of `starting_kind` in the same global order and follow
/// arcs depth first, one row per leaf reached.
pub fn enumerate_paths(
    graph: &Graph,
    starting_kind: ColumnKind,
) -> Result<Vec<Vec<String>>, WriteError> {
    let names: Vec<&str> = graph.node_names().collect();
    let kinds: Vec<ColumnKind> = graph
        .materials
        .values()
        .map(|m| m.node_type)
        .chain(
            graph
                .processes
                .values()
                .map(|p| p.name_type.unwrap_or(ColumnKind::ProtocolRef)),
        )
        .collect();
    let index: HashMap<&str, usize> = names.iter().enumerate().map(|(i, &n)| (n, i)).collect();

    let lookup = |name: &str| {
        index
            .get(name)
            .copied()
            .ok_or_else(|| WriteError::UnknownNode {
                unique_name: name.to_string(),
            })
    };

    let mut outgoing = vec![Vec::new(); names.len()];
    let mut sets = UnionFind::new(names.len());
    for arc in &graph.arcs {
        let (tail, head) = (lookup(&arc.tail)?, lookup(&arc.head)?);
        outgoing[tail].push(head);
        sets.union(tail, head);
    }

    // Components keyed by set root, ordered by first member
    let mut component_of_root: HashMap<usize, usize> = HashMap::new();
    let mut components: Vec<Vec<usize>> = Vec::new();
    for vertex in 0..names.len() {
        let root = sets.find(vertex);
        let component = *component_of_root.entry(root).or_insert_with(|| {
            components.push(Vec::new());
            components.len() - 1
        });
        components[component].push(vertex);
    }

    let mut walker = Walker {
        on_path: vec![false; names.len()],
        covered: vec![false; names.len()],
        names,
        outgoing,
        path: Vec::new(),
        rows: Vec::new(),
    };
    for component in &components {
        for &vertex in component.iter().filter(|&&v| kinds[v] == starting_kind) {
            walker.walk(vertex)?;
        }
    }

    if let Some(vertex) = walker.covered.iter().position(|c| !c) {
        return Err(WriteError::UnreachableNode {
            unique_name: walker.names[vertex].to_string(),
        });
    }

    Ok(walker
        .rows
        .iter()
        .map(|row| row.iter().map(|&v| walker.names[v].to_string()).collect())
        .collect())
}
