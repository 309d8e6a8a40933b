use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{Arc, Material, Node, Process};

/// Materials, processes and arcs of one study or assay table.
///
/// Maps keep first-seen order; the serializer relies on it to reproduce
/// the row order of the table the graph was read from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    /// Materials and data files by unique name
    pub materials: IndexMap<String, Material>,
    /// Processes by unique name
    pub processes: IndexMap<String, Process>,
    /// Deduplicated arcs in first-seen order
    pub arcs: Vec<Arc>,
}

impl Graph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of nodes
    pub fn node_count(&self) -> usize {
        self.materials.len() + self.processes.len()
    }

    /// Whether a node with this unique name exists
    pub fn contains(&self, unique_name: &str) -> bool {
        self.materials.contains_key(unique_name) || self.processes.contains_key(unique_name)
    }

    /// Look up a node by unique name
    pub fn node(&self, unique_name: &str) -> Option<Node> {
        self.materials
            .get(unique_name)
            .cloned()
            .map(Node::Material)
            .or_else(|| self.processes.get(unique_name).cloned().map(Node::Process))
    }

    /// Unique names of all nodes, materials first, each in insertion order
    pub fn node_names(&self) -> impl Iterator<Item = &str> {
        self.materials
            .keys()
            .chain(self.processes.keys())
            .map(String::as_str)
    }

    /// Insert a node, replacing any node with the same unique name
    pub fn insert(&mut self, node: Node) {
        match node {
            Node::Material(m) => {
                self.materials.insert(m.unique_name.clone(), m);
            }
            Node::Process(p) => {
                self.processes.insert(p.unique_name.clone(), p);
            }
        }
    }

    /// Arcs whose tail or head is not a node of this graph
    pub fn dangling_arcs(&self) -> impl Iterator<Item = &Arc> {
        self.arcs
            .iter()
            .filter(|a| !self.contains(&a.tail) || !self.contains(&a.head))
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
