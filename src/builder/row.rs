use std::collections::{HashMap, HashSet};

use super::{BuildError, NodeBuilder};
use crate::grouping::Segment;
use crate::header::ColumnKind;
use crate::model::Node;

/// Naming state shared by all rows of one table.
///
/// Unnamed nodes get `{prefix}-{n}` where `n` counts from 1 per prefix,
/// skipping names reserved by source and sample cells. Use one context per
/// file so two parses of the same table produce the same names.
#[derive(Debug, Clone, Default)]
pub struct BuildContext {
    counters: HashMap<String, usize>,
    reserved: HashSet<String>,
}

impl BuildContext {
    /// Create a context with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep a literal node name from being synthesized
    pub fn reserve(&mut self, name: impl Into<String>) {
        self.reserved.insert(name.into());
    }

    /// Next synthesized name for `prefix`
    pub fn next_name(&mut self, prefix: &str) -> String {
        let counter = self.counters.entry(prefix.to_string()).or_insert(0);
        loop {
            *counter += 1;
            let name = format!("{prefix}-{counter}");
            if !self.reserved.contains(&name) {
                return name;
            }
        }
    }
}

/// Builds the node sequence of one data row
#[derive(Debug, Clone)]
pub struct RowBuilder {
    builders: Vec<NodeBuilder>,
    width: usize,
}

impl RowBuilder {
    /// Create a row builder from grouped header segments
    pub fn new(segments: impl IntoIterator<Item = Segment>) -> Self {
        let builders: Vec<_> = segments.into_iter().map(NodeBuilder::new).collect();
        let width = builders.iter().map(|b| b.segment().width()).sum();
        Self { builders, width }
    }

    /// Physical columns a row must have
    pub fn width(&self) -> usize {
        self.width
    }

    /// Per-segment node builders
    pub fn builders(&self) -> &[NodeBuilder] {
        &self.builders
    }

    /// Reserve the source and sample names of a row, which are used as
    /// unique names verbatim. Call for every row before building any.
    pub fn reserve_names<S: AsRef<str>>(&self, row: &[S], ctx: &mut BuildContext) {
        for builder in &self.builders {
            let start = builder.segment().start();
            if matches!(start.kind, ColumnKind::SourceName | ColumnKind::SampleName) {
                if let Some(name) = row.get(start.col_no).map(AsRef::as_ref) {
                    if !name.is_empty() {
                        ctx.reserve(name);
                    }
                }
            }
        }
    }

    /// Build all nodes of one row, left to right
    pub fn build<S: AsRef<str>>(
        &self,
        row: &[S],
        ctx: &mut BuildContext,
    ) -> Result<Vec<Node>, BuildError> {
        if row.len() != self.width {
            return Err(BuildError::RowWidth {
                expected: self.width,
                found: row.len(),
            });
        }
        self.builders.iter().map(|b| b.build(row, ctx)).collect()
    }
}
