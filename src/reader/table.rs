use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::{ReadError, ReaderConfig};
use crate::assembler::assemble;
use crate::builder::{BuildContext, RowBuilder};
use crate::grouping::group_columns;
use crate::header::{FileType, HeaderParser};
use crate::model::Graph;

/// A study or assay table read into a graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedTable {
    /// Study or assay
    pub file_type: FileType,
    /// Header row as read
    pub header: Vec<String>,
    /// Assembled graph
    pub graph: Graph,
}

/// Reads one study or assay table
#[derive(Debug, Clone)]
pub struct TableReader {
    file_type: FileType,
    config: ReaderConfig,
    factors: Option<Vec<String>>,
}

impl TableReader {
    /// Create a reader for the given file type with default settings
    pub fn new(file_type: FileType) -> Self {
        Self {
            file_type,
            config: ReaderConfig::default(),
            factors: None,
        }
    }

    /// Use custom reader settings
    pub fn with_config(mut self, config: ReaderConfig) -> Self {
        self.config = config;
        self
    }

    /// Require `Factor Value[...]` labels to be among these names
    pub fn with_factors<I, S>(mut self, factors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.factors = Some(factors.into_iter().map(Into::into).collect());
        self
    }

    /// Read a table from a file
    pub fn read_path(&self, path: impl AsRef<Path>) -> Result<ParsedTable, ReadError> {
        let path = path.as_ref();
        debug!("Reading {} table {}", self.file_type, path.display());
        self.read(File::open(path)?)
    }

    /// Read a table from any byte source
    pub fn read<R: Read>(&self, reader: R) -> Result<ParsedTable, ReadError> {
        let mut csv = self.config.csv_builder().from_reader(reader);
        let mut records = csv.records();

        let header: Vec<String> = match records.next() {
            Some(record) => record?.iter().map(str::to_string).collect(),
            None => return Err(ReadError::NoHeader),
        };

        let parser = HeaderParser::new(header.iter(), self.file_type);
        let descriptors = match &self.factors {
            Some(factors) => parser.with_factors(factors.iter().cloned()).collect(),
            None => parser.collect::<Result<Vec<_>, _>>(),
        }?;
        let builder = RowBuilder::new(group_columns(descriptors, self.file_type)?);

        let mut ctx = BuildContext::new();
        let mut lines = Vec::new();
        for record in records {
            let record = record?;
            let line = record.position().map_or(0, |p| p.line());
            let cells: Vec<String> = record.iter().map(str::to_string).collect();
            builder.reserve_names(&cells, &mut ctx);
            lines.push((line, cells));
        }

        let mut seen = HashSet::new();
        let mut rows = Vec::with_capacity(lines.len());
        for (line, cells) in lines {
            let nodes = builder
                .build(&cells, &mut ctx)
                .map_err(|source| ReadError::BuildError { line, source })?;
            if !seen.insert(cells) {
                warn!("Duplicate row at line {line} in {} table", self.file_type);
            }
            rows.push(nodes);
        }

        let row_count = rows.len();
        let graph = assemble(rows)?;
        info!(
            "Read {} table: {} rows, {} nodes, {} arcs",
            self.file_type,
            row_count,
            graph.node_count(),
            graph.arcs.len()
        );

        Ok(ParsedTable {
            file_type: self.file_type,
            header,
            graph,
        })
    }
}
