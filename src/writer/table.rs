use std::io::{self, Write};
use std::path::Path;

use log::debug;

use super::{TableWriteError, WriterConfig};
use crate::header::FileType;
use crate::model::Graph;
use crate::serializer::{serialize, TsvTable};

/// Writes study and assay tables as TSV
#[derive(Debug, Clone, Default)]
pub struct TableWriter {
    config: WriterConfig,
}

impl TableWriter {
    /// Create a writer with the given settings
    pub fn new(config: WriterConfig) -> Self {
        Self { config }
    }

    /// Settings in use
    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// Write a laid-out table. An empty table writes nothing.
    pub fn write_table<W: Write>(&self, table: &TsvTable, writer: W) -> Result<(), TableWriteError> {
        let mut csv = self.config.csv_builder().from_writer(writer);
        if !table.header.is_empty() {
            csv.write_record(&table.header)?;
        }
        for row in &table.rows {
            csv.write_record(row)?;
        }
        csv.flush()?;
        Ok(())
    }

    /// Serialize a graph and write it
    pub fn write_graph<W: Write>(
        &self,
        graph: &Graph,
        file_type: FileType,
        writer: W,
    ) -> Result<(), TableWriteError> {
        let table = serialize(graph, file_type)?;
        self.write_table(&table, writer)
    }

    /// Serialize a graph into a string
    pub fn graph_to_string(
        &self,
        graph: &Graph,
        file_type: FileType,
    ) -> Result<String, TableWriteError> {
        let mut buffer = Vec::new();
        self.write_graph(graph, file_type, &mut buffer)?;
        String::from_utf8(buffer)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
    }

    /// Serialize a graph into a file.
    ///
    /// The table is written to a temporary file next to `path` and moved
    /// into place once complete, so a failed write leaves no partial file.
    pub fn write_path(
        &self,
        graph: &Graph,
        file_type: FileType,
        path: impl AsRef<Path>,
    ) -> Result<(), TableWriteError> {
        let path = path.as_ref();
        let table = serialize(graph, file_type)?;
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let mut file = tempfile::NamedTempFile::new_in(dir)?;
        self.write_table(&table, &mut file)?;
        file.persist(path)?;

        debug!("Wrote {} rows to {}", table.rows.len(), path.display());
        Ok(())
    }
}
