use crate::assembler::AssemblyError;
use crate::builder::BuildError;
use crate::grouping::GroupingError;
use crate::header::HeaderError;

/// Errors that can occur while reading a study or assay table
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Malformed TSV
    #[error("TSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// File has no header row
    #[error("table has no header row")]
    NoHeader,

    /// Header row does not tokenize
    #[error("Header error: {0}")]
    HeaderError(#[from] HeaderError),

    /// Header columns do not group into nodes
    #[error("Header error: {0}")]
    GroupingError(#[from] GroupingError),

    /// Data row does not build
    #[error("line {line}: {source}")]
    BuildError {
        /// One-based line number in the file
        line: u64,
        /// Underlying error
        source: BuildError,
    },

    /// Rows do not assemble into a graph
    #[error("Assembly error: {0}")]
    AssemblyError(#[from] AssemblyError),
}
