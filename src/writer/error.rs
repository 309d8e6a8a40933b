use crate::serializer::WriteError;

/// Errors that can occur while writing a table
#[derive(Debug, thiserror::Error)]
pub enum TableWriteError {
    /// I/O error during file operations
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from the TSV encoder
    #[error("TSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Graph could not be laid out as rows
    #[error("Serialization error: {0}")]
    SerializeError(#[from] WriteError),

    /// Temporary file could not be moved into place
    #[error("I/O error: {0}")]
    PersistError(#[from] tempfile::PersistError),
}
