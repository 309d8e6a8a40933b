use std::path::PathBuf;

use crate::investigation::InvestigationError;
use crate::reader::ReadError;
use crate::writer::TableWriteError;

/// Errors that can occur during dataset operations
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// I/O error during file operations
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Investigation file could not be read
    #[error("Investigation error: {0}")]
    InvestigationError(#[from] InvestigationError),

    /// Study or assay table could not be read
    #[error("{}: {source}", path.display())]
    ReadError {
        /// Table file
        path: PathBuf,
        /// Underlying error
        source: ReadError,
    },

    /// Study or assay table could not be written
    #[error("{}: {source}", path.display())]
    WriteError {
        /// Table file
        path: PathBuf,
        /// Underlying error
        source: TableWriteError,
    },

    /// Output directory is the directory the dataset was read from
    #[error("Output directory is the input directory: {}", .0.display())]
    SameDirectory(PathBuf),

    /// Investigation path has no file name
    #[error("Invalid dataset path: {}", .0.display())]
    InvalidPath(PathBuf),
}
