use super::FileType;

/// Errors raised while tokenizing a table header row
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HeaderError {
    /// Header is known but not permitted in this file type
    #[error("header \"{header}\" not allowed in {file_type} file (column {column})")]
    NotAllowed {
        /// Offending header text
        header: String,
        /// File type being parsed
        file_type: FileType,
        /// Zero-based column number
        column: usize,
    },

    /// `Term Source REF` is the last token, so its accession column is missing
    #[error("expected a term accession column after \"Term Source REF\" in column {column}")]
    MalformedTermRef {
        /// Zero-based column number of the `Term Source REF`
        column: usize,
    },

    /// Labeled header without a single `[...]` label
    #[error("problem parsing labeled header \"{header}\" in column {column}")]
    MalformedLabel {
        /// Offending header text
        header: String,
        /// Zero-based column number
        column: usize,
    },

    /// `Factor Value[...]` naming a factor the investigation does not declare
    #[error("factor \"{factor}\" not declared in investigation (column {column})")]
    UndeclaredFactor {
        /// Factor label
        factor: String,
        /// Zero-based column number
        column: usize,
    },

    /// Header text matches no known column kind
    #[error("header \"{header}\" unknown in column {column}")]
    UnknownHeader {
        /// Offending header text
        header: String,
        /// Zero-based column number
        column: usize,
    },
}
