/// Errors that can occur while reading an investigation file
#[derive(Debug, thiserror::Error)]
pub enum InvestigationError {
    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Malformed TSV
    #[error("TSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Key line before any section heading
    #[error("line {line}: key \"{key}\" outside of any section")]
    KeyOutsideSection {
        /// Key found
        key: String,
        /// One-based line number
        line: u64,
    },

    /// Upper-case line that is not a known section heading
    #[error("line {line}: unknown section \"{heading}\"")]
    UnknownSection {
        /// Heading found
        heading: String,
        /// One-based line number
        line: u64,
    },

    /// Study subsection before the first `STUDY` heading
    #[error("line {line}: section \"{heading}\" before any STUDY section")]
    MissingStudy {
        /// Heading found
        heading: String,
        /// One-based line number
        line: u64,
    },

    /// Key given twice in one section
    #[error("line {line}: key \"{key}\" repeated in section {section}")]
    RepeatedKey {
        /// Key found
        key: String,
        /// Section heading
        section: String,
        /// One-based line number
        line: u64,
    },

    /// Protocol column with content but no name
    #[error("protocol column {column} has no name")]
    UnnamedProtocol {
        /// Zero-based value column
        column: usize,
    },
}
