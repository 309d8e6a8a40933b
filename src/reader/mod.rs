//! # Table Reader
//!
//! Reads a tab-separated study or assay table into a [`Graph`](crate::model::Graph):
//! header row → [`crate::header`] → [`crate::grouping`] → [`crate::builder`]
//! per data row → [`crate::assembler`].
//!
//! Lines starting with `#` are skipped, blank lines are ignored, and cells
//! may be wrapped in `"`. Any error aborts the whole file.
//!
//! ## Example
//!
//! ```rust
//! use isatab::header::FileType;
//! use isatab::reader::TableReader;
//!
//! let tsv = "Source Name\tProtocol REF\tSample Name\nsrc1\tcollect\tsample1\n";
//! let table = TableReader::new(FileType::Study).read(tsv.as_bytes())?;
//! assert_eq!(table.graph.node_count(), 3);
//! assert!(table.graph.contains("collect-1"));
//! # Ok::<(), isatab::reader::ReadError>(())
//! ```

mod config;
mod error;
mod table;


pub use config::ReaderConfig;
pub use error::ReadError;
pub use table::{ParsedTable, TableReader};
