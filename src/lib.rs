//! # isatab - ISA-Tab study and assay tables as provenance graphs
//!
//! `isatab` reads the tab-separated study (`s_*.txt`) and assay (`a_*.txt`)
//! tables of an ISA-Tab dataset into directed graphs of materials and
//! processes, validates them against the investigation's declarations, and
//! writes them back out as tables.
//!
//! ## Key Features
//!
//! - **Lossless round trip**: a table read and written again reproduces the
//!   same columns, rows and cell values, including ontology term references,
//!   units and `;`-separated list values.
//!
//! - **Explicit graph model**: every row becomes a chain of nodes; rows
//!   sharing a node share it in the graph, and the graph can be dumped as
//!   JSON or Graphviz dot.
//!
//! - **Strict parsing, lenient validation**: malformed headers and cells are
//!   errors with column and line numbers; questionable but representable
//!   content is reported by the [`validator`] with a severity.
//!
//! ## Quick Start
//!
//! ```rust
//! use isatab::prelude::*;
//!
//! let tsv = "Source Name\tCharacteristics[organism]\tProtocol REF\tSample Name\n\
//!            src1\tmouse\tcollect\tsample1\n\
//!            src1\tmouse\tcollect\tsample2\n";
//!
//! let table = TableReader::new(FileType::Study).read(tsv.as_bytes())?;
//! assert_eq!(table.graph.materials.len(), 3);
//! assert_eq!(table.graph.processes.len(), 2);
//!
//! let text = TableWriter::default().graph_to_string(&table.graph, FileType::Study)?;
//! assert_eq!(text, tsv);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Whole Datasets
//!
//! ```rust,no_run
//! use isatab::prelude::*;
//!
//! let dataset = IsaDataset::open("data/i_investigation.txt")?;
//! let report = dataset.validate();
//! if report.has_critical() {
//!     eprintln!("{}", report);
//! }
//! dataset.write_to("normalized", &WriterConfig::quoted(b'"'))?;
//! # Ok::<(), DatasetError>(())
//! ```
//!
//! ## Architecture
//!
//! Reading runs through the pipeline stages in order; writing runs the
//! [`serializer`] over an assembled graph.
//!
//! | Module | Stage |
//! |--------|-------|
//! | [`header`] | Header row → typed column descriptors |
//! | [`grouping`] | Descriptors → one segment per node |
//! | [`builder`] | Data row + segments → nodes |
//! | [`assembler`] | Rows of nodes → deduplicated graph |
//! | [`serializer`] | Graph → header and rows |
//! | [`reader`] / [`writer`] | TSV input and output |
//! | [`investigation`] | Investigation file declarations |
//! | [`validator`] | Non-fatal checks |
//! | [`dataset`] | Investigation plus all referenced tables |
//! | [`dot`] | Graphviz export |

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod assembler;
pub mod builder;
pub mod constants;
pub mod dataset;
pub mod dot;
pub mod grouping;
pub mod header;
pub mod investigation;
pub mod model;
pub mod reader;
pub mod serializer;
pub mod validator;
pub mod writer;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::dataset::{DatasetError, IsaDataset, StudyTables};
    pub use crate::header::{ColumnKind, FileType};
    pub use crate::investigation::{InvestigationError, InvestigationReader};
    pub use crate::model::{
        Arc, FreeTextOrTermRef, Graph, InvestigationInfo, Material, Node, OntologyTermRef,
        Process,
    };
    pub use crate::reader::{ParsedTable, ReadError, ReaderConfig, TableReader};
    pub use crate::serializer::{serialize, TsvTable, WriteError};
    pub use crate::validator::{Severity, ValidationReport, ValidationWarning};
    pub use crate::writer::{LineTerminator, TableWriteError, TableWriter, WriterConfig};
}
