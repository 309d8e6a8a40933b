//! # Header Grammar
//!
//! Tokenizes the first row of a study or assay table into typed
//! [`ColumnDescriptor`]s.
//!
//! ## Token rules
//!
//! 1. `Term Source REF` consumes the following token as its accession column
//!    and spans two physical columns.
//! 2. Exact matches of a known header (e.g. `Sample Name`, `Protocol REF`,
//!    `Unit`) span one column.
//! 3. `Characteristics[..]`, `Comment[..]`, `Factor Value[..]` and
//!    `Parameter Value[..]` carry a bracketed label.
//! 4. Anything else is an [`HeaderError::UnknownHeader`].
//!
//! Each [`FileType`] has a static table of allowed kinds; study files accept
//! no assay-only headers such as `Extract Name` or `Label`.
//!
//! ```
//! use isatab::header::{parse_header, ColumnKind, FileType};
//!
//! let header = parse_header(
//!     ["Source Name", "Characteristics[organism]", "Term Source REF", "Term Accession Number"],
//!     FileType::Study,
//! )?;
//! assert_eq!(header.len(), 3);
//! assert_eq!(header[2].kind, ColumnKind::TermSourceRef);
//! assert_eq!(header[2].span, 2);
//! # Ok::<(), isatab::header::HeaderError>(())
//! ```

mod error;
mod kind;
mod parser;


pub use error::HeaderError;
pub use kind::{ColumnKind, FileType, TERM_ACCESSION_NUMBER};
pub use parser::{parse_header, ColumnDescriptor, HeaderParser};
