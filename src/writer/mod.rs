//! # Table Writer
//!
//! Writes graphs back out as tab-separated study and assay tables, using
//! [`crate::serializer`] for the row layout.
//!
//! ## Quoting
//!
//! With [`WriterConfig::quote`] set, every cell is quoted. Without it only
//! cells that would otherwise break the table (a tab, a `"` or a line
//! break) are quoted with `"`. Files are written through a temporary file
//! and renamed into place.

mod config;
mod error;
mod table;


pub use config::{LineTerminator, WriterConfig};
pub use error::TableWriteError;
pub use table::TableWriter;
