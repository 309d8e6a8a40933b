//! # Investigation Reader
//!
//! Reads the declarations of an ISA-Tab investigation file that study and
//! assay tables refer to: ontology sources, study and assay file names,
//! factors and protocols.
//!
//! ## Format
//!
//! The file is a tab-separated list of key lines, grouped under upper-case
//! section headings. Values of one entity are stacked in the same column
//! across the key lines of a section:
//!
//! ```text
//! STUDY PROTOCOLS
//! Study Protocol Name              extraction    sequencing
//! Study Protocol Parameters Name   kit           instrument;read length
//! ```
//!
//! Columns that are empty under every key are skipped with a warning.

mod error;
mod reader;

#[cfg(test)]
mod tests;

pub use error::InvestigationError;
pub use reader::{InvestigationReader, Section};
