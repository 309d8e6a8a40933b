//! # ISA-Tab Dataset Module
//!
//! Loads an investigation together with every study and assay table it
//! references, and writes the whole set back out.
//!
//! ## Layout
//!
//! ```text
//! dataset/
//! ├── i_investigation.txt     # declarations, copied verbatim on write
//! ├── s_study.txt             # one study table per STUDY section
//! └── a_assay.txt             # one assay table per STUDY ASSAYS column
//! ```
//!
//! Table file names are resolved relative to the investigation file. Study
//! tables are read with the study's declared factors; with the `parallel`
//! feature the assays of one study are read concurrently.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use isatab::dataset::IsaDataset;
//! use isatab::writer::WriterConfig;
//!
//! let dataset = IsaDataset::open("data/i_investigation.txt")?;
//! println!("{}", dataset.validate());
//! dataset.write_to("out", &WriterConfig::default())?;
//! # Ok::<(), isatab::dataset::DatasetError>(())
//! ```

mod bundle;
mod error;

#[cfg(test)]
mod tests;

pub use bundle::{IsaDataset, StudyTables};
pub use error::DatasetError;
