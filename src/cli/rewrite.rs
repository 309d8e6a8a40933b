use anyhow::{Context, Result};
use isatab::dataset::IsaDataset;
use log::info;
use std::path::PathBuf;

use super::Config;

/// Read a dataset and write it into `output_dir`
pub fn run(
    investigation: PathBuf,
    output_dir: PathBuf,
    quote: Option<char>,
    crlf: bool,
    config: &Config,
) -> Result<()> {
    let reader_config = config.reader_config()?;
    let writer_config = config.writer_config(quote, crlf)?;

    let dataset = IsaDataset::open_with_config(&investigation, reader_config)
        .with_context(|| format!("Failed to read {}", investigation.display()))?;
    dataset
        .write_to(&output_dir, &writer_config)
        .with_context(|| format!("Failed to write {}", output_dir.display()))?;

    info!(
        "Rewrote {} into {}",
        investigation.display(),
        output_dir.display()
    );
    Ok(())
}
