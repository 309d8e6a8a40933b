use anyhow::{Context, Result};
use isatab::dataset::IsaDataset;
use isatab::dot::write_investigation_dot;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use super::Config;

/// Print all graphs of a dataset as one dot digraph
pub fn run(investigation: PathBuf, output: Option<PathBuf>, config: &Config) -> Result<()> {
    let dataset = IsaDataset::open_with_config(&investigation, config.reader_config()?)
        .with_context(|| format!("Failed to read {}", investigation.display()))?;

    let mut out: Box<dyn Write> = match &output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    write_investigation_dot(&dataset, &mut out).context("Failed to write dot output")?;
    out.flush()?;
    Ok(())
}
