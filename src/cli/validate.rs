use anyhow::Result;
use isatab::dataset::IsaDataset;
use log::info;
use std::path::PathBuf;

use super::Config;

/// Validate an investigation and its tables
pub fn run(investigation: PathBuf, strict: bool, config: &Config) -> Result<()> {
    info!("ISA-Tab Validator");
    info!("=================");
    info!("Investigation: {}", investigation.display());
    info!("");

    let reader_config = config.reader_config()?;
    match IsaDataset::open_with_config(&investigation, reader_config) {
        Ok(dataset) => {
            let report = dataset.validate();

            // Use colorized output if available
            #[cfg(feature = "colorized_output")]
            {
                println!("{}", report.format_colored());
            }

            #[cfg(not(feature = "colorized_output"))]
            {
                println!("{}", report);
            }

            if strict && report.has_critical() {
                std::process::exit(1);
            }

            Ok(())
        }
        Err(e) => {
            eprintln!("Validation error: {}", e);
            std::process::exit(1);
        }
    }
}
