//! # isatab
//!
//! Command-line front end for the `isatab` library.
//!
//! ## Usage
//!
//! ```bash
//! # Check a dataset, failing on critical findings
//! isatab validate data/i_investigation.txt --strict
//!
//! # Write a normalized copy with quoted cells
//! isatab rewrite data/i_investigation.txt out/ --quote '"'
//!
//! # Render the provenance graphs
//! isatab dot data/i_investigation.txt | dot -Tsvg > graph.svg
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    cli::init_logging(cli.verbosity());

    cli::dispatch(cli)
}
