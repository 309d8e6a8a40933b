use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod dot;
mod info;
mod rewrite;
mod validate;

mod config;

pub use config::Config;

/// isatab - Read, validate and rewrite ISA-Tab datasets
#[derive(Parser)]
#[command(name = "isatab")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Load reader/writer settings from a TOML config file
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate an investigation and all its study and assay tables
    Validate {
        /// Investigation file path
        #[arg(value_name = "INVESTIGATION")]
        investigation: PathBuf,

        /// Also fail on critical validation warnings
        #[arg(long)]
        strict: bool,
    },

    /// Read a dataset and write it back out into another directory
    Rewrite {
        /// Investigation file path
        #[arg(value_name = "INVESTIGATION")]
        investigation: PathBuf,

        /// Output directory (must differ from the input directory)
        #[arg(value_name = "OUTPUT_DIR")]
        output_dir: PathBuf,

        /// Quote every cell with this character
        #[arg(long, value_name = "C")]
        quote: Option<char>,

        /// Write CRLF line endings
        #[arg(long)]
        crlf: bool,
    },

    /// Print the study and assay graphs in Graphviz dot format
    Dot {
        /// Investigation file path
        #[arg(value_name = "INVESTIGATION")]
        investigation: PathBuf,

        /// Output file (stdout when omitted)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Display information about a dataset
    Info {
        /// Investigation file path
        #[arg(value_name = "INVESTIGATION")]
        investigation: PathBuf,

        /// Dump the parsed dataset as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    match cli.command {
        Commands::Validate {
            investigation,
            strict,
        } => validate::run(investigation, strict, &config),
        Commands::Rewrite {
            investigation,
            output_dir,
            quote,
            crlf,
        } => rewrite::run(investigation, output_dir, quote, crlf, &config),
        Commands::Dot {
            investigation,
            output,
        } => dot::run(investigation, output, &config),
        Commands::Info {
            investigation,
            json,
        } => info::run(investigation, json, &config),
    }
}
