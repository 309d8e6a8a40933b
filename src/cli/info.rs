use anyhow::{Context, Result};
use isatab::dataset::IsaDataset;
use isatab::reader::ParsedTable;
use std::path::PathBuf;

use super::Config;

fn print_table(kind: &str, file_name: &str, table: Option<&ParsedTable>) {
    match table {
        Some(table) => println!(
            "  {kind} {file_name}: {} materials, {} processes, {} arcs",
            table.graph.materials.len(),
            table.graph.processes.len(),
            table.graph.arcs.len()
        ),
        None => println!("  {kind}: no file"),
    }
}

/// Display information about a dataset
pub fn run(investigation: PathBuf, json: bool, config: &Config) -> Result<()> {
    if !investigation.exists() {
        anyhow::bail!("File does not exist: {}", investigation.display());
    }

    let dataset = IsaDataset::open_with_config(&investigation, config.reader_config()?)
        .with_context(|| format!("Failed to read {}", investigation.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&dataset)?);
        return Ok(());
    }

    let info = &dataset.investigation;
    println!("ISA-Tab Dataset Information");
    println!("===========================");
    println!("Investigation: {}", investigation.display());
    println!("Identifier: {}", info.identifier);
    println!("Title: {}", info.title);
    println!("Ontology sources: {}", info.ontology_sources.len());
    println!();

    for (study, tables) in dataset.iter_studies() {
        println!("Study {} ({}):", study.identifier, study.title);
        print_table("study", &study.file_name, tables.study.as_ref());
        for (assay, table) in study.assays.iter().zip(&tables.assays) {
            print_table("assay", &assay.file_name, table.as_ref());
        }
        println!();
    }

    Ok(())
}
