//! # Graphviz Export
//!
//! Prints study and assay graphs in Graphviz `dot` syntax. Materials are
//! black boxes, processes blue ellipses. Node ids and labels are written as
//! JSON strings, which `dot` accepts as quoted ids.
//!
//! ```rust
//! use isatab::dot::write_dot;
//! use isatab::header::FileType;
//! use isatab::reader::TableReader;
//!
//! let tsv = "Source Name\tProtocol REF\tSample Name\nsrc1\tcollect\tsample1\n";
//! let graph = TableReader::new(FileType::Study).read(tsv.as_bytes())?.graph;
//!
//! let mut out = Vec::new();
//! write_dot(&graph, &mut out)?;
//! assert!(String::from_utf8_lossy(&out).contains("\"src1\" -> \"collect-1\";"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::io::{self, Write};

use crate::dataset::IsaDataset;
use crate::model::Graph;


const INDENT: &str = "    ";

fn quote(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

/// Node, label and arc statements of one graph. `prefix` keeps ids of
/// different tables apart inside one investigation plot.
fn write_body<W: Write>(graph: &Graph, prefix: &str, indent: &str, out: &mut W) -> io::Result<()> {
    let id = |name: &str| quote(&format!("{prefix}{name}"));

    writeln!(out, "{indent}/* materials */")?;
    for (name, material) in &graph.materials {
        let label = format!("{}:\n{}\n({})", material.node_type, or_dash(&material.name), name);
        writeln!(
            out,
            "{indent}{} [label={},shape=box,color=black,fontcolor=black]",
            id(name),
            quote(&label)
        )?;
    }

    writeln!(out, "{indent}/* processes */")?;
    for (name, process) in &graph.processes {
        let label = format!(
            "Process:\n{}\n{}\n({})",
            or_dash(&process.protocol_ref),
            or_dash(process.name.as_deref().unwrap_or("")),
            name
        );
        writeln!(
            out,
            "{indent}{} [label={},shape=ellipse,color=blue,fontcolor=blue]",
            id(name),
            quote(&label)
        )?;
    }

    writeln!(out, "{indent}/* arcs */")?;
    for arc in &graph.arcs {
        writeln!(out, "{indent}{} -> {};", id(&arc.tail), id(&arc.head))?;
    }
    Ok(())
}

/// Write one study or assay graph as a standalone digraph
pub fn write_dot<W: Write>(graph: &Graph, out: &mut W) -> io::Result<()> {
    writeln!(out, "digraph table {{")?;
    writeln!(out, "{INDENT}rankdir = \"LR\";")?;
    write_body(graph, "", INDENT, out)?;
    writeln!(out, "}}")
}

/// Write every study and assay of a dataset as clusters of one digraph
pub fn write_investigation_dot<W: Write>(dataset: &IsaDataset, out: &mut W) -> io::Result<()> {
    let inner = format!("{INDENT}{INDENT}");
    writeln!(out, "digraph investigation {{")?;
    writeln!(out, "{INDENT}rankdir = \"LR\";")?;

    for (s, (info, tables)) in dataset.iter_studies().enumerate() {
        match &tables.study {
            Some(study) => {
                writeln!(out, "{INDENT}/* study {} */", info.file_name)?;
                writeln!(out, "{INDENT}subgraph clusterStudy{s} {{")?;
                writeln!(out, "{inner}label = {}", quote(&format!("Study: {}", info.file_name)))?;
                write_body(&study.graph, &format!("S{}/", s + 1), &inner, out)?;
                writeln!(out, "{INDENT}}}")?;
            }
            None => writeln!(out, "{INDENT}/* no file for study {} */", s + 1)?,
        }

        for (a, (assay_info, assay)) in info.assays.iter().zip(&tables.assays).enumerate() {
            let Some(assay) = assay else {
                writeln!(out, "{INDENT}/* no file for assay {} */", a + 1)?;
                continue;
            };
            writeln!(out, "{INDENT}/* assay {} */", assay_info.file_name)?;
            writeln!(out, "{INDENT}subgraph clusterAssayS{s}A{a} {{")?;
            writeln!(
                out,
                "{inner}label = {}",
                quote(&format!("Assay: {}", assay_info.file_name))
            )?;
            write_body(&assay.graph, &format!("S{}A{}/", s + 1, a + 1), &inner, out)?;
            writeln!(out, "{INDENT}}}")?;
        }
    }
    writeln!(out, "}}")
}
