use super::*;
use crate::builder::{BuildContext, RowBuilder};
use crate::grouping::group_columns;
use crate::header::{parse_header, ColumnKind, FileType};

fn build_rows(tokens: &[&str], file_type: FileType, rows: &[&[&str]]) -> Vec<Vec<Node>> {
    let header = parse_header(tokens.iter().copied(), file_type).unwrap();
    let builder = RowBuilder::new(group_columns(header, file_type).unwrap());
    let mut ctx = BuildContext::new();
    rows.iter()
        .map(|row| builder.build(row, &mut ctx).unwrap())
        .collect()
}

const STUDY: &[&str] = &["Source Name", "Protocol REF", "Sample Name"];

#[test]
fn test_single_row_graph() {
    let rows = build_rows(STUDY, FileType::Study, &[&["src1", "collect", "sample1"]]);
    let graph = assemble(rows).unwrap();

    assert_eq!(graph.materials.len(), 2);
    assert_eq!(graph.processes.len(), 1);
    assert_eq!(
        graph.arcs,
        vec![Arc::new("src1", "collect-1"), Arc::new("collect-1", "sample1")]
    );
}

#[test]
fn test_duplicate_rows_collapse() {
    let row: &[&str] = &["src1", "collect", "sample1"];
    let once = assemble(build_rows(STUDY, FileType::Study, &[row])).unwrap();
    let twice = assemble(build_rows(STUDY, FileType::Study, &[row, row])).unwrap();

    assert_eq!(once, twice);
    assert_eq!(twice.arcs.len(), 2);
}

#[test]
fn test_anonymous_process_split_by_neighbours() {
    let rows = build_rows(
        STUDY,
        FileType::Study,
        &[
            &["src1", "collect", "sample1"],
            &["src1", "collect", "sample2"],
            &["src2", "collect", "sample3"],
        ],
    );
    let graph = assemble(rows).unwrap();

    let names: Vec<_> = graph.processes.keys().cloned().collect();
    assert_eq!(names, vec!["collect-1", "collect-2", "collect-3"]);
    assert_eq!(graph.arcs.len(), 6);
}

#[test]
fn test_anonymous_process_with_different_content_kept_apart() {
    let rows = build_rows(
        &["Source Name", "Protocol REF", "Performer", "Sample Name"],
        FileType::Study,
        &[
            &["src1", "collect", "alice", "sample1"],
            &["src1", "collect", "bob", "sample1"],
        ],
    );
    let graph = assemble(rows).unwrap();
    assert_eq!(graph.processes.len(), 2);
    assert_eq!(graph.arcs.len(), 4);
}

#[test]
fn test_fan_out_shares_named_prefix() {
    let rows = build_rows(
        &["Sample Name", "Protocol REF", "Assay Name", "Raw Data File"],
        FileType::Assay,
        &[&["s1", "seq", "a1", "r1.fq"], &["s1", "seq", "a1", "r2.fq"]],
    );
    let graph = assemble(rows).unwrap();

    assert_eq!(graph.node_count(), 4);
    assert_eq!(
        graph.arcs,
        vec![
            Arc::new("s1", "a1-COL3"),
            Arc::new("a1-COL3", "r1.fq-COL4"),
            Arc::new("a1-COL3", "r2.fq-COL4"),
        ]
    );
}

#[test]
fn test_unnamed_start_node_rejected() {
    let rows = build_rows(STUDY, FileType::Study, &[&["", "collect", "sample1"]]);
    assert_eq!(
        assemble(rows),
        Err(AssemblyError::UnnamedStartNode {
            unique_name: "Empty Source Name-1".to_string()
        })
    );
}

#[test]
fn test_conflicting_definition_rejected() {
    let rows = build_rows(
        &["Source Name", "Characteristics[organism]", "Protocol REF", "Sample Name"],
        FileType::Study,
        &[
            &["src1", "mouse", "collect", "sample1"],
            &["src1", "human", "collect", "sample2"],
        ],
    );
    assert_eq!(
        assemble(rows),
        Err(AssemblyError::ConflictingDefinition {
            unique_name: "src1".to_string()
        })
    );
}

#[test]
fn test_material_and_process_name_clash_rejected() {
    let rows = build_rows(
        &["Sample Name", "Protocol REF", "Assay Name", "Raw Data File"],
        FileType::Assay,
        &[&["x-COL3", "seq", "x", "r1.fq"]],
    );
    assert_eq!(
        assemble(rows),
        Err(AssemblyError::ConflictingDefinition {
            unique_name: "x-COL3".to_string()
        })
    );
}

#[test]
fn test_same_name_in_different_columns() {
    let rows = build_rows(
        &[
            "Sample Name",
            "Protocol REF",
            "Extract Name",
            "Protocol REF",
            "Raw Data File",
            "Protocol REF",
            "Derived Data File",
        ],
        FileType::Assay,
        &[&["S1", "extraction", "S1", "seq", "f.txt", "convert", "f.txt"]],
    );
    let graph = assemble(rows).unwrap();

    assert_eq!(graph.materials.len(), 4);
    assert_eq!(graph.materials["S1"].node_type, ColumnKind::SampleName);
    assert_eq!(graph.materials["S1-COL3"].node_type, ColumnKind::ExtractName);
    assert_eq!(graph.materials["S1-COL3"].name, "S1");
    assert_eq!(graph.materials["f.txt-COL5"].node_type, ColumnKind::RawDataFile);
    assert_eq!(graph.materials["f.txt-COL7"].node_type, ColumnKind::DerivedDataFile);
}

#[test]
fn test_inconsistent_row_width() {
    let mut rows = build_rows(STUDY, FileType::Study, &[&["src1", "collect", "sample1"]]);
    rows.push(rows[0][..2].to_vec());
    assert_eq!(
        assemble(rows),
        Err(AssemblyError::InconsistentRowWidth {
            expected: 3,
            found: 2,
            row: 1
        })
    );
}

#[test]
fn test_empty_input() {
    let graph = assemble(Vec::new()).unwrap();
    assert_eq!(graph.node_count(), 0);
    assert!(graph.arcs.is_empty());
}
