//! Property tests for table reading and writing

use std::collections::HashSet;

use isatab::prelude::*;
use proptest::prelude::*;

const HEADER: &str =
    "Source Name\tCharacteristics[organism]\tProtocol REF\tParameter Value[site]\tSample Name\n";

/// One study row: source index, organism, protocol index, site
fn row_strategy() -> impl Strategy<Value = (usize, String, usize, String)> {
    (0..3usize, "[a-z]{1,8}", 0..2usize, "[a-z0-9 ]{0,6}")
}

/// Study table with one distinct sample per row. Each source keeps a single
/// organism so rows sharing a source agree on its annotation. Rows are
/// grouped by source, the order the writer emits them in.
fn study_table(rows: &[(usize, String, usize, String)]) -> String {
    let mut rows: Vec<_> = rows.iter().collect();
    rows.sort_by_key(|(source, ..)| *source);

    let mut organisms: Vec<Option<&str>> = vec![None; 3];
    let mut text = String::from(HEADER);
    for (i, (source, organism, protocol, site)) in rows.into_iter().enumerate() {
        let organism = *organisms[*source].get_or_insert(organism.as_str());
        let protocol = ["collect", "freeze"][*protocol];
        text.push_str(&format!(
            "src{source}\t{organism}\t{protocol}\t{}\tsample{i}\n",
            site.trim()
        ));
    }
    text
}

fn read(text: &str) -> Graph {
    TableReader::new(FileType::Study)
        .read(text.as_bytes())
        .unwrap()
        .graph
}

proptest! {
    /// Writing a read table reproduces its text and its graph
    #[test]
    fn test_read_write_idempotent(rows in prop::collection::vec(row_strategy(), 1..20)) {
        let text = study_table(&rows);
        let graph = read(&text);

        let written = TableWriter::default()
            .graph_to_string(&graph, FileType::Study)
            .unwrap();
        prop_assert_eq!(&written, &text);
        prop_assert_eq!(read(&written), graph);
    }

    /// Repeating rows adds no nodes and no arcs
    #[test]
    fn test_duplicate_rows_collapse(
        rows in prop::collection::vec(row_strategy(), 1..10),
        repeats in 2..4usize,
    ) {
        let text = study_table(&rows);
        let body = text.strip_prefix(HEADER).unwrap();
        let repeated = format!("{HEADER}{}", body.repeat(repeats));

        let once = read(&text);
        let many = read(&repeated);
        prop_assert_eq!(&many.materials, &once.materials);
        prop_assert_eq!(&many.processes, &once.processes);
        prop_assert_eq!(&many.arcs, &once.arcs);

        let distinct: HashSet<_> = many.arcs.iter().collect();
        prop_assert_eq!(distinct.len(), many.arcs.len());
    }

    /// Every arc joins two nodes of the graph
    #[test]
    fn test_no_dangling_arcs(rows in prop::collection::vec(row_strategy(), 1..20)) {
        let graph = read(&study_table(&rows));
        prop_assert_eq!(graph.dangling_arcs().count(), 0);
        prop_assert_eq!(graph.arcs.len(), 2 * rows.len());
    }
}
