use super::*;
use crate::header::{parse_header, ColumnKind, FileType};

fn group(tokens: &[&str], file_type: FileType) -> Result<Vec<Segment>, GroupingError> {
    let header = parse_header(tokens.iter().copied(), file_type).unwrap();
    group_columns(header, file_type)
}

#[test]
fn test_study_segments() {
    let segments = group(
        &[
            "Source Name",
            "Characteristics[organism]",
            "Term Source REF",
            "Term Accession Number",
            "Protocol REF",
            "Date",
            "Sample Name",
            "Factor Value[dose]",
            "Unit",
        ],
        FileType::Study,
    )
    .unwrap();

    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0].kind, SegmentKind::Material);
    assert_eq!(segments[1].kind, SegmentKind::Process);
    assert_eq!(segments[2].kind, SegmentKind::Material);

    let source = &segments[0];
    assert_eq!(source.columns[1].term_source_ref, Some(2));
    assert_eq!(source.linked(source.columns[1].term_source_ref).map(|d| d.col_no), Some(2));
    assert_eq!(source.width(), 4);

    let sample = &segments[2];
    assert_eq!(sample.columns[1].unit, Some(2));
    assert_eq!(sample.name_column().map(|d| d.kind), Some(ColumnKind::SampleName));
}

#[test]
fn test_protocol_ref_absorbs_following_name() {
    let segments = group(
        &[
            "Sample Name",
            "Protocol REF",
            "Parameter Value[instrument]",
            "Assay Name",
            "Assay Name",
            "Raw Data File",
        ],
        FileType::Assay,
    )
    .unwrap();

    assert_eq!(segments.len(), 4);
    let named = &segments[1];
    assert_eq!(named.columns.len(), 3);
    assert_eq!(named.protocol_column().map(|d| d.col_no), Some(1));
    assert_eq!(named.name_column().map(|d| d.col_no), Some(3));

    // The second name starts its own process without a protocol
    let standalone = &segments[2];
    assert_eq!(standalone.start().kind, ColumnKind::AssayName);
    assert!(standalone.protocol_column().is_none());
}

#[test]
fn test_consecutive_protocols_are_separate_nodes() {
    let segments = group(
        &["Sample Name", "Protocol REF", "Protocol REF", "Extract Name"],
        FileType::Assay,
    )
    .unwrap();
    assert_eq!(segments.len(), 4);
    assert!(segments[1].name_column().is_none());
}

#[test]
fn test_duplicate_singular_annotation() {
    let err = group(
        &["Source Name", "Protocol REF", "Performer", "Performer", "Sample Name"],
        FileType::Study,
    )
    .unwrap_err();
    assert_eq!(
        err,
        GroupingError::DuplicateAnnotation {
            header: "Performer".to_string(),
            column: 3
        }
    );
}

#[test]
fn test_repeated_labeled_annotations_are_independent() {
    let segments = group(
        &["Source Name", "Comment[a]", "Comment[a]", "Characteristics[x]"],
        FileType::Study,
    )
    .unwrap();
    assert_eq!(segments[0].columns.len(), 4);
}

#[test]
fn test_second_unit_is_duplicate() {
    let err = group(
        &["Source Name", "Characteristics[age]", "Unit", "Unit"],
        FileType::Study,
    )
    .unwrap_err();
    assert!(matches!(err, GroupingError::DuplicateAnnotation { column: 3, .. }));
}

#[test]
fn test_second_term_source_is_duplicate() {
    let err = group(
        &[
            "Source Name",
            "Characteristics[age]",
            "Term Source REF",
            "Term Accession Number",
            "Term Source REF",
            "Term Accession Number",
        ],
        FileType::Study,
    )
    .unwrap_err();
    assert!(matches!(err, GroupingError::DuplicateAnnotation { column: 4, .. }));
}

#[test]
fn test_unit_with_its_own_term_source() {
    let segments = group(
        &[
            "Source Name",
            "Characteristics[age]",
            "Unit",
            "Term Source REF",
            "Term Accession Number",
        ],
        FileType::Study,
    )
    .unwrap();
    let columns = &segments[0].columns;
    assert_eq!(columns[1].unit, Some(2));
    assert_eq!(columns[1].term_source_ref, None);
    assert_eq!(columns[2].term_source_ref, Some(3));
}

#[test]
fn test_orphan_secondary() {
    let err = group(&["Source Name", "Unit"], FileType::Study).unwrap_err();
    assert_eq!(
        err,
        GroupingError::OrphanSecondary {
            header: "Unit".to_string(),
            column: 1
        }
    );

    let err = group(
        &["Sample Name", "Term Source REF", "Term Accession Number"],
        FileType::Study,
    )
    .unwrap_err();
    assert!(matches!(err, GroupingError::OrphanSecondary { .. }));
}

#[test]
fn test_unsupported_qualifiers() {
    let err = group(
        &["Source Name", "Comment[x]", "Term Source REF", "Term Accession Number"],
        FileType::Study,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        GroupingError::UnsupportedQualifier { ref header, .. } if header == "Comment[x]"
    ));

    let err = group(&["Sample Name", "Material Type", "Unit"], FileType::Study).unwrap_err();
    assert!(matches!(err, GroupingError::UnsupportedQualifier { .. }));
}

#[test]
fn test_unexpected_and_missing_node() {
    let err = group(&["Source Name", "Performer"], FileType::Study).unwrap_err();
    assert!(matches!(
        err,
        GroupingError::UnexpectedColumn { node: ColumnKind::SourceName, column: 1, .. }
    ));

    let err = group(&["Sample Name", "Protocol REF", "Factor Value[x]"], FileType::Study)
        .unwrap_err();
    assert!(matches!(err, GroupingError::UnexpectedColumn { .. }));

    let err = group(&["Comment[x]", "Source Name"], FileType::Study).unwrap_err();
    assert!(matches!(err, GroupingError::MissingNode { column: 0, .. }));
}

#[test]
fn test_header_strings_round_trip_through_segments() {
    let tokens = [
        "Sample Name",
        "Protocol REF",
        "Parameter Value[volume]",
        "Unit",
        "Term Source REF",
        "Term Accession Number",
        "MS Assay Name",
        "Raw Spectral Data File",
    ];
    let segments = group(&tokens, FileType::Assay).unwrap();
    let strings: Vec<String> = segments.iter().flat_map(|s| s.header_strings()).collect();
    assert_eq!(strings, tokens);
}
