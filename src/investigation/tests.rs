use super::*;
use crate::model::OntologyTermRef;

fn tsv(lines: &[&[&str]]) -> String {
    lines
        .iter()
        .map(|cells| cells.join("\t"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn investigation() -> String {
    tsv(&[
        &["# exported by hand"],
        &["ONTOLOGY SOURCE REFERENCE"],
        &["Term Source Name", "OBI", "", "NCBITAXON"],
        &["Term Source File", "obi.owl", "", ""],
        &["Term Source Version", "1", "", "4"],
        &["Term Source Description", "Biomedical investigations", "", "Taxonomy"],
        &["INVESTIGATION"],
        &["Investigation Identifier", "i1"],
        &["Investigation Title", "Mouse study"],
        &["INVESTIGATION PUBLICATIONS"],
        &["Investigation PubMed ID"],
        &["STUDY"],
        &["Study Identifier", "s1"],
        &["Study Title", "Liver"],
        &["Study File Name", "s_liver.txt"],
        &["Comment[Study Grant Number]", "G-1"],
        &["STUDY FACTORS"],
        &["Study Factor Name", "treatment"],
        &["Study Factor Type", "compound"],
        &["Study Factor Type Term Accession Number", ""],
        &["Study Factor Type Term Source REF", ""],
        &["STUDY ASSAYS"],
        &["Study Assay File Name", "a_ms.txt", ""],
        &["Study Assay Measurement Type", "protein identification", ""],
        &["Study Assay Measurement Type Term Accession Number", "0000615", ""],
        &["Study Assay Measurement Type Term Source REF", "OBI", ""],
        &["Study Assay Technology Type", "mass spectrometry", ""],
        &["Study Assay Technology Type Term Accession Number", ""],
        &["Study Assay Technology Type Term Source REF", ""],
        &["Study Assay Technology Platform", "Orbitrap", ""],
        &["STUDY PROTOCOLS"],
        &["Study Protocol Name", "extraction", "scan"],
        &["Study Protocol Type", "extraction", ""],
        &["Study Protocol Parameters Name", "kit", "instrument; resolution"],
        &["STUDY CONTACTS"],
        &["Study Person Last Name", "Doe"],
    ])
}

#[test]
fn test_section_headings() {
    assert_eq!(
        Section::from_heading("STUDY PROTOCOLS"),
        Some(Section::StudyProtocols)
    );
    assert_eq!(Section::from_heading("STUDY PROTOCOL"), None);
    assert_eq!(Section::StudyAssays.heading(), "STUDY ASSAYS");
}

#[test]
fn test_read_investigation() {
    let info = InvestigationReader::new()
        .read(investigation().as_bytes())
        .unwrap();

    assert_eq!(info.identifier, "i1");
    assert_eq!(info.title, "Mouse study");

    // Empty middle column skipped
    let names: Vec<_> = info.ontology_sources.keys().cloned().collect();
    assert_eq!(names, vec!["OBI", "NCBITAXON"]);
    assert_eq!(info.ontology_sources["NCBITAXON"].version, "4");

    assert_eq!(info.studies.len(), 1);
    let study = &info.studies[0];
    assert_eq!(study.identifier, "s1");
    assert_eq!(study.file_name, "s_liver.txt");
    assert_eq!(
        study.factors["treatment"].factor_type,
        OntologyTermRef::new("compound", "", "")
    );
}

#[test]
fn test_read_assays_and_protocols() {
    let info = InvestigationReader::new()
        .read(investigation().as_bytes())
        .unwrap();
    let study = &info.studies[0];

    assert_eq!(study.assays.len(), 1);
    let assay = &study.assays[0];
    assert_eq!(assay.file_name, "a_ms.txt");
    assert_eq!(
        assay.measurement_type,
        OntologyTermRef::new("protein identification", "0000615", "OBI")
    );
    assert_eq!(assay.technology_type.name_str(), "mass spectrometry");
    assert_eq!(assay.platform, "Orbitrap");

    assert_eq!(study.protocols.len(), 2);
    assert_eq!(study.protocols["extraction"].parameters, vec!["kit"]);
    assert_eq!(
        study.protocols["scan"].parameters,
        vec!["instrument", "resolution"]
    );
    assert!(study.protocols["scan"].protocol_type.is_empty());
}

#[test]
fn test_multiple_studies() {
    let text = tsv(&[
        &["STUDY"],
        &["Study Identifier", "s1"],
        &["Study File Name", "s_one.txt"],
        &["STUDY"],
        &["Study Identifier", "s2"],
        &["Study File Name", "s_two.txt"],
        &["STUDY PROTOCOLS"],
        &["Study Protocol Name", "p"],
    ]);
    let info = InvestigationReader::new().read(text.as_bytes()).unwrap();
    assert_eq!(info.studies.len(), 2);
    assert_eq!(info.studies[1].file_name, "s_two.txt");
    assert!(info.studies[0].protocols.is_empty());
    assert!(info.studies[1].protocols.contains_key("p"));
}

#[test]
fn test_key_outside_section() {
    let text = tsv(&[&["Investigation Identifier", "i1"]]);
    let err = InvestigationReader::new().read(text.as_bytes()).unwrap_err();
    assert!(matches!(
        err,
        InvestigationError::KeyOutsideSection { ref key, line: 1 } if key == "Investigation Identifier"
    ));
}

#[test]
fn test_unknown_section() {
    let text = tsv(&[&["INVESTIGATION"], &["STUDY SAMPLES"]]);
    let err = InvestigationReader::new().read(text.as_bytes()).unwrap_err();
    assert!(matches!(
        err,
        InvestigationError::UnknownSection { ref heading, line: 2 } if heading == "STUDY SAMPLES"
    ));
}

#[test]
fn test_repeated_key() {
    let text = tsv(&[
        &["INVESTIGATION"],
        &["Investigation Title", "a"],
        &["Investigation Title", "b"],
    ]);
    let err = InvestigationReader::new().read(text.as_bytes()).unwrap_err();
    assert!(matches!(
        err,
        InvestigationError::RepeatedKey { ref section, line: 3, .. } if section == "INVESTIGATION"
    ));
}

#[test]
fn test_unnamed_protocol() {
    let text = tsv(&[
        &["STUDY"],
        &["STUDY PROTOCOLS"],
        &["Study Protocol Name", "extraction", ""],
        &["Study Protocol Type", "", "labeling"],
    ]);
    let err = InvestigationReader::new().read(text.as_bytes()).unwrap_err();
    assert!(matches!(err, InvestigationError::UnnamedProtocol { column: 1 }));
}

#[test]
fn test_study_section_without_study() {
    let text = tsv(&[&["STUDY FACTORS"], &["Study Factor Name", "dose"]]);
    let err = InvestigationReader::new().read(text.as_bytes()).unwrap_err();
    assert!(matches!(err, InvestigationError::MissingStudy { line: 1, .. }));
}

#[test]
fn test_read_path() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("i_investigation.txt");
    std::fs::write(&path, investigation())?;

    let info = InvestigationReader::new().read_path(&path)?;
    assert_eq!(info.studies[0].title, "Liver");
    Ok(())
}
