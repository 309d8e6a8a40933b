//! Tokens and lookup tables shared by the table parser, writer and validator.

use crate::header::ColumnKind;

/// Marks an unnamed process that only has a name column type
pub const TOKEN_ANONYMOUS: &str = "Anonymous";

/// Marks an unnamed material or data file
pub const TOKEN_EMPTY: &str = "Empty";

/// Protocol reference of a named process without a `Protocol REF` column
pub const TOKEN_UNKNOWN: &str = "Unknown";

/// Marks the column number in the unique name of a named node
pub const COLUMN_QUALIFIER: &str = "COL";

/// Separator between values of a list-valued cell
pub const LIST_SEPARATOR: char = ';';

/// Escape character protecting a literal separator inside a list value
pub const LIST_ESCAPE: char = '\\';

/// Expected layout of `Date` cells
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Assay measurement types referenced by restriction tables
pub mod measurement {
    /// Protein expression profiling
    pub const PROTEIN_EXPRESSION_PROFILING: &str = "protein expression profiling";
    /// Protein identification
    pub const PROTEIN_IDENTIFICATION: &str = "protein identification";
    /// Metabolite profiling
    pub const METABOLITE_PROFILING: &str = "metabolite profiling";
}

/// Assay technology types referenced by restriction tables
pub mod technology {
    /// DNA microarray
    pub const DNA_MICROARRAY: &str = "dna microarray";
    /// Gel electrophoresis
    pub const GEL_ELECTROPHORESIS: &str = "gel electrophoresis";
    /// Protein microarray
    pub const PROTEIN_MICROARRAY: &str = "protein microarray";
    /// Mass spectrometry
    pub const MASS_SPECTROMETRY: &str = "mass spectrometry";
}

/// Assay technologies a data file column is restricted to, if any.
pub fn restricted_technologies(kind: ColumnKind) -> Option<&'static [&'static str]> {
    use technology::*;
    const MICROARRAY: &[&str] = &[DNA_MICROARRAY, PROTEIN_MICROARRAY];
    match kind {
        ColumnKind::ArrayDesignFile
        | ColumnKind::ArrayDataFile
        | ColumnKind::ArrayDataMatrixFile
        | ColumnKind::DerivedArrayDataFile
        | ColumnKind::DerivedArrayDataMatrixFile => Some(MICROARRAY),
        ColumnKind::SpotPickingFile => Some(&[GEL_ELECTROPHORESIS]),
        ColumnKind::DerivedSpectralDataFile
        | ColumnKind::RawSpectralDataFile
        | ColumnKind::PeptideAssignmentFile
        | ColumnKind::PostTranslationalModificationAssignmentFile
        | ColumnKind::ProteinAssignmentFile
        | ColumnKind::MetaboliteAssignmentFile => Some(&[MASS_SPECTROMETRY]),
        _ => None,
    }
}

/// Assay measurements a data file column is restricted to, if any.
pub fn restricted_measurements(kind: ColumnKind) -> Option<&'static [&'static str]> {
    use measurement::*;
    const PROTEOMICS: &[&str] = &[PROTEIN_EXPRESSION_PROFILING, PROTEIN_IDENTIFICATION];
    match kind {
        ColumnKind::PeptideAssignmentFile
        | ColumnKind::PostTranslationalModificationAssignmentFile
        | ColumnKind::ProteinAssignmentFile => Some(PROTEOMICS),
        ColumnKind::MetaboliteAssignmentFile => Some(&[METABOLITE_PROFILING]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restrictions_only_cover_data_files() {
        assert!(restricted_technologies(ColumnKind::SampleName).is_none());
        assert!(restricted_measurements(ColumnKind::RawDataFile).is_none());
        assert_eq!(
            restricted_technologies(ColumnKind::SpotPickingFile),
            Some(&[technology::GEL_ELECTROPHORESIS][..])
        );
        assert!(restricted_measurements(ColumnKind::ProteinAssignmentFile)
            .is_some_and(|m| m.contains(&measurement::PROTEIN_IDENTIFICATION)));
    }
}
