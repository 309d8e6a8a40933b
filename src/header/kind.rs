use std::fmt;

use serde::{Deserialize, Serialize};

/// Type of one logical column in a study or assay table header.
///
/// Labeled kinds (`Characteristics`, `Comment`, `Factor Value`,
/// `Parameter Value`) carry their label in [`super::ColumnDescriptor::label`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ColumnKind {
    // Materials
    /// `Source Name`
    SourceName,
    /// `Sample Name`
    SampleName,
    /// `Extract Name`
    ExtractName,
    /// `Labeled Extract Name`
    LabeledExtractName,
    /// `Library Name`
    LibraryName,

    // Data files
    /// `Array Data File`
    ArrayDataFile,
    /// `Array Data Matrix File`
    ArrayDataMatrixFile,
    /// `Array Design File`
    ArrayDesignFile,
    /// `Derived Array Data File`
    DerivedArrayDataFile,
    /// `Derived Array Data Matrix File`
    DerivedArrayDataMatrixFile,
    /// `Derived Data File`
    DerivedDataFile,
    /// `Derived Spectral Data File`
    DerivedSpectralDataFile,
    /// `Image File`
    ImageFile,
    /// `Metabolite Assignment File`
    MetaboliteAssignmentFile,
    /// `Peptide Assignment File`
    PeptideAssignmentFile,
    /// `Post Translational Modification Assignment File`
    PostTranslationalModificationAssignmentFile,
    /// `Protein Assignment File`
    ProteinAssignmentFile,
    /// `Raw Data File`
    RawDataFile,
    /// `Raw Spectral Data File`
    RawSpectralDataFile,
    /// `Spot Picking File`
    SpotPickingFile,

    // Processes
    /// `Assay Name`
    AssayName,
    /// `Data Normalization Name`
    DataNormalizationName,
    /// `Data Transformation Name`
    DataTransformationName,
    /// `Gel Electrophoresis Assay Name`
    GelElectrophoresisAssayName,
    /// `Hybridization Assay Name`
    HybridizationAssayName,
    /// `MS Assay Name`
    MsAssayName,
    /// `Normalization Name`
    NormalizationName,
    /// `Scan Name`
    ScanName,
    /// `Protocol REF`
    ProtocolRef,

    // Simple annotations
    /// `Array Design REF`
    ArrayDesignRef,
    /// `Date`
    Date,
    /// `First Dimension`
    FirstDimension,
    /// `Label`
    Label,
    /// `Material Type`
    MaterialType,
    /// `Performer`
    Performer,
    /// `Second Dimension`
    SecondDimension,

    // Labeled annotations
    /// `Characteristics[...]`
    Characteristics,
    /// `Comment[...]`
    Comment,
    /// `Factor Value[...]`
    FactorValue,
    /// `Parameter Value[...]`
    ParameterValue,

    // Secondary annotations
    /// `Term Source REF` followed by its `Term Accession Number` column
    TermSourceRef,
    /// `Unit`
    Unit,
}

/// Every kind matched by exact header text. `Term Source REF` and the
/// labeled kinds are recognised separately.
const SIMPLE_KINDS: &[ColumnKind] = &[
    ColumnKind::SourceName,
    ColumnKind::SampleName,
    ColumnKind::ExtractName,
    ColumnKind::LabeledExtractName,
    ColumnKind::LibraryName,
    ColumnKind::ArrayDataFile,
    ColumnKind::ArrayDataMatrixFile,
    ColumnKind::ArrayDesignFile,
    ColumnKind::DerivedArrayDataFile,
    ColumnKind::DerivedArrayDataMatrixFile,
    ColumnKind::DerivedDataFile,
    ColumnKind::DerivedSpectralDataFile,
    ColumnKind::ImageFile,
    ColumnKind::MetaboliteAssignmentFile,
    ColumnKind::PeptideAssignmentFile,
    ColumnKind::PostTranslationalModificationAssignmentFile,
    ColumnKind::ProteinAssignmentFile,
    ColumnKind::RawDataFile,
    ColumnKind::RawSpectralDataFile,
    ColumnKind::SpotPickingFile,
    ColumnKind::AssayName,
    ColumnKind::DataNormalizationName,
    ColumnKind::DataTransformationName,
    ColumnKind::GelElectrophoresisAssayName,
    ColumnKind::HybridizationAssayName,
    ColumnKind::MsAssayName,
    ColumnKind::NormalizationName,
    ColumnKind::ScanName,
    ColumnKind::ProtocolRef,
    ColumnKind::ArrayDesignRef,
    ColumnKind::Date,
    ColumnKind::FirstDimension,
    ColumnKind::Label,
    ColumnKind::MaterialType,
    ColumnKind::Performer,
    ColumnKind::SecondDimension,
    ColumnKind::Unit,
];

/// Labeled kinds in prefix-matching order.
pub(crate) const LABELED_KINDS: &[ColumnKind] = &[
    ColumnKind::Characteristics,
    ColumnKind::Comment,
    ColumnKind::FactorValue,
    ColumnKind::ParameterValue,
];

/// Header text of the accession column paired with `Term Source REF`.
pub const TERM_ACCESSION_NUMBER: &str = "Term Accession Number";

impl ColumnKind {
    /// Header text of this kind (without any label)
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SourceName => "Source Name",
            Self::SampleName => "Sample Name",
            Self::ExtractName => "Extract Name",
            Self::LabeledExtractName => "Labeled Extract Name",
            Self::LibraryName => "Library Name",
            Self::ArrayDataFile => "Array Data File",
            Self::ArrayDataMatrixFile => "Array Data Matrix File",
            Self::ArrayDesignFile => "Array Design File",
            Self::DerivedArrayDataFile => "Derived Array Data File",
            Self::DerivedArrayDataMatrixFile => "Derived Array Data Matrix File",
            Self::DerivedDataFile => "Derived Data File",
            Self::DerivedSpectralDataFile => "Derived Spectral Data File",
            Self::ImageFile => "Image File",
            Self::MetaboliteAssignmentFile => "Metabolite Assignment File",
            Self::PeptideAssignmentFile => "Peptide Assignment File",
            Self::PostTranslationalModificationAssignmentFile => {
                "Post Translational Modification Assignment File"
            }
            Self::ProteinAssignmentFile => "Protein Assignment File",
            Self::RawDataFile => "Raw Data File",
            Self::RawSpectralDataFile => "Raw Spectral Data File",
            Self::SpotPickingFile => "Spot Picking File",
            Self::AssayName => "Assay Name",
            Self::DataNormalizationName => "Data Normalization Name",
            Self::DataTransformationName => "Data Transformation Name",
            Self::GelElectrophoresisAssayName => "Gel Electrophoresis Assay Name",
            Self::HybridizationAssayName => "Hybridization Assay Name",
            Self::MsAssayName => "MS Assay Name",
            Self::NormalizationName => "Normalization Name",
            Self::ScanName => "Scan Name",
            Self::ProtocolRef => "Protocol REF",
            Self::ArrayDesignRef => "Array Design REF",
            Self::Date => "Date",
            Self::FirstDimension => "First Dimension",
            Self::Label => "Label",
            Self::MaterialType => "Material Type",
            Self::Performer => "Performer",
            Self::SecondDimension => "Second Dimension",
            Self::Characteristics => "Characteristics",
            Self::Comment => "Comment",
            Self::FactorValue => "Factor Value",
            Self::ParameterValue => "Parameter Value",
            Self::TermSourceRef => "Term Source REF",
            Self::Unit => "Unit",
        }
    }

    /// Look up a kind by exact (unlabeled) header text
    pub fn from_simple_header(header: &str) -> Option<Self> {
        SIMPLE_KINDS.iter().copied().find(|k| k.as_str() == header)
    }

    /// Material or data-file name column
    pub fn is_material_name(self) -> bool {
        matches!(
            self,
            Self::SourceName
                | Self::SampleName
                | Self::ExtractName
                | Self::LabeledExtractName
                | Self::LibraryName
        ) || self.is_data_file()
    }

    /// Data-file name column
    pub fn is_data_file(self) -> bool {
        matches!(
            self,
            Self::ArrayDataFile
                | Self::ArrayDataMatrixFile
                | Self::ArrayDesignFile
                | Self::DerivedArrayDataFile
                | Self::DerivedArrayDataMatrixFile
                | Self::DerivedDataFile
                | Self::DerivedSpectralDataFile
                | Self::ImageFile
                | Self::MetaboliteAssignmentFile
                | Self::PeptideAssignmentFile
                | Self::PostTranslationalModificationAssignmentFile
                | Self::ProteinAssignmentFile
                | Self::RawDataFile
                | Self::RawSpectralDataFile
                | Self::SpotPickingFile
        )
    }

    /// Process name column (`Protocol REF` is not a name)
    pub fn is_process_name(self) -> bool {
        matches!(
            self,
            Self::AssayName
                | Self::DataNormalizationName
                | Self::DataTransformationName
                | Self::GelElectrophoresisAssayName
                | Self::HybridizationAssayName
                | Self::MsAssayName
                | Self::NormalizationName
                | Self::ScanName
        )
    }

    /// Column that can open a node segment
    pub fn is_node_start(self) -> bool {
        self.is_material_name() || self.is_process_name() || self == Self::ProtocolRef
    }

    /// Kind carrying a bracketed label
    pub fn is_labeled(self) -> bool {
        LABELED_KINDS.contains(&self)
    }

    /// `Term Source REF` or `Unit`
    pub fn is_secondary(self) -> bool {
        matches!(self, Self::TermSourceRef | Self::Unit)
    }

    /// Annotation allowed at most once per node
    pub fn is_singular(self) -> bool {
        matches!(
            self,
            Self::MaterialType
                | Self::Label
                | Self::Date
                | Self::Performer
                | Self::ArrayDesignRef
                | Self::FirstDimension
                | Self::SecondDimension
        )
    }

    /// Annotation that may be qualified with a `Term Source REF`
    pub fn accepts_term_source(self) -> bool {
        matches!(
            self,
            Self::Characteristics
                | Self::FactorValue
                | Self::ParameterValue
                | Self::FirstDimension
                | Self::SecondDimension
                | Self::MaterialType
                | Self::Label
                | Self::Unit
        )
    }

    /// Annotation that may be qualified with a `Unit`
    pub fn accepts_unit(self) -> bool {
        matches!(
            self,
            Self::Characteristics | Self::FactorValue | Self::ParameterValue
        )
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for ColumnKind {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_simple_header(&value)
            .or_else(|| LABELED_KINDS.iter().copied().find(|k| k.as_str() == value))
            .or_else(|| (value == Self::TermSourceRef.as_str()).then_some(Self::TermSourceRef))
            .ok_or_else(|| format!("unknown column kind: {value}"))
    }
}

impl From<ColumnKind> for String {
    fn from(kind: ColumnKind) -> Self {
        kind.as_str().to_string()
    }
}

/// Study or assay table; selects the allowed header set and the node kind
/// that starts every row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    /// Study table (`s_*.txt`)
    Study,
    /// Assay table (`a_*.txt`)
    Assay,
}

impl FileType {
    /// Whether a header of this kind may appear in this file type
    pub fn allows(self, kind: ColumnKind) -> bool {
        match self {
            Self::Study => matches!(
                kind,
                ColumnKind::SourceName
                    | ColumnKind::SampleName
                    | ColumnKind::ProtocolRef
                    | ColumnKind::Date
                    | ColumnKind::Performer
                    | ColumnKind::MaterialType
                    | ColumnKind::Characteristics
                    | ColumnKind::Comment
                    | ColumnKind::FactorValue
                    | ColumnKind::ParameterValue
                    | ColumnKind::TermSourceRef
                    | ColumnKind::Unit
            ),
            Self::Assay => kind != ColumnKind::SourceName,
        }
    }

    /// Whether a column of this kind opens a new node in this file type
    pub fn starts_node(self, kind: ColumnKind) -> bool {
        kind.is_node_start() && self.allows(kind)
    }

    /// Node type every serialized row starts from
    pub fn starting_kind(self) -> ColumnKind {
        match self {
            Self::Study => ColumnKind::SourceName,
            Self::Assay => ColumnKind::SampleName,
        }
    }

    /// Lowercase name used in messages
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Study => "study",
            Self::Assay => "assay",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
