use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::kind::{LABELED_KINDS, TERM_ACCESSION_NUMBER};
use super::{ColumnKind, FileType, HeaderError};

/// One logical column group of a table header.
///
/// `term_source_ref` and `unit` are indices of the qualifying descriptors
/// within the same segment. They are filled in by
/// [`crate::grouping::group_columns`], never by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Column type
    pub kind: ColumnKind,
    /// Bracketed label of labeled kinds
    pub label: Option<String>,
    /// Zero-based index of the first physical column
    pub col_no: usize,
    /// Number of physical columns (2 for `Term Source REF`, else 1)
    pub span: usize,
    /// Linked `Term Source REF` descriptor (segment-local index)
    pub term_source_ref: Option<usize>,
    /// Linked `Unit` descriptor (segment-local index)
    pub unit: Option<usize>,
}

impl ColumnDescriptor {
    /// Create an unlinked descriptor
    pub fn new(kind: ColumnKind, label: Option<String>, col_no: usize) -> Self {
        let span = if kind == ColumnKind::TermSourceRef { 2 } else { 1 };
        Self {
            kind,
            label,
            col_no,
            span,
            term_source_ref: None,
            unit: None,
        }
    }

    /// Header text of the first physical column, e.g. `Characteristics[organism]`
    pub fn key(&self) -> String {
        match &self.label {
            Some(label) => format!("{}[{}]", self.kind, label),
            None => self.kind.as_str().to_string(),
        }
    }

    /// Header texts of every physical column this descriptor covers
    pub fn header_strings(&self) -> Vec<String> {
        if self.kind == ColumnKind::TermSourceRef {
            vec![self.key(), TERM_ACCESSION_NUMBER.to_string()]
        } else {
            vec![self.key()]
        }
    }
}

/// Lazy tokenizer turning raw header strings into [`ColumnDescriptor`]s.
///
/// The iterator stops after yielding the first error.
pub struct HeaderParser<I> {
    tokens: I,
    file_type: FileType,
    declared_factors: Option<HashSet<String>>,
    col_no: usize,
    done: bool,
}

impl<I, S> HeaderParser<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    /// Create a parser over raw header tokens. Factor labels are not checked
    /// until [`HeaderParser::with_factors`] is called.
    pub fn new<T>(tokens: T, file_type: FileType) -> Self
    where
        T: IntoIterator<Item = S, IntoIter = I>,
    {
        Self {
            tokens: tokens.into_iter(),
            file_type,
            declared_factors: None,
            col_no: 0,
            done: false,
        }
    }

    /// Require `Factor Value[...]` labels to be among these names
    pub fn with_factors<F>(mut self, factors: F) -> Self
    where
        F: IntoIterator,
        F::Item: Into<String>,
    {
        self.declared_factors = Some(factors.into_iter().map(Into::into).collect());
        self
    }

    fn check_allowed(&self, kind: ColumnKind, header: &str) -> Result<(), HeaderError> {
        if self.file_type.allows(kind) {
            Ok(())
        } else {
            Err(HeaderError::NotAllowed {
                header: header.to_string(),
                file_type: self.file_type,
                column: self.col_no,
            })
        }
    }

    fn parse_next(&mut self, token: &str) -> Result<ColumnDescriptor, HeaderError> {
        let column = self.col_no;

        if token == ColumnKind::TermSourceRef.as_str() {
            self.check_allowed(ColumnKind::TermSourceRef, token)?;
            // The accession column is consumed unchecked
            if self.tokens.next().is_none() {
                return Err(HeaderError::MalformedTermRef { column });
            }
            let descriptor = ColumnDescriptor::new(ColumnKind::TermSourceRef, None, column);
            self.col_no += descriptor.span;
            return Ok(descriptor);
        }

        if let Some(kind) = ColumnKind::from_simple_header(token) {
            self.check_allowed(kind, token)?;
            self.col_no += 1;
            return Ok(ColumnDescriptor::new(kind, None, column));
        }

        for &kind in LABELED_KINDS {
            let Some(rest) = token.strip_prefix(kind.as_str()) else {
                continue;
            };
            self.check_allowed(kind, kind.as_str())?;
            let label = rest
                .strip_prefix('[')
                .and_then(|r| r.strip_suffix(']'))
                .filter(|l| !l.contains('[') && !l.contains(']'))
                .ok_or_else(|| HeaderError::MalformedLabel {
                    header: token.to_string(),
                    column,
                })?;
            if kind == ColumnKind::FactorValue {
                if let Some(factors) = &self.declared_factors {
                    if !factors.contains(label) {
                        return Err(HeaderError::UndeclaredFactor {
                            factor: label.to_string(),
                            column,
                        });
                    }
                }
            }
            self.col_no += 1;
            return Ok(ColumnDescriptor::new(kind, Some(label.to_string()), column));
        }

        Err(HeaderError::UnknownHeader {
            header: token.to_string(),
            column,
        })
    }
}

impl<I, S> Iterator for HeaderParser<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = Result<ColumnDescriptor, HeaderError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let Some(token) = self.tokens.next() else {
            self.done = true;
            return None;
        };
        let result = self.parse_next(token.as_ref());
        if result.is_err() {
            self.done = true;
        }
        Some(result)
    }
}

/// Parse a complete header row without factor checks.
pub fn parse_header<T, S>(tokens: T, file_type: FileType) -> Result<Vec<ColumnDescriptor>, HeaderError>
where
    T: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    HeaderParser::new(tokens, file_type).collect()
}
