use std::fmt;

use serde::{Deserialize, Serialize};

/// Reference to a term in an ontology.
///
/// Empty strings are stored as `None`, so a reference without any content is
/// always the single value `OntologyTermRef::default()`. A reference with
/// only a name keeps the name as free text inside a term column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OntologyTermRef {
    /// Human-readable term name
    pub name: Option<String>,
    /// Term accession, e.g. `NCBITAXON:10090`
    pub accession: Option<String>,
    /// Name of the ontology source (declared in the investigation)
    pub ontology_name: Option<String>,
}

fn non_empty(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    (!value.is_empty()).then_some(value)
}

impl OntologyTermRef {
    /// Build a normalized reference from raw cell values
    pub fn new(
        name: impl Into<String>,
        accession: impl Into<String>,
        ontology_name: impl Into<String>,
    ) -> Self {
        Self {
            name: non_empty(name),
            accession: non_empty(accession),
            ontology_name: non_empty(ontology_name),
        }
    }

    /// No name, accession or ontology
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.accession.is_none() && self.ontology_name.is_none()
    }

    /// Ontology or accession given without all three parts
    pub fn is_incomplete(&self) -> bool {
        (self.accession.is_some() || self.ontology_name.is_some())
            && (self.name.is_none() || self.accession.is_none() || self.ontology_name.is_none())
    }

    /// Name cell text
    pub fn name_str(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Accession cell text
    pub fn accession_str(&self) -> &str {
        self.accession.as_deref().unwrap_or("")
    }

    /// Ontology cell text
    pub fn ontology_str(&self) -> &str {
        self.ontology_name.as_deref().unwrap_or("")
    }
}

impl fmt::Display for OntologyTermRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.ontology_name, &self.accession) {
            (None, None) => f.write_str(self.name_str()),
            _ => write!(
                f,
                "{} ({}:{})",
                self.name_str(),
                self.ontology_str(),
                self.accession_str()
            ),
        }
    }
}

/// Either a literal value or an ontology-qualified value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FreeTextOrTermRef {
    /// Ontology term reference
    TermRef(OntologyTermRef),
    /// Free text
    Text(String),
}

impl FreeTextOrTermRef {
    /// Text written to the value cell
    pub fn name(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::TermRef(term) => term.name_str(),
        }
    }

    /// The term reference, if this is one
    pub fn as_term_ref(&self) -> Option<&OntologyTermRef> {
        match self {
            Self::TermRef(term) => Some(term),
            Self::Text(_) => None,
        }
    }

    /// Carries any non-empty content
    pub fn has_content(&self) -> bool {
        match self {
            Self::Text(text) => !text.is_empty(),
            Self::TermRef(term) => !term.is_empty(),
        }
    }
}

impl Default for FreeTextOrTermRef {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<&str> for FreeTextOrTermRef {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for FreeTextOrTermRef {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<OntologyTermRef> for FreeTextOrTermRef {
    fn from(term: OntologyTermRef) -> Self {
        Self::TermRef(term)
    }
}

impl fmt::Display for FreeTextOrTermRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::TermRef(term) => term.fmt(f),
        }
    }
}
