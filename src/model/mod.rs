//! # Data Model
//!
//! Typed values produced by the table parser and consumed by the
//! serializer, validator and exporters.
//!
//! - [`Material`] and [`Process`] are the two node roles, joined by [`Node`].
//! - [`Arc`] links two nodes by unique name.
//! - [`Graph`] holds one table: node maps plus the ordered arc list.
//! - [`InvestigationInfo`] carries the declarations a table refers to
//!   (factors, protocols, ontology sources, assay types).
//!
//! All types serialize with serde so a parsed graph can be dumped as JSON.

mod graph;
mod investigation;
mod node;
mod term;


pub use graph::Graph;
pub use investigation::{
    AssayInfo, FactorInfo, InvestigationInfo, OntologySource, ProtocolInfo, StudyInfo,
};
pub use node::{Arc, Characteristic, Comment, FactorValue, Material, Node, ParameterValue, Process};
pub use term::{FreeTextOrTermRef, OntologyTermRef};
