//! # Row Grouping
//!
//! Splits the descriptor sequence of a header into node [`Segment`]s and
//! resolves the links from annotations to their `Term Source REF` and `Unit`
//! qualifiers.
//!
//! ```text
//! Source Name | Characteristics[organism] Term Source REF | Protocol REF Date | Sample Name
//! `---------- material ---------------------------------'`---- process ----'`- material -'
//! ```

mod error;
mod segment;

#[cfg(test)]
mod tests;

pub use error::GroupingError;
pub use segment::{group_columns, Segment, SegmentKind};
