//! # Node Builder
//!
//! Turns data rows into typed [`Material`](crate::model::Material) and
//! [`Process`](crate::model::Process) values, one per header segment.
//!
//! ## Naming
//!
//! | Node | `unique_name` |
//! |------|---------------|
//! | Source or Sample | the name cell |
//! | other named material or process | `{name}-COL{column}`, column counted from 1 |
//! | unnamed material | `Empty {type}-{n}` |
//! | unnamed process with `Protocol REF` | `{protocol}-{n}` |
//! | unnamed process without `Protocol REF` | `Anonymous {type}-{n}` |
//!
//! Counters live in a [`BuildContext`] owned by the caller. Source and
//! sample names are reserved there first so no counted name takes them.
//!
//! ## Lists
//!
//! `Characteristics` and `Parameter Value` cells hold `;`-separated values;
//! a literal `;` is written `\;`. See [`split_escaped`] and [`join_escaped`].

mod error;
mod escape;
mod node;
mod row;


pub use error::BuildError;
pub use escape::{join_escaped, split_escaped};
pub use node::NodeBuilder;
pub use row::{BuildContext, RowBuilder};
