//! Relation module for schema relationships.
//!
//! This module derives, for a table, which related tables may be nested under it in a
//! selection:
//! - forward relations: tables reached by following the table's own foreign keys
//! - inverse relations: tables whose foreign keys point back at the table
//! - available relations: the union of both
//!
//! All functions take the schema as an explicit argument; there is no ambient schema.

pub mod resolve;
#[doc(inline)]
pub use resolve::{available_relations, forward_relations, inverse_relations, RelationSet};
