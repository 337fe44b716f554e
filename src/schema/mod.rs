//! Schema description module.
//!
//! A schema description is the static artifact a schema generator produces for a database:
//! one entry per table, each carrying its row field names and the foreign-key relationship
//! descriptors declared on it. The relation resolver and the schema-checked compiler only
//! ever read it; nothing here talks to a live database.
//!
//! # Accepted shapes
//!
//! - Flat: `{"tables": {"users": {"row": {...}, "relationships": [...]}}}`
//! - Generator shape: `{"public": {"Tables": {"users": {"Row": {...}, "Relationships": [...]}}}}`

pub mod def;
#[doc(inline)]
pub use def::{RelationshipDef, Schema, TableDef};

pub mod error;
#[doc(inline)]
pub use error::SchemaError;

pub mod parser;
#[doc(inline)]
pub use parser::load_schema;
