//! # relselect
//!
//! Compiles nested field/relation selections into the flat selection syntax of PostgREST-style
//! data access clients (`id,email,posts(title,comments(*))`), with the set of nestable
//! relations derived from a static schema description.
//!
//! - [`schema`]: schema description types and loading (JSON, TOML, YAML)
//! - [`relation`]: forward / inverse / available relation derivation
//! - [`query`]: selection trees, the total compiler and the schema-checked compiler
//! - [`typed`]: compile-time checked selections over generated table types
//! - [`config`]: builder configuration from file and environment
//!
//! ```
//! use relselect::{build_query, SelectionConfig};
//!
//! let query = build_query(
//!     "User",
//!     &SelectionConfig::new()
//!         .field("id")
//!         .field("firstName")
//!         .include(
//!             "UserOrganization",
//!             SelectionConfig::new()
//!                 .field("role")
//!                 .include("Organization", SelectionConfig::new().field("name")),
//!         ),
//! );
//! assert_eq!(query, "id,firstName,UserOrganization(role,Organization(name))");
//! ```

pub mod config;
pub mod query;
pub mod relation;
pub mod schema;
pub mod typed;

pub use crate::config::BuilderConfig;
pub use query::{
    build_query, validate_selection, RelationPolicy, SelectError, SelectionCompiler,
    SelectionConfig,
};
pub use relation::{available_relations, forward_relations, inverse_relations, RelationSet};
pub use schema::{load_schema, RelationshipDef, Schema, SchemaError, TableDef};
pub use typed::{Field, Includable, Selection, Table};
