//! relselect Codegen Library
//!
//! Turns a schema description into Rust source declaring one typed table per schema table.
//! The main entry point is [`SchemaWriter`], which emits table markers, field enums and the
//! `Includable` impls derived from the relation resolver.

pub mod model;
pub mod naming;
pub mod writer;

pub use model::{FieldModel, SchemaModel, TableModel};
pub use writer::SchemaWriter;
