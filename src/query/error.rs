//! Selection error types

use thiserror::Error;

/// Errors reported by schema-checked compilation.
///
/// `path` is the dotted chain of relation names from the root table to the offending node.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    /// Root table is not part of the schema
    #[error("Unknown table '{table}'")]
    UnknownTable { table: String },
    /// Selected field is not a row field of its table
    #[error("Unknown field '{field}' on table '{table}' (at '{path}')")]
    UnknownField {
        path: String,
        table: String,
        field: String,
    },
    /// Included name is neither a forward nor an inverse relation of its parent
    #[error(
        "'{relation}' is not a relation of '{table}' (at '{path}'); available: [{}]",
        .available.join(", ")
    )]
    InvalidRelation {
        path: String,
        table: String,
        relation: String,
        available: Vec<String>,
    },
}
