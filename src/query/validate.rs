//! Schema check for selection trees.
//!
//! Walks the tree depth-first in insertion order and stops at the first violation.

use crate::query::error::SelectError;
use crate::query::selection::SelectionConfig;
use crate::relation::available_relations;
use crate::schema::Schema;

/// Check `config` against `schema`, starting at `table`.
///
/// - `table` must be a table of the schema
/// - every selected (`true`) field must be a row field of its table
/// - every `include` key must be an available relation of its parent table
///
/// Fields flagged `false` are never emitted and are not checked.
pub fn validate_selection(
    schema: &Schema,
    table: &str,
    config: &SelectionConfig,
) -> Result<(), SelectError> {
    if !schema.contains_table(table) {
        return Err(SelectError::UnknownTable {
            table: table.to_string(),
        });
    }

    let mut path = vec![table];
    validate_node(schema, table, config, &mut path)
}

fn validate_node<'a>(
    schema: &Schema,
    table: &str,
    config: &'a SelectionConfig,
    path: &mut Vec<&'a str>,
) -> Result<(), SelectError> {
    // Tables reached here are either the checked root or members of an available set.
    let Some(def) = schema.table(table) else {
        return Err(SelectError::UnknownTable {
            table: table.to_string(),
        });
    };

    if let Some(field) = config.selected_fields().find(|field| !def.has_field(field)) {
        return Err(SelectError::UnknownField {
            path: path.join("."),
            table: table.to_string(),
            field: field.to_string(),
        });
    }

    let available = available_relations(schema, table);
    for (relation, nested) in config.includes() {
        if !available.contains(relation) {
            return Err(SelectError::InvalidRelation {
                path: path.join("."),
                table: table.to_string(),
                relation: relation.to_string(),
                available: available.iter().map(|name| name.to_string()).collect(),
            });
        }

        path.push(relation);
        validate_node(schema, relation, nested, path)?;
        path.pop();
    }

    Ok(())
}
