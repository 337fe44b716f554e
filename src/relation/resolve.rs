//! Forward, inverse and available relation derivation
//!
//! Descriptors without a usable `referenced_table` are skipped silently; generated schemas
//! routinely carry partial metadata.

use crate::schema::Schema;
use std::collections::BTreeSet;

/// Set of related table identifiers, ordered by name
pub type RelationSet<'s> = BTreeSet<&'s str>;

/// Tables referenced by the foreign keys declared on `table`.
///
/// Unknown tables yield the empty set.
///
/// # Example
///
/// ```
/// use relselect::relation::forward_relations;
/// use relselect::schema::{RelationshipDef, Schema, TableDef};
///
/// let schema = Schema::new()
///     .with_table("users", TableDef::new())
///     .with_table(
///         "posts",
///         TableDef::new().with_relationship(RelationshipDef::references("users")),
///     );
///
/// assert_eq!(forward_relations(&schema, "posts").into_iter().collect::<Vec<_>>(), vec!["users"]);
/// assert!(forward_relations(&schema, "users").is_empty());
/// ```
pub fn forward_relations<'s>(schema: &'s Schema, table: &str) -> RelationSet<'s> {
    let Some(def) = schema.table(table) else {
        return RelationSet::new();
    };

    def.relationships
        .iter()
        .filter_map(|rel| rel.resolved_target(schema))
        .collect()
}

/// Tables that declare a foreign key referencing `table`.
///
/// Scans every relationship of every table; schemas are small and this runs once per
/// (schema, table) pair.
pub fn inverse_relations<'s>(schema: &'s Schema, table: &str) -> RelationSet<'s> {
    schema
        .tables
        .iter()
        .filter(|(_, def)| {
            def.relationships
                .iter()
                .any(|rel| rel.referenced_table.as_deref() == Some(table))
        })
        .map(|(name, _)| name.as_str())
        .collect()
}

/// Union of [`forward_relations`] and [`inverse_relations`]: every relation identifier that may
/// appear under `include` for `table`.
pub fn available_relations<'s>(schema: &'s Schema, table: &str) -> RelationSet<'s> {
    let mut relations = forward_relations(schema, table);
    relations.extend(inverse_relations(schema, table));
    relations
}
