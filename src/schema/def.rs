//! Schema, table and relationship descriptor types
//!
//! Field names are the only part of a row that matters for selection; row value types are kept
//! as opaque JSON values so any generator output round-trips without a type model.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A static schema description: table identifier to table descriptor.
///
/// Table order is the order of the source document, which keeps generated code and diagnostics
/// stable across runs.
///
/// # Example
///
/// ```
/// use relselect::schema::{RelationshipDef, Schema, TableDef};
///
/// let schema = Schema::new()
///     .with_table("users", TableDef::new().with_field("id", "uuid"))
///     .with_table(
///         "posts",
///         TableDef::new()
///             .with_field("id", "uuid")
///             .with_field("author_id", "uuid")
///             .with_relationship(RelationshipDef::references("users")),
///     );
///
/// assert!(schema.contains_table("posts"));
/// assert_eq!(schema.table_names().collect::<Vec<_>>(), vec!["users", "posts"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(alias = "Tables", default)]
    pub tables: IndexMap<String, TableDef>,
}

/// One table: its row shape and the foreign keys declared on it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableDef {
    /// Field name to opaque value type
    #[serde(alias = "Row", default)]
    pub row: IndexMap<String, Value>,
    /// Foreign-key descriptors, in declaration order
    #[serde(alias = "Relationships", default)]
    pub relationships: Vec<RelationshipDef>,
}

/// Foreign-key link from the owning table to `referenced_table`.
///
/// Every field is optional on the wire. A descriptor without a `referenced_table` that names a
/// table of the schema is malformed; the resolver skips it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipDef {
    #[serde(default, alias = "foreign_key_name", skip_serializing_if = "Option::is_none")]
    pub foreign_key_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub columns: Vec<String>,
    #[serde(
        default,
        alias = "referencedRelation",
        alias = "referenced_table",
        skip_serializing_if = "Option::is_none"
    )]
    pub referenced_table: Option<String>,
    #[serde(default, alias = "referenced_columns", skip_serializing_if = "Vec::is_empty")]
    pub referenced_columns: Vec<String>,
    #[serde(default, alias = "is_one_to_one", skip_serializing_if = "Option::is_none")]
    pub is_one_to_one: Option<bool>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a table, builder style
    pub fn with_table(mut self, name: impl Into<String>, table: TableDef) -> Self {
        self.tables.insert(name.into(), table);
        self
    }

    pub fn table(&self, name: &str) -> Option<&TableDef> {
        self.tables.get(name)
    }

    pub fn contains_table(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// Table identifiers in document order
    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl TableDef {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a row field. The type is informational only.
    pub fn with_field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.row.insert(name.into(), Value::String(ty.into()));
        self
    }

    pub fn with_relationship(mut self, relationship: RelationshipDef) -> Self {
        self.relationships.push(relationship);
        self
    }

    /// Row field names in row order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.row.keys().map(String::as_str)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.row.contains_key(name)
    }
}

impl RelationshipDef {
    /// Descriptor pointing at `table`, with no column metadata
    pub fn references(table: impl Into<String>) -> Self {
        Self {
            referenced_table: Some(table.into()),
            ..Self::default()
        }
    }

    pub fn foreign_key_name(mut self, name: impl Into<String>) -> Self {
        self.foreign_key_name = Some(name.into());
        self
    }

    /// Local and referenced column lists
    pub fn columns<L, R>(mut self, local: L, referenced: R) -> Self
    where
        L: IntoIterator,
        L::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        self.columns = local.into_iter().map(Into::into).collect();
        self.referenced_columns = referenced.into_iter().map(Into::into).collect();
        self
    }

    pub fn one_to_one(mut self, is_one_to_one: bool) -> Self {
        self.is_one_to_one = Some(is_one_to_one);
        self
    }

    /// The referenced table, if it names a table of `schema`
    pub fn resolved_target<'s>(&self, schema: &'s Schema) -> Option<&'s str> {
        let target = self.referenced_table.as_deref()?;
        schema
            .tables
            .get_key_value(target)
            .map(|(name, _)| name.as_str())
    }
}
