//! Selection configuration tree.
//!
//! One node per visited table: which of its fields to select and which related tables to
//! nest, each with its own node. Both maps keep insertion order, which is the order the
//! compiled expression lists them in.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Caller-supplied nested selection for one table.
///
/// Only `true` entries of `select` are honored. With no honored field the table contributes
/// the `*` wildcard.
///
/// This includes a `select` whose entries are all `false`: `{"select": {"a": false}}` compiles
/// to `*`, not to an empty fields clause. Builders that emit `posts()` for that input select
/// nothing from the table; here the table is always selected in full instead.
///
/// # Example
///
/// ```
/// use relselect::query::{build_query, SelectionConfig};
///
/// let config = SelectionConfig::new()
///     .field("id")
///     .field("email")
///     .include("posts", SelectionConfig::new().field("title"));
///
/// assert_eq!(build_query("users", &config), "id,email,posts(title)");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub select: Option<IndexMap<String, bool>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<IndexMap<String, SelectionConfig>>,
}

impl SelectionConfig {
    /// Empty configuration: every field, no relations
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `name`
    pub fn field(self, name: impl Into<String>) -> Self {
        self.set_field(name, true)
    }

    /// Record an explicit flag for `name`; `false` entries are kept but never emitted
    pub fn set_field(mut self, name: impl Into<String>, selected: bool) -> Self {
        self.select
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), selected);
        self
    }

    /// Nest `relation` with its own configuration. Re-including a relation replaces its
    /// configuration but keeps its original position.
    pub fn include(mut self, relation: impl Into<String>, nested: SelectionConfig) -> Self {
        self.include
            .get_or_insert_with(IndexMap::new)
            .insert(relation.into(), nested);
        self
    }

    /// Fields flagged `true`, in insertion order
    pub fn selected_fields(&self) -> impl Iterator<Item = &str> {
        self.select
            .iter()
            .flatten()
            .filter(|(_, selected)| **selected)
            .map(|(name, _)| name.as_str())
    }

    /// Nested relations, in insertion order
    pub fn includes(&self) -> impl Iterator<Item = (&str, &SelectionConfig)> {
        self.include
            .iter()
            .flatten()
            .map(|(name, nested)| (name.as_str(), nested))
    }

    /// Whether this node selects every field (no `true` entry in `select`, which covers an
    /// absent, empty or all-`false` map)
    pub fn selects_all(&self) -> bool {
        self.selected_fields().next().is_none()
    }

    /// Parse a configuration written as JSON, e.g. `{"select": {"id": true}, "include": {...}}`
    pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_false_select_selects_all() {
        // EDGE CASE: every entry explicitly `false` behaves like no `select` at all
        let config = SelectionConfig::from_json_str(r#"{"select": {"a": false, "b": false}}"#)
            .unwrap();
        assert!(config.selects_all());
        assert_eq!(config.selected_fields().count(), 0);
        assert_eq!(crate::query::build_query("T", &config), "*");

        let nested = SelectionConfig::new().include("posts", config);
        assert_eq!(crate::query::build_query("users", &nested), "*,posts(*)");
    }

    #[test]
    fn test_selected_fields_skip_false() {
        let config = SelectionConfig::new()
            .field("id")
            .set_field("password", false)
            .field("email");

        assert_eq!(config.selected_fields().collect::<Vec<_>>(), vec!["id", "email"]);
        assert!(!config.selects_all());
    }

    #[test]
    fn test_new_selects_all() {
        let config = SelectionConfig::new();
        assert!(config.selects_all());
        assert_eq!(config.includes().count(), 0);
    }

    #[test]
    fn test_reinclude_keeps_position() {
        let config = SelectionConfig::new()
            .include("a", SelectionConfig::new())
            .include("b", SelectionConfig::new())
            .include("a", SelectionConfig::new().field("x"));

        let names: Vec<_> = config.includes().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["a", "b"]);
        let (_, a) = config.includes().next().unwrap();
        assert_eq!(a.selected_fields().collect::<Vec<_>>(), vec!["x"]);
    }

    #[test]
    fn test_from_json_preserves_order() {
        let config = SelectionConfig::from_json_str(
            r#"{"select": {"zeta": true, "alpha": true, "mid": false}, "include": {"Zoo": {}, "Ark": {"select": {"id": true}}}}"#,
        )
        .unwrap();

        assert_eq!(config.selected_fields().collect::<Vec<_>>(), vec!["zeta", "alpha"]);
        assert_eq!(
            config.includes().map(|(name, _)| name).collect::<Vec<_>>(),
            vec!["Zoo", "Ark"]
        );
    }

    #[test]
    fn test_from_json_rejects_non_bool_flags() {
        assert!(SelectionConfig::from_json_str(r#"{"select": {"id": 1}}"#).is_err());
    }
}
