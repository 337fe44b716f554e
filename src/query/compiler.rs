//! Selection compiler.
//!
//! Flattens a [`SelectionConfig`] tree into the client's selection syntax:
//!
//! ```text
//! selection      := fieldsClause ("," relationClause)*
//! fieldsClause   := "*" | field ("," field)*
//! relationClause := relationName "(" selection ")"
//! ```
//!
//! Names are emitted verbatim: no quoting or escaping.

use crate::config::BuilderConfig;
use crate::query::error::SelectError;
use crate::query::selection::SelectionConfig;
use crate::query::validate::validate_selection;
use crate::schema::Schema;
use serde::{Deserialize, Serialize};

/// What checked compilation does with relation names the schema does not allow
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationPolicy {
    /// Compile whatever the caller supplied (well-formed but possibly meaningless output)
    #[default]
    Permissive,
    /// Validate the tree against the schema before compiling
    Strict,
}

/// Compile `config` for `table` into a selection expression.
///
/// Total and schema-agnostic: `table` only names the root node. Relation names under
/// `include` are not checked; see [`SelectionCompiler`] for the checked variant.
///
/// # Example
///
/// ```
/// use relselect::query::{build_query, SelectionConfig};
///
/// let config = SelectionConfig::new().field("a").include(
///     "R",
///     SelectionConfig::new()
///         .field("x")
///         .include("S", SelectionConfig::new().field("y")),
/// );
///
/// assert_eq!(build_query("T", &config), "a,R(x,S(y))");
/// assert_eq!(build_query("T", &SelectionConfig::new()), "*");
/// ```
pub fn build_query(table: &str, config: &SelectionConfig) -> String {
    let mut out = String::new();
    write_selection(&mut out, table, config);
    out
}

fn write_selection(out: &mut String, table: &str, config: &SelectionConfig) {
    log::trace!("Compiling selection node for '{}'", table);

    if config.selects_all() {
        out.push('*');
    } else {
        for (i, field) in config.selected_fields().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push_str(field);
        }
    }

    for (relation, nested) in config.includes() {
        out.push(',');
        out.push_str(relation);
        out.push('(');
        write_selection(out, relation, nested);
        out.push(')');
    }
}

/// Compiler bound to a schema and a [`RelationPolicy`].
///
/// # Example
///
/// ```
/// use relselect::query::{SelectError, SelectionCompiler, SelectionConfig};
/// use relselect::schema::{RelationshipDef, Schema, TableDef};
///
/// let schema = Schema::new()
///     .with_table("users", TableDef::new().with_field("id", "uuid"))
///     .with_table(
///         "posts",
///         TableDef::new()
///             .with_field("title", "text")
///             .with_relationship(RelationshipDef::references("users")),
///     );
///
/// let config = SelectionConfig::new().include("comments", SelectionConfig::new());
///
/// // Permissive compilation never fails
/// let permissive = SelectionCompiler::new(&schema);
/// assert_eq!(permissive.compile("users", &config).unwrap(), "*,comments(*)");
///
/// // Strict compilation checks every include against the schema
/// let strict = SelectionCompiler::strict(&schema);
/// assert!(matches!(
///     strict.compile("users", &config),
///     Err(SelectError::InvalidRelation { .. })
/// ));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SelectionCompiler<'s> {
    schema: &'s Schema,
    policy: RelationPolicy,
}

impl<'s> SelectionCompiler<'s> {
    /// Permissive compiler
    pub fn new(schema: &'s Schema) -> Self {
        Self::with_policy(schema, RelationPolicy::Permissive)
    }

    /// Validating compiler
    pub fn strict(schema: &'s Schema) -> Self {
        Self::with_policy(schema, RelationPolicy::Strict)
    }

    pub fn with_policy(schema: &'s Schema, policy: RelationPolicy) -> Self {
        Self { schema, policy }
    }

    /// Compiler using the policy from loaded configuration
    pub fn from_config(schema: &'s Schema, config: &BuilderConfig) -> Self {
        Self::with_policy(schema, config.relation_policy)
    }

    pub fn schema(&self) -> &'s Schema {
        self.schema
    }

    pub fn policy(&self) -> RelationPolicy {
        self.policy
    }

    /// Compile `config` for `table`.
    ///
    /// Never fails under [`RelationPolicy::Permissive`].
    pub fn compile(&self, table: &str, config: &SelectionConfig) -> Result<String, SelectError> {
        #[cfg(feature = "tracing")]
        let _span =
            tracing::debug_span!("compile_selection", table, policy = ?self.policy).entered();

        if self.policy == RelationPolicy::Strict {
            if let Err(err) = validate_selection(self.schema, table, config) {
                log::debug!("Rejected selection for '{}': {}", table, err);
                return Err(err);
            }
        }

        Ok(build_query(table, config))
    }
}
