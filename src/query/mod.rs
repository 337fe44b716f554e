//! Selection query module.
//!
//! - [`SelectionConfig`]: the nested field/relation selection tree
//! - [`build_query`]: total, schema-agnostic compilation to the flat selection syntax
//! - [`validate_selection`] / [`SelectionCompiler`]: compilation checked against a schema

pub mod compiler;
pub mod error;
pub mod selection;
pub mod validate;

pub use compiler::{build_query, RelationPolicy, SelectionCompiler};
pub use error::SelectError;
pub use selection::SelectionConfig;
pub use validate::validate_selection;
