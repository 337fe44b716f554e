//! Typed selection layer.
//!
//! Generated code (see `relselect-codegen`) describes each table of a schema with:
//! - a marker type implementing [`Table`]
//! - a field enum implementing [`Field`]
//! - one `impl Includable<Related> for Table {}` per available relation
//!
//! [`Selection`] uses those impls so that selecting a foreign field or nesting an unrelated
//! table fails to compile. Nothing is checked at runtime.
//!
//! ```
//! use relselect::typed::{Field, Includable, Selection, Table};
//!
//! pub struct Users;
//! pub struct Posts;
//!
//! #[derive(Debug, Clone, Copy)]
//! pub enum UsersField { Id, Email }
//! #[derive(Debug, Clone, Copy)]
//! pub enum PostsField { Title }
//!
//! impl Field for UsersField {
//!     fn name(self) -> &'static str {
//!         match self { UsersField::Id => "id", UsersField::Email => "email" }
//!     }
//! }
//! impl Field for PostsField {
//!     fn name(self) -> &'static str { "title" }
//! }
//! impl Table for Users { const NAME: &'static str = "users"; type Field = UsersField; }
//! impl Table for Posts { const NAME: &'static str = "posts"; type Field = PostsField; }
//! impl Includable<Posts> for Users {}
//! impl Includable<Users> for Posts {}
//!
//! let query = Selection::<Users>::all()
//!     .select(UsersField::Email)
//!     .include(Selection::<Posts>::all().select(PostsField::Title))
//!     .build();
//! assert_eq!(query, "email,posts(title)");
//! ```
//!
//! Nesting a table with no relation to the parent is rejected by the compiler:
//!
//! ```compile_fail
//! use relselect::typed::{Field, Selection, Table};
//!
//! pub struct Users;
//! pub struct Invoices;
//!
//! #[derive(Debug, Clone, Copy)]
//! pub enum NoField {}
//! impl Field for NoField {
//!     fn name(self) -> &'static str { match self {} }
//! }
//! impl Table for Users { const NAME: &'static str = "users"; type Field = NoField; }
//! impl Table for Invoices { const NAME: &'static str = "invoices"; type Field = NoField; }
//!
//! // no `Includable<Invoices> for Users`
//! let _ = Selection::<Users>::all().include(Selection::<Invoices>::all());
//! ```

use crate::query::{build_query, SelectionConfig};
use std::fmt;
use std::marker::PhantomData;

/// A table of a generated schema
pub trait Table {
    /// Table identifier as it appears in the schema description
    const NAME: &'static str;
    /// Row fields of the table
    type Field: Field;
}

/// One row field of a table
pub trait Field: Copy {
    /// Column name as it appears in the schema description
    fn name(self) -> &'static str;
}

/// `Self` may nest `R` in a selection: `R` is a forward or inverse relation of `Self`.
pub trait Includable<R: Table>: Table {}

/// Selection tree rooted at table `T`
pub struct Selection<T: Table> {
    config: SelectionConfig,
    _table: PhantomData<fn() -> T>,
}

impl<T: Table> Selection<T> {
    /// Every field, no relations
    pub fn all() -> Self {
        Self {
            config: SelectionConfig::new(),
            _table: PhantomData,
        }
    }

    /// Select one field of `T`
    pub fn select(mut self, field: T::Field) -> Self {
        self.config = self.config.field(field.name());
        self
    }

    /// Select several fields of `T`, in order
    pub fn select_all_of<I>(self, fields: I) -> Self
    where
        I: IntoIterator<Item = T::Field>,
    {
        fields.into_iter().fold(self, Self::select)
    }

    /// Nest a related table
    pub fn include<R>(mut self, nested: Selection<R>) -> Self
    where
        R: Table,
        T: Includable<R>,
    {
        self.config = self.config.include(R::NAME, nested.config);
        self
    }

    /// Compile to a selection expression
    pub fn build(&self) -> String {
        build_query(T::NAME, &self.config)
    }

    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }

    pub fn into_config(self) -> SelectionConfig {
        self.config
    }
}

impl<T: Table> Default for Selection<T> {
    fn default() -> Self {
        Self::all()
    }
}

impl<T: Table> Clone for Selection<T> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            _table: PhantomData,
        }
    }
}

impl<T: Table> fmt::Debug for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selection")
            .field("table", &T::NAME)
            .field("config", &self.config)
            .finish()
    }
}
