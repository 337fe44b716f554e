//! Code generation model derived from a schema description

use crate::naming::IdentAllocator;
use proc_macro2::Ident;
use relselect::relation::available_relations;
use relselect::Schema;
use std::collections::HashMap;

/// Everything the writer needs, with identifiers already resolved
#[derive(Debug, Clone)]
pub struct SchemaModel {
    pub tables: Vec<TableModel>,
}

/// One table of the generated module
#[derive(Debug, Clone)]
pub struct TableModel {
    /// Table identifier in the schema
    pub name: String,
    /// Marker struct
    pub ident: Ident,
    /// Field enum
    pub field_enum: Ident,
    pub fields: Vec<FieldModel>,
    /// Marker structs of available relations, sorted by table identifier
    pub relations: Vec<Ident>,
}

/// One row field
#[derive(Debug, Clone)]
pub struct FieldModel {
    /// Column name in the schema
    pub column: String,
    pub variant: Ident,
}

impl SchemaModel {
    pub fn from_schema(schema: &Schema) -> Self {
        let mut module_idents = IdentAllocator::new();

        let table_idents: HashMap<&str, Ident> = schema
            .table_names()
            .map(|name| (name, module_idents.allocate(name)))
            .collect();

        let tables = schema
            .tables
            .iter()
            .map(|(name, def)| {
                let ident = table_idents[name.as_str()].clone();
                let field_enum = module_idents.allocate(&format!("{ident}Field"));

                let mut variants = IdentAllocator::new();
                let fields = def
                    .field_names()
                    .map(|column| FieldModel {
                        column: column.to_string(),
                        variant: variants.allocate(column),
                    })
                    .collect();

                let relations = available_relations(schema, name)
                    .into_iter()
                    .map(|related| table_idents[related].clone())
                    .collect();

                TableModel {
                    name: name.clone(),
                    ident,
                    field_enum,
                    fields,
                    relations,
                }
            })
            .collect();

        Self { tables }
    }

    pub fn table(&self, name: &str) -> Option<&TableModel> {
        self.tables.iter().find(|t| t.name == name)
    }
}
