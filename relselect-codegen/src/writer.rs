//! Code generation writer

use crate::model::{SchemaModel, TableModel};
use proc_macro2::TokenStream;
use quote::quote;
use relselect::Schema;

const HEADER: &str = "// @generated by relselect-codegen. Do not edit by hand.\n\n";

#[derive(Debug, Default)]
pub struct SchemaWriter;

impl SchemaWriter {
    pub fn new() -> Self {
        Self
    }

    /// Generate the complete module source for `schema`
    pub fn generate_module(&self, schema: &Schema) -> anyhow::Result<String> {
        let model = SchemaModel::from_schema(schema);
        let code = self.generate_tokens(&model);

        let formatted = format_code(&code.to_string())?;
        Ok(format!("{HEADER}{formatted}"))
    }

    /// Token stream for every table of `model`, in schema order
    pub fn generate_tokens(&self, model: &SchemaModel) -> TokenStream {
        let tables = model.tables.iter().map(|table| self.generate_table(table));
        quote! {
            #(#tables)*
        }
    }

    fn generate_table(&self, table: &TableModel) -> TokenStream {
        let ident = &table.ident;
        let field_enum = &table.field_enum;
        let table_name = table.name.as_str();
        let table_doc = format!(" `{}` table", table.name);
        let field_doc = format!(" Row fields of `{}`", table.name);

        let variants = table.fields.iter().map(|f| &f.variant);
        let name_arms = table.fields.iter().map(|f| {
            let variant = &f.variant;
            let column = f.column.as_str();
            quote! {
                #field_enum::#variant => #column,
            }
        });

        let includable = table.relations.iter().map(|related| {
            quote! {
                impl ::relselect::typed::Includable<#related> for #ident {}
            }
        });

        quote! {
            #[doc = #table_doc]
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            pub struct #ident;

            #[doc = #field_doc]
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            pub enum #field_enum {
                #(#variants,)*
            }

            impl ::relselect::typed::Field for #field_enum {
                fn name(self) -> &'static str {
                    match self {
                        #(#name_arms)*
                    }
                }
            }

            impl ::relselect::typed::Table for #ident {
                const NAME: &'static str = #table_name;
                type Field = #field_enum;
            }

            #(#includable)*
        }
    }
}

/// Format Rust code using rustfmt, returning it unchanged when rustfmt is unavailable or fails
fn format_code(code: &str) -> anyhow::Result<String> {
    use std::io::Write;
    use std::process::{Command, Stdio};

    let mut child = match Command::new("rustfmt")
        .args(["--edition", "2021", "--emit", "stdout"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
    {
        Ok(child) => child,
        Err(_) => {
            log::debug!("rustfmt not available, writing unformatted code");
            return Ok(code.to_string());
        }
    };

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(code.as_bytes())?;
        stdin.flush()?;
    }

    let output = child.wait_with_output()?;

    if output.status.success() {
        Ok(String::from_utf8(output.stdout)?)
    } else {
        log::warn!(
            "rustfmt failed, writing unformatted code: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        Ok(code.to_string())
    }
}
