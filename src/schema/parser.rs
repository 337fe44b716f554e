//! Schema description parsing
//!
//! Generator output is usually JSON; TOML and YAML are accepted for hand-maintained schemas.
//! Both the flat `tables` shape and the namespaced `public.Tables` shape are recognized.

use crate::schema::def::Schema;
use crate::schema::error::SchemaError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Top-level document: either namespaced under `public` or flat
#[derive(Deserialize)]
#[serde(untagged)]
enum SchemaDocument {
    Namespaced { public: Schema },
    Flat(Schema),
}

impl From<SchemaDocument> for Schema {
    fn from(doc: SchemaDocument) -> Self {
        match doc {
            SchemaDocument::Namespaced { public } => public,
            SchemaDocument::Flat(schema) => schema,
        }
    }
}

impl Schema {
    pub fn from_json_str(content: &str) -> Result<Self, SchemaError> {
        let doc: SchemaDocument = serde_json::from_str(content)?;
        Ok(doc.into())
    }

    pub fn from_toml_str(content: &str) -> Result<Self, SchemaError> {
        let doc: SchemaDocument = toml::from_str(content)?;
        Ok(doc.into())
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, SchemaError> {
        let doc: SchemaDocument = serde_yaml::from_str(content)?;
        Ok(doc.into())
    }
}

/// Load a schema description from a file.
///
/// The format comes from the extension (`json`, `toml`, `yaml`/`yml`). Files with any other
/// extension are sniffed from their content.
pub fn load_schema(path: impl AsRef<Path>) -> Result<Schema, SchemaError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| SchemaError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("");

    let schema = match ext {
        "json" => Schema::from_json_str(&content)?,
        "toml" => Schema::from_toml_str(&content)?,
        "yaml" | "yml" => Schema::from_yaml_str(&content)?,
        _ => {
            let trimmed = content.trim_start();
            if trimmed.starts_with('{') {
                Schema::from_json_str(&content)?
            } else if trimmed.starts_with('[') || content.contains('=') {
                Schema::from_toml_str(&content)?
            } else if content.contains(':') {
                Schema::from_yaml_str(&content)?
            } else {
                return Err(SchemaError::UnknownFormat {
                    path: path.display().to_string(),
                });
            }
        }
    };

    log::debug!(
        "Loaded schema '{}' with {} table(s)",
        path.display(),
        schema.len()
    );
    Ok(schema)
}
