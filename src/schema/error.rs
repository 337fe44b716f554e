//! Error types for schema loading

use thiserror::Error;

/// Errors that can occur while reading a schema description
#[derive(Debug, Error)]
pub enum SchemaError {
    /// IO error reading the schema file
    #[error("Failed to read schema '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// JSON deserialization error
    #[error("Invalid JSON schema: {0}")]
    Json(#[from] serde_json::Error),
    /// TOML deserialization error
    #[error("Invalid TOML schema: {0}")]
    Toml(#[from] toml::de::Error),
    /// YAML deserialization error
    #[error("Invalid YAML schema: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// Neither the extension nor the content identify a supported format
    #[error("Unknown schema format for '{path}'. Supported: .json, .toml, .yaml")]
    UnknownFormat { path: String },
}
