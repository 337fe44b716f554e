//! Builder configuration.
//!
//! [`BuilderConfig`] is read from the `[select]` section of `config/relselect.toml` and from
//! `RELSELECT__SELECT__*` environment variables, e.g.
//!
//! ```toml
//! [select]
//! schema_path = "schema/database.json"
//! relation_policy = "strict"
//! ```

use crate::query::RelationPolicy;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_FILE: &str = "config/relselect.toml";
const ENV_PREFIX: &str = "RELSELECT";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BuilderConfig {
    /// Schema description used when a command does not name one
    #[serde(default)]
    pub schema_path: Option<PathBuf>,
    #[serde(default)]
    pub relation_policy: RelationPolicy,
}

impl BuilderConfig {
    /// Load from `config/relselect.toml`, falling back to env vars only when the file is
    /// present but unreadable.
    pub fn load() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false))
            .add_source(env_source());

        let settings = match builder.build() {
            Ok(cfg) => cfg,
            Err(err) => {
                if Path::new(DEFAULT_CONFIG_FILE).exists() {
                    log::warn!(
                        "Failed to load {}, falling back to env. Error: {}",
                        DEFAULT_CONFIG_FILE,
                        err
                    );
                }
                Config::builder()
                    .add_source(env_source())
                    .build()
                    .map_err(|env_err| {
                        ConfigError::Message(format!(
                            "Failed to load configuration from file and env: {}, then env-only error: {}",
                            err, env_err
                        ))
                    })?
            }
        };

        Self::from_settings(&settings)
    }

    /// Load from an explicit file (which must exist), with env vars layered on top
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()).required(true))
            .add_source(env_source())
            .build()?;

        Self::from_settings(&settings)
    }

    fn from_settings(settings: &Config) -> Result<Self, ConfigError> {
        // A missing section means defaults, not an error
        match settings.get::<BuilderConfig>("select") {
            Ok(cfg) => Ok(cfg),
            Err(ConfigError::NotFound(_)) => Ok(Self::default()),
            Err(e) => Err(ConfigError::Message(format!(
                "Select configuration could not be loaded from file or environment: {}",
                e
            ))),
        }
    }
}

fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX).separator("__")
}
