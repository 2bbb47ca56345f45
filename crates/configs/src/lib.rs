//! # configs
//!
//! Layered runtime settings for Flatboard. Later layers win:
//!
//! 1. built-in defaults
//! 2. an optional `flatboard.toml` (or any format `config` understands)
//! 3. `FLATBOARD__SECTION__KEY` environment variables (`.env` is loaded first)

use std::collections::HashMap;
use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;

pub const ENV_PREFIX: &str = "FLATBOARD";
pub const DEFAULT_CONFIG_FILE: &str = "flatboard";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    /// Location of the JSON data file.
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Settings {
    /// Loads `.env`, `./flatboard.*` and the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }
        Self::load_from(DEFAULT_CONFIG_FILE, None)
    }

    /// Loads from the named config file and an environment map.
    ///
    /// `env = None` reads the real process environment.
    pub fn load_from(file: &str, env: Option<HashMap<String, String>>) -> Result<Self, ConfigError> {
        let settings: Settings = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("storage.path", "data/boardDB.json")?
            .set_default("log.level", "info")?
            .set_default("log.format", "pretty")?
            .add_source(File::with_name(file).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Invalid("server.port must be non-zero".into()));
        }
        if self.storage.path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("storage.path must not be empty".into()));
        }
        if self.log.level.trim().is_empty() {
            return Err(ConfigError::Invalid("log.level must not be empty".into()));
        }
        Ok(())
    }
}
