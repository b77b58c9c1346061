//! Configuration file and environment overrides.
//!
//! The JSON file is optional. Environment variables applied on top:
//! - `API_KEY`: shared secret for mutating requests
//! - `DB_URI`: `sqlite:///path`, `sqlite://path`, `sqlite:path` or a bare path
//! - `PORT`: HTTP port

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::http_server::HttpServerConfig;
use crate::quotes::ApiKey;
use crate::telemetry::LogFormat;

use super::errors::{CliError, CliResult};

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// SQLite file path, or `:memory:`
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Shared secret; required to serve
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default)]
    pub log_format: LogFormat,

    #[serde(default)]
    pub http: HttpServerConfig,
}

fn default_database_path() -> String {
    "quotes.db".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            api_key: None,
            log_format: LogFormat::default(),
            http: HttpServerConfig::default(),
        }
    }
}

impl Config {
    /// Load from `path` if it exists, then apply process environment overrides
    pub fn load(path: &Path) -> CliResult<Self> {
        Self::load_with_env(path, |key| std::env::var(key).ok())
    }

    /// Load with an explicit environment lookup
    pub fn load_with_env<F>(path: &Path, env: F) -> CliResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = if path.exists() {
            let content = fs::read_to_string(path)
                .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;
            serde_json::from_str(&content)
                .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?
        } else {
            Config::default()
        };

        config.apply_env(env)?;
        config.validate()?;

        Ok(config)
    }

    fn apply_env<F>(&mut self, env: F) -> CliResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = env("API_KEY") {
            self.api_key = Some(key);
        }

        if let Some(uri) = env("DB_URI") {
            self.database_path = database_path_from_uri(&uri).to_string();
        }

        if let Some(port) = env("PORT") {
            self.http.port = port
                .parse()
                .map_err(|_| CliError::config_error(format!("Invalid PORT: '{}'", port)))?;
        }

        Ok(())
    }

    fn validate(&self) -> CliResult<()> {
        if self.database_path.trim().is_empty() {
            return Err(CliError::config_error("database_path must not be empty"));
        }

        if self.http.host.trim().is_empty() {
            return Err(CliError::config_error("http.host must not be empty"));
        }

        Ok(())
    }

    /// The configured api key. Serving without one is refused, since an
    /// unset secret must not authorize anything.
    pub fn api_key(&self) -> CliResult<ApiKey> {
        match self.api_key.as_deref() {
            Some(key) if !key.is_empty() => Ok(ApiKey::new(key)),
            _ => Err(CliError::config_error(
                "api_key is required (set it in the config file or via API_KEY)",
            )),
        }
    }
}

/// Strip a `sqlite:` URI scheme down to a filesystem path
fn database_path_from_uri(uri: &str) -> &str {
    ["sqlite:///", "sqlite://", "sqlite:"]
        .iter()
        .find_map(|prefix| uri.strip_prefix(prefix))
        .unwrap_or(uri)
}
