//! Shared configuration used across the tablechat crates.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Global application configuration (gateway identity + dataset source).
/// Load from TOML or env.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Application identity shown by the status endpoint.
    pub app_name: String,
    /// HTTP port for the gateway.
    pub port: u16,
    /// Optional path to a JSON file of records (array of {Name, Age, Salary}).
    /// When absent or unreadable the gateway serves the builtin demo table.
    #[serde(default)]
    pub dataset_path: Option<String>,
}

impl CoreConfig {
    /// Load config from file and environment. Precedence: env `TABLECHAT_CONFIG`
    /// path > `config/gateway.toml` > defaults.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_path =
            std::env::var("TABLECHAT_CONFIG").unwrap_or_else(|_| "config/gateway".to_string());
        let builder = config::Config::builder()
            .set_default("app_name", "Tablechat Gateway")?
            .set_default("port", 8001_i64)?;

        let path = Path::new(&config_path);
        let builder = if path.exists() {
            builder.add_source(config::File::from(path))
        } else {
            builder
        };

        let built = builder
            .add_source(config::Environment::with_prefix("TABLECHAT").separator("__"))
            .build()?;

        built.try_deserialize()
    }
}
