use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    /// Absent means users are kept in memory.
    #[serde(default)]
    pub database: Option<DatabaseConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_seconds: i64,
    #[serde(default)]
    pub leeway_seconds: i64,
}

// Keeps the secret out of logs.
impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("expiration_seconds", &self.expiration_seconds)
            .field("leeway_seconds", &self.leeway_seconds)
            .finish()
    }
}

impl JwtConfig {
    pub const MAX_EXPIRATION_SECONDS: i64 = 365 * 24 * 60 * 60;
    pub const MAX_LEEWAY_SECONDS: i64 = 60 * 60;

    pub fn lifetime(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.expiration_seconds)
    }

    pub fn leeway(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.leeway_seconds)
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (JWT__SECRET, SERVER__HTTP_PORT, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: JWT__EXPIRATION_SECONDS=900 overrides jwt.expiration_seconds
            .add_source(Environment::default().separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=JwtConfig::MAX_EXPIRATION_SECONDS).contains(&self.jwt.expiration_seconds) {
            return Err(ConfigError::Message(format!(
                "jwt.expiration_seconds must be between 1 and {}",
                JwtConfig::MAX_EXPIRATION_SECONDS
            )));
        }
        if !(0..=JwtConfig::MAX_LEEWAY_SECONDS).contains(&self.jwt.leeway_seconds) {
            return Err(ConfigError::Message(format!(
                "jwt.leeway_seconds must be between 0 and {}",
                JwtConfig::MAX_LEEWAY_SECONDS
            )));
        }
        Ok(())
    }
}
