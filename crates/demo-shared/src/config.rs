//! Configuration management

use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

use crate::constants::{DEFAULT_SESSION_KEY_PREFIX, DEFAULT_SESSION_TIMEOUT_SECS, DEFAULT_SWEEP_INTERVAL_SECS};
use crate::error::AppError;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub session: SessionSettings,
    pub cache: CacheSettings,
    #[serde(default)]
    pub users: Vec<UserEntry>,
    #[serde(default)]
    pub api_clients: Vec<ApiClientEntry>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionSettings {
    pub timeout_secs: u64,
    pub key_prefix: String,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    Memory,
    Redis,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CacheSettings {
    pub backend: CacheBackend,
    pub redis_url: Option<String>,
    pub max_connections: usize,
    pub sweep_interval_secs: u64,
}

/// Session user as listed in configuration.
///
/// `password` is either a plaintext demo secret or an Argon2 PHC string.
#[derive(Debug, Deserialize, Clone)]
pub struct UserEntry {
    pub username: String,
    pub password: String,
    pub id: i64,
    pub email: String,
}

/// API client allowed through HTTP Basic auth.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiClientEntry {
    pub username: String,
    pub password: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::default().separator("__").try_parsing(true))
            .build()?;
        let cfg: Self = config.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Build from defaults overlaid with a TOML document.
    pub fn from_toml_str(toml: &str) -> Result<Self, AppError> {
        let config = Self::defaults()?
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;
        let cfg: Self = config.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", 8080)?
            .set_default("app.name", "demo-api")?
            .set_default("session.timeout_secs", DEFAULT_SESSION_TIMEOUT_SECS)?
            .set_default("session.key_prefix", DEFAULT_SESSION_KEY_PREFIX)?
            .set_default("cache.backend", "memory")?
            .set_default("cache.max_connections", 16)?
            .set_default("cache.sweep_interval_secs", DEFAULT_SWEEP_INTERVAL_SECS)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.session.timeout_secs == 0 {
            return Err(AppError::InvalidConfig("session.timeout_secs must be greater than 0".into()));
        }
        if self.session.key_prefix.is_empty() {
            return Err(AppError::InvalidConfig("session.key_prefix must not be empty".into()));
        }
        if self.cache.backend == CacheBackend::Redis && self.cache.redis_url.is_none() {
            return Err(AppError::InvalidConfig("cache.redis_url is required for the redis backend".into()));
        }
        Ok(())
    }
}
