use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub downstream: DownstreamSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
    /// Path prefix every route is mounted under, e.g. `/api/ml`
    #[serde(default)]
    pub route_prefix: String,
}

/// Where the ML inference service lives
#[derive(Debug, Clone, Deserialize)]
pub struct DownstreamSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub timeout_secs: Option<u64>,
    pub connect_timeout_secs: Option<u64>,
}

impl DownstreamSettings {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_secs.map(Duration::from_secs)
    }
}

fn default_base_url() -> String { DEFAULT_BASE_URL.to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Built-in defaults
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with GATEWAY__)
    /// 5. FASTAPI_BASE_URL, if set
    pub fn load() -> Result<Self, ConfigError> {
        let builder = with_defaults(Config::builder())?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., GATEWAY__DOWNSTREAM__BASE_URL -> downstream.base_url
            .add_source(env_source());

        let base_url = std::env::var("FASTAPI_BASE_URL").ok();
        let settings = apply_base_url_override(builder.build()?, base_url)?;
        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = with_defaults(Config::builder())?
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?;

        settings.try_deserialize()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("GATEWAY")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

fn with_defaults(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8080_i64)?
        .set_default("server.workers", 4_i64)?
        .set_default("server.route_prefix", "")?
        .set_default("downstream.base_url", DEFAULT_BASE_URL)?
        .set_default("logging.level", default_log_level())?
        .set_default("logging.format", default_log_format())
}

/// The inference service URL is traditionally supplied as FASTAPI_BASE_URL;
/// honour it on top of every other source. Blank values are ignored.
fn apply_base_url_override(settings: Config, base_url: Option<String>) -> Result<Config, ConfigError> {
    match base_url {
        Some(url) if !url.trim().is_empty() => Config::builder()
            .add_source(settings)
            .set_override("downstream.base_url", url)?
            .build(),
        _ => Ok(settings),
    }
}
