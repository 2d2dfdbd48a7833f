//! Server configuration.

use anyhow::Result;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Fixed URL of the delimited feed export.
    #[serde(default = "default_feed_url")]
    pub feed_url: String,
    /// Seconds between feed refreshes.
    #[serde(default = "default_refresh_secs")]
    pub refresh_secs: u64,
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,
    /// Clear persisted history at startup ("fresh start"). Set false to
    /// accumulate history across restarts.
    #[serde(default = "default_reset_on_start")]
    pub reset_on_start: bool,
    /// Chat relay endpoint messages are forwarded to.
    #[serde(default = "default_relay_url")]
    pub relay_url: String,
    /// Name fragments the stats aggregator builds per-person slices for.
    #[serde(default = "default_tracked_people")]
    pub tracked_people: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_feed_url() -> String {
    "http://localhost:9090/feed.csv".to_string()
}

fn default_refresh_secs() -> u64 {
    30
}

fn default_db_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("worklog")
        .join("worklog.db")
}

fn default_reset_on_start() -> bool {
    true
}

fn default_relay_url() -> String {
    "http://localhost:9091/chat".to_string()
}

fn default_tracked_people() -> Vec<String> {
    vec!["Abdullah".to_string(), "Hamza".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            feed_url: default_feed_url(),
            refresh_secs: default_refresh_secs(),
            db_path: default_db_path(),
            reset_on_start: default_reset_on_start(),
            relay_url: default_relay_url(),
            tracked_people: default_tracked_people(),
        }
    }
}

impl Config {
    /// Load config from a specific file path.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load config from default location (config/default.toml) or fall back to defaults.
    pub fn load() -> Result<Self> {
        let config_path = PathBuf::from("config/default.toml");
        if config_path.exists() {
            return Self::load_from(&config_path);
        }

        Ok(Config::default())
    }
}
