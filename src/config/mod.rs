//! Configuration management

use anyhow::Result;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding the directory searched for `config.*`
const CONFIG_DIR_ENV: &str = "SIGNAGE_CONFIG_DIR";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub relay: RelayConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub device_log: DeviceLogConfig,
}

fn default_port() -> u16 {
    3000
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_backend_url")]
    pub base_url: String,
    #[serde(default = "default_backend_timeout")]
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_backend_url(),
            timeout_secs: default_backend_timeout(),
        }
    }
}

impl BackendConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_backend_url() -> String {
    "http://localhost:8080/api/v1".to_string()
}

fn default_backend_timeout() -> u64 {
    15
}

#[derive(Debug, Clone, Deserialize)]
pub struct RelayConfig {
    #[serde(default = "default_relay_url")]
    pub url: String,
    /// Seconds before the same device may receive another push
    #[serde(default = "default_cooldown")]
    pub cooldown_secs: u64,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            url: default_relay_url(),
            cooldown_secs: default_cooldown(),
        }
    }
}

impl RelayConfig {
    pub fn cooldown(&self) -> Duration {
        Duration::from_secs(self.cooldown_secs)
    }
}

fn default_relay_url() -> String {
    "wss://cjtronics-websocket-server.onrender.com".to_string()
}

fn default_cooldown() -> u64 {
    10 * 60
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    #[serde(default = "default_max_age")]
    pub max_age_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            max_age_secs: default_max_age(),
        }
    }
}

fn default_cookie_name() -> String {
    "dalukwa_admin".to_string()
}

fn default_max_age() -> u64 {
    900_000
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeviceLogConfig {
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for DeviceLogConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

fn default_page_size() -> u32 {
    25
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            backend: BackendConfig::default(),
            relay: RelayConfig::default(),
            session: SessionConfig::default(),
            device_log: DeviceLogConfig::default(),
        }
    }
}

/// Directory holding the optional `config.{toml,json,yaml}` file.
pub fn get_config_dir() -> PathBuf {
    std::env::var_os(CONFIG_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn load_config() -> Result<Config> {
    let config_dir = get_config_dir();

    let config = ::config::Config::builder()
        // Start with defaults
        .set_default("port", 3000)?
        // Load from config file if it exists
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy())
                .required(false),
        )
        // Override with environment variables (SIGNAGE_PORT, SIGNAGE_BACKEND__BASE_URL, etc.)
        .add_source(
            ::config::Environment::with_prefix("SIGNAGE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(config.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            CONFIG_DIR_ENV,
            "SIGNAGE_PORT",
            "SIGNAGE_BACKEND__BASE_URL",
            "SIGNAGE_RELAY__COOLDOWN_SECS",
        ] {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_without_sources() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var(CONFIG_DIR_ENV, dir.path());

        let config = load_config().unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.relay.cooldown(), Duration::from_secs(600));
        assert_eq!(config.session.cookie_name, "dalukwa_admin");
        assert_eq!(config.device_log.page_size, 25);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_file_then_env_override() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("config.toml"),
            "port = 4000\n[backend]\nbase_url = \"http://file:1\"\n[relay]\ncooldown_secs = 30\n",
        )
        .unwrap();
        std::env::set_var(CONFIG_DIR_ENV, dir.path());
        std::env::set_var("SIGNAGE_BACKEND__BASE_URL", "http://env:2");

        let config = load_config().unwrap();
        assert_eq!(config.port, 4000);
        assert_eq!(config.backend.base_url, "http://env:2");
        assert_eq!(config.relay.cooldown_secs, 30);
        assert_eq!(config.backend.timeout_secs, 15);

        clear_env();
    }
}
