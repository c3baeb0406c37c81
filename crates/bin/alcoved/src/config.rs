//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `alcove.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;

use alcove_adapter_fetch_reqwest::RemoteEndpoints;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Database settings.
    pub database: DatabaseConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Remote catalog endpoints.
    pub remote: RemoteConfig,
    /// Inactive-account cleanup job settings.
    pub cleanup: CleanupConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// `SQLite` database configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `SQLite` connection URL or file path.
    pub url: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// URLs of the published catalog documents.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    pub themes_url: String,
    pub addons_url: String,
    pub apps_url: String,
    pub updates_url: String,
}

/// Inactive-account cleanup job.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CleanupConfig {
    /// Run the background cleanup task at all.
    pub enabled: bool,
    /// Seconds between cleanup runs.
    pub interval_secs: u64,
}

impl Config {
    /// Load configuration from `alcove.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("alcove.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("ALCOVE_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("ALCOVE_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("ALCOVE_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Ok(val) = std::env::var("ALCOVE_DATABASE_URL") {
            self.database.url = val;
        }
        if let Ok(val) = std::env::var("ALCOVE_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.cleanup.enabled && self.cleanup.interval_secs == 0 {
            return Err(ConfigError::Validation(
                "cleanup interval must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Return the database URL in `sqlx`-compatible format.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database.url
    }

    /// Catalog endpoints for the fetch adapter.
    #[must_use]
    pub fn endpoints(&self) -> RemoteEndpoints {
        RemoteEndpoints {
            themes_url: self.remote.themes_url.clone(),
            addons_url: self.remote.addons_url.clone(),
            apps_url: self.remote.apps_url.clone(),
            updates_url: self.remote.updates_url.clone(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:alcove.db?mode=rwc".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "alcoved=info,alcove=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        let endpoints = RemoteEndpoints::default();
        Self {
            themes_url: endpoints.themes_url,
            addons_url: endpoints.addons_url,
            apps_url: endpoints.apps_url,
            updates_url: endpoints.updates_url,
        }
    }
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_secs: 3600,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.database.url, "sqlite:alcove.db?mode=rwc");
        assert!(config.cleanup.enabled);
        assert_eq!(config.cleanup.interval_secs, 3600);
    }

    #[test]
    fn should_parse_minimal_toml() {
        let toml = "";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [server]
            host = '127.0.0.1'
            port = 9090

            [database]
            url = 'sqlite:test.db'

            [logging]
            filter = 'debug'

            [remote]
            themes_url = 'https://example.test/themes.json'
            addons_url = 'https://example.test/addons.json'
            apps_url = 'https://example.test/apps.json'
            updates_url = 'https://example.test/updates.json'

            [cleanup]
            enabled = false
            interval_secs = 60
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.database.url, "sqlite:test.db");
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.remote.themes_url, "https://example.test/themes.json");
        assert!(!config.cleanup.enabled);
        assert_eq!(config.cleanup.interval_secs, 60);
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_zero_cleanup_interval_when_enabled() {
        let mut config = Config::default();
        config.cleanup.interval_secs = 0;
        assert!(config.validate().is_err());

        config.cleanup.enabled = false;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_format_bind_addr() {
        let config = Config::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn should_format_custom_bind_addr() {
        let mut config = Config::default();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 9090;
        assert_eq!(config.bind_addr(), "127.0.0.1:9090");
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [server]
            port = 8080
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.database.url, "sqlite:alcove.db?mode=rwc");
    }

    #[test]
    fn should_default_remote_endpoints_to_published_assets() {
        let config = Config::default();
        assert!(config.remote.themes_url.ends_with("themes.json"));
        assert!(config.remote.addons_url.ends_with("addons.json"));
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }
}
