//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::backend::{Endpoints, DEFAULT_BASE_URL};
use crate::session::DEFAULT_HOME_PATH;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub navigation: NavigationConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend connection configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// 0 disables the timeout
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Bearer token sent with every request
    #[serde(default)]
    pub token: Option<String>,

    #[serde(default)]
    pub endpoints: Endpoints,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
            token: None,
            endpoints: Endpoints::default(),
        }
    }
}

impl BackendConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }
}

/// Where the page goes after certain actions
#[derive(Debug, Clone, Deserialize)]
pub struct NavigationConfig {
    #[serde(default = "default_home_path")]
    pub home_path: String,
}

fn default_home_path() -> String {
    DEFAULT_HOME_PATH.to_string()
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            home_path: default_home_path(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Default config file locations, in lookup order
    pub fn default_paths() -> Vec<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join("synthlab").join("config.toml"))
            .into_iter()
            .chain(std::iter::once(PathBuf::from("./synthlab.toml")))
            .collect()
    }

    /// Load the first existing file among `candidates`, with environment
    /// overrides. `Ok(None)` when none exists; a file that exists but does
    /// not load is an error.
    pub fn load_first(candidates: &[PathBuf]) -> Result<Option<(PathBuf, Self)>, ConfigError> {
        match candidates.iter().find(|path| path.exists()) {
            Some(path) => Ok(Some((path.clone(), Self::load_with_env(path)?))),
            None => Ok(None),
        }
    }

    /// Load from default locations or environment
    pub fn load_default() -> Result<Self, ConfigError> {
        Ok(match Self::load_first(&Self::default_paths())? {
            Some((_, config)) => config,
            None => Self::from_env(),
        })
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("SYNTHLAB_BACKEND_URL") {
            self.backend.base_url = url;
        }
        if let Some(token) = lookup("SYNTHLAB_TOKEN") {
            self.backend.token = Some(token).filter(|t| !t.is_empty());
        }
        if let Some(level) = lookup("SYNTHLAB_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("SYNTHLAB_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Synthlab Configuration
#
# Environment variables override these settings:
# - SYNTHLAB_BACKEND_URL
# - SYNTHLAB_TOKEN
# - SYNTHLAB_LOG_LEVEL
# - SYNTHLAB_LOG_FORMAT

[backend]
# Backend base URL
base_url = "http://127.0.0.1:5000"

# Request timeout in seconds (0 = wait forever)
request_timeout_secs = 30

# Bearer token sent with every request
# token = ""

[backend.endpoints]
sample = "/get-sample"
synthetic = "/get-synthetic"
login = "/login"
generate = "/generate"

[navigation]
# Page to open after a successful login
home_path = "index.html"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.backend.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.backend.endpoints.sample, "/get-sample");
        assert_eq!(config.backend.request_timeout(), Some(Duration::from_secs(30)));
        assert_eq!(config.navigation.home_path, "index.html");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.backend.base_url, Config::default().backend.base_url);
        assert_eq!(config.backend.endpoints, Endpoints::default());
        assert_eq!(config.backend.token, None);
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[backend]
base_url = "http://localhost:8000/api"
request_timeout_secs = 0

[backend.endpoints]
sample = "/sample"
"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.backend.base_url, "http://localhost:8000/api");
        assert_eq!(config.backend.request_timeout(), None);
        assert_eq!(config.backend.endpoints.sample, "/sample");
        assert_eq!(config.backend.endpoints.synthetic, "/get-synthetic");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_errors() {
        let missing = Config::load(Path::new("/nonexistent/synthlab.toml"));
        assert!(matches!(missing, Err(ConfigError::Io { .. })));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[backend\nbase_url = 3").unwrap();
        assert!(matches!(
            Config::load(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_load_first_skips_missing_paths() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("config.toml");
        let local = dir.path().join("synthlab.toml");
        std::fs::write(&local, "[backend]\nrequest_timeout_secs = 5\n").unwrap();

        let (path, config) = Config::load_first(&[missing.clone(), local.clone()])
            .unwrap()
            .unwrap();
        assert_eq!(path, local);
        assert_eq!(config.backend.request_timeout(), Some(Duration::from_secs(5)));

        assert!(Config::load_first(&[missing]).unwrap().is_none());
    }

    #[test]
    fn test_load_first_reports_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let local = dir.path().join("synthlab.toml");
        std::fs::write(&local, "[backend\nbase_url = \"http://127.0.0.1:9\"\n").unwrap();

        match Config::load_first(&[dir.path().join("config.toml"), local.clone()]) {
            Err(ConfigError::Parse { path, .. }) => assert_eq!(path, local),
            other => panic!("expected a parse error, got {:?}", other.map(|o| o.map(|(p, _)| p))),
        }
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("SYNTHLAB_BACKEND_URL", "http://backend:5000"),
            ("SYNTHLAB_TOKEN", "jwt"),
            ("SYNTHLAB_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|name| env.get(name).map(|v| v.to_string()));

        assert_eq!(config.backend.base_url, "http://backend:5000");
        assert_eq!(config.backend.token.as_deref(), Some("jwt"));
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
    }
}
