//! Configuration module for notedrive.

use serde::Deserialize;
use std::path::Path;

use crate::{NoteDriveError, Result};

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port number to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// CORS allowed origins. Empty means permissive (development mode).
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: vec![],
        }
    }
}

/// Microsoft Graph configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphConfig {
    /// Azure AD tenant ID (must be set).
    #[serde(default)]
    pub tenant_id: String,
    /// Application (client) ID (must be set).
    #[serde(default)]
    pub client_id: String,
    /// Client secret (must be set; can come from NOTEDRIVE_CLIENT_SECRET).
    #[serde(default)]
    pub client_secret: String,
    /// Drive to operate on, by drive ID.
    #[serde(default)]
    pub drive_id: Option<String>,
    /// Drive to operate on, by owning user (UPN or object ID).
    /// Used when `drive_id` is not set.
    #[serde(default)]
    pub user_id: Option<String>,
    /// Folder under the drive root that holds the notes.
    #[serde(default = "default_notes_folder")]
    pub notes_folder: String,
    /// OAuth2 scope requested for the client-credentials flow.
    #[serde(default = "default_scope")]
    pub scope: String,
    /// Identity authority base URL.
    #[serde(default = "default_authority")]
    pub authority: String,
    /// Graph API endpoint base URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    /// Read timeout in seconds.
    #[serde(default = "default_read_timeout")]
    pub read_timeout_secs: u64,
    /// Total request timeout in seconds.
    #[serde(default = "default_total_timeout")]
    pub total_timeout_secs: u64,
    /// Maximum number of redirects.
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,
}

fn default_notes_folder() -> String {
    "Notes".to_string()
}

fn default_scope() -> String {
    "https://graph.microsoft.com/.default".to_string()
}

fn default_authority() -> String {
    "https://login.microsoftonline.com".to_string()
}

fn default_endpoint() -> String {
    "https://graph.microsoft.com/v1.0".to_string()
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_read_timeout() -> u64 {
    20
}

fn default_total_timeout() -> u64 {
    30
}

fn default_max_redirects() -> usize {
    5
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            tenant_id: String::new(),
            client_id: String::new(),
            client_secret: String::new(),
            drive_id: None,
            user_id: None,
            notes_folder: default_notes_folder(),
            scope: default_scope(),
            authority: default_authority(),
            endpoint: default_endpoint(),
            connect_timeout_secs: default_connect_timeout(),
            read_timeout_secs: default_read_timeout(),
            total_timeout_secs: default_total_timeout(),
            max_redirects: default_max_redirects(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file.
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "logs/notedrive.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Microsoft Graph configuration.
    #[serde(default)]
    pub graph: GraphConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(NoteDriveError::Io)?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file and apply environment variable overrides.
    pub fn load_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| NoteDriveError::Config(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `NOTEDRIVE_CLIENT_SECRET`: Override the Graph client secret
    pub fn apply_env_overrides(&mut self) {
        // Client secret from environment variable (highest priority)
        if let Ok(secret) = std::env::var("NOTEDRIVE_CLIENT_SECRET") {
            if !secret.is_empty() {
                self.graph.client_secret = secret;
            }
        }
    }

    /// Validate the configuration.
    ///
    /// Returns an error if:
    /// - any of the confidential-client credentials is missing
    /// - neither `drive_id` nor `user_id` selects a drive
    pub fn validate(&self) -> Result<()> {
        if self.graph.tenant_id.is_empty() {
            return Err(NoteDriveError::Config(
                "graph.tenant_id is not set".to_string(),
            ));
        }
        if self.graph.client_id.is_empty() {
            return Err(NoteDriveError::Config(
                "graph.client_id is not set".to_string(),
            ));
        }
        if self.graph.client_secret.is_empty() {
            return Err(NoteDriveError::Config(
                "graph.client_secret is not set. \
                 Set it in config.toml or via NOTEDRIVE_CLIENT_SECRET environment variable."
                    .to_string(),
            ));
        }
        if self.graph.drive_id.is_none() && self.graph.user_id.is_none() {
            return Err(NoteDriveError::Config(
                "either graph.drive_id or graph.user_id must be set".to_string(),
            ));
        }
        if self.graph.notes_folder.trim().is_empty() {
            return Err(NoteDriveError::Config(
                "graph.notes_folder must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        let mut config = Config::default();
        config.graph.tenant_id = "tenant".to_string();
        config.graph.client_id = "client".to_string();
        config.graph.client_secret = "secret".to_string();
        config.graph.user_id = Some("notes@example.com".to_string());
        config
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert!(config.server.cors_origins.is_empty());

        assert!(config.graph.tenant_id.is_empty());
        assert!(config.graph.drive_id.is_none());
        assert_eq!(config.graph.notes_folder, "Notes");
        assert_eq!(config.graph.scope, "https://graph.microsoft.com/.default");
        assert_eq!(config.graph.authority, "https://login.microsoftonline.com");
        assert_eq!(config.graph.endpoint, "https://graph.microsoft.com/v1.0");
        assert_eq!(config.graph.connect_timeout_secs, 10);
        assert_eq!(config.graph.read_timeout_secs, 20);
        assert_eq!(config.graph.total_timeout_secs, 30);
        assert_eq!(config.graph.max_redirects, 5);

        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.file, "logs/notedrive.log");
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [server]
            host = "127.0.0.1"
            port = 3000
            cors_origins = ["http://localhost:5173"]

            [graph]
            tenant_id = "my-tenant"
            client_id = "my-client"
            client_secret = "my-secret"
            drive_id = "b!abc123"
            notes_folder = "MyNotes"

            [logging]
            level = "debug"
        "#;

        let config = Config::parse(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.cors_origins, vec!["http://localhost:5173"]);
        assert_eq!(config.graph.tenant_id, "my-tenant");
        assert_eq!(config.graph.drive_id.as_deref(), Some("b!abc123"));
        assert_eq!(config.graph.notes_folder, "MyNotes");
        assert_eq!(config.logging.level, "debug");
        // Unset fields fall back to defaults
        assert_eq!(config.graph.endpoint, "https://graph.microsoft.com/v1.0");
        assert_eq!(config.logging.file, "logs/notedrive.log");
    }

    #[test]
    fn test_parse_invalid_config() {
        let result = Config::parse("not [valid toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nport = 9999\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.server.port, 9999);
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load("/nonexistent/config.toml");
        assert!(matches!(result, Err(NoteDriveError::Io(_))));
    }

    #[test]
    fn test_validate_ok() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_validate_missing_tenant() {
        let mut config = valid_config();
        config.graph.tenant_id = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_missing_secret() {
        let mut config = valid_config();
        config.graph.client_secret = String::new();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("client_secret"));
    }

    #[test]
    fn test_validate_missing_drive_selection() {
        let mut config = valid_config();
        config.graph.user_id = None;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("drive_id"));
    }
}
