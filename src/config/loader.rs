//! Configuration structures and loading logic.

use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use serde::Deserialize;

use crate::api::{Credentials, API_BASE};
use crate::error::{Error, Result};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub credentials: CredentialsConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub upstream: UpstreamConfig,
}

/// Hi-Rez developer credentials.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CredentialsConfig {
    /// Developer ID issued by Hi-Rez.
    #[serde(default)]
    pub dev_id: String,

    /// Authentication key issued by Hi-Rez.
    #[serde(default)]
    pub auth_key: String,
}

/// Listening socket configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Upstream API configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL of the Smite API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Whether to open a session at startup.
    #[serde(default = "default_true")]
    pub create_session: bool,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            create_session: true,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_base_url() -> String {
    API_BASE.to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}. Create one from config.example.toml",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Credentials for the API client.
    pub fn credentials(&self) -> Credentials {
        Credentials::new(
            self.credentials.dev_id.clone(),
            self.credentials.auth_key.clone(),
        )
    }

    /// Socket address to listen on.
    pub fn listen_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| Error::ConfigValidation {
                field: "server.host".to_string(),
                message: format!("Invalid listen address: {}", e),
            })
    }
}
