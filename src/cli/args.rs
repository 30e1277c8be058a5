//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Smite API proxy service.
#[derive(Parser, Debug)]
#[command(
    name = "smite-proxy",
    version,
    about = "HTTP microservice proxying the Hi-Rez Smite API",
    long_about = "Signs requests to the Hi-Rez Smite API, manages the API session and \
                  re-exposes player, match and server status endpoints as plain JSON."
)]
pub struct Args {
    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Hi-Rez developer ID.
    #[arg(long = "dev-id", env = "SMITE_DEV_ID")]
    pub dev_id: Option<String>,

    /// Hi-Rez auth key.
    #[arg(long = "auth-key", env = "SMITE_AUTH_KEY", hide_env_values = true)]
    pub auth_key: Option<String>,

    /// Interface to bind.
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on.
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// Base URL of the Smite API.
    #[arg(long = "base-url", env = "SMITE_BASE_URL")]
    pub base_url: Option<String>,

    /// Don't open an API session at startup.
    #[arg(long)]
    pub no_session: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        if let Some(dev_id) = self.dev_id {
            config.credentials.dev_id = dev_id;
        }

        if let Some(auth_key) = self.auth_key {
            config.credentials.auth_key = auth_key;
        }

        if let Some(host) = self.host {
            config.server.host = host;
        }

        if let Some(port) = self.port {
            config.server.port = port;
        }

        if let Some(base_url) = self.base_url {
            config.upstream.base_url = base_url;
        }

        if self.no_session {
            config.upstream.create_session = false;
        }
    }
}
