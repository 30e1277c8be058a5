//! Configuration module for smite-proxy.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Configuration validation

pub mod loader;
pub mod validation;

pub use loader::{Config, CredentialsConfig, ServerConfig, UpstreamConfig};
pub use validation::validate_config;
