//! Error types for the smite-proxy service.

use thiserror::Error;

/// Main error type for the service.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    // API errors
    #[error("API error: {0}")]
    Api(String),

    #[error("Player not found: {0}")]
    PlayerNotFound(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    // URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const API_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const SERVER_ERROR: i32 = 4;
}

impl Error {
    /// Exit code the binary reports when this error ends the process.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Config(_)
            | Error::ConfigValidation { .. }
            | Error::MissingConfig(_)
            | Error::TomlParse(_)
            | Error::UrlParse(_) => exit_codes::CONFIG_ERROR,
            Error::Api(_) | Error::PlayerNotFound(_) | Error::Http(_) | Error::Json(_) => {
                exit_codes::API_ERROR
            }
            Error::Io(_) => exit_codes::SERVER_ERROR,
        }
    }
}
