//! Configuration validation logic.

use regex::Regex;
use url::Url;

use crate::config::Config;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_dev_id(&config.credentials.dev_id)?;
    validate_auth_key(&config.credentials.auth_key)?;
    validate_port(config.server.port)?;
    validate_base_url(&config.upstream.base_url)?;

    Ok(())
}

/// Validate the developer ID.
pub fn validate_dev_id(dev_id: &str) -> Result<()> {
    if dev_id.is_empty() {
        return Err(Error::MissingConfig("credentials.dev_id".to_string()));
    }

    let dev_id_pattern = Regex::new(r"^\d+$").expect("static regex");
    if !dev_id_pattern.is_match(dev_id) {
        return Err(Error::ConfigValidation {
            field: "credentials.dev_id".to_string(),
            message: format!("Developer ID must be numeric (got '{}')", dev_id),
        });
    }

    Ok(())
}

/// Validate the auth key.
pub fn validate_auth_key(auth_key: &str) -> Result<()> {
    if auth_key.is_empty() {
        return Err(Error::MissingConfig("credentials.auth_key".to_string()));
    }

    // Check for placeholder values
    let key_lower = auth_key.to_lowercase();
    if key_lower.contains("replaceme") || key_lower.contains("your_auth_key") {
        return Err(Error::ConfigValidation {
            field: "credentials.auth_key".to_string(),
            message: "Auth key appears to be a placeholder. Please provide your Hi-Rez auth key."
                .to_string(),
        });
    }

    Ok(())
}

/// Validate the listening port.
pub fn validate_port(port: u16) -> Result<()> {
    if port == 0 {
        return Err(Error::ConfigValidation {
            field: "server.port".to_string(),
            message: "Port must be non-zero".to_string(),
        });
    }

    Ok(())
}

/// Validate the upstream base URL.
pub fn validate_base_url(base_url: &str) -> Result<()> {
    let url = Url::parse(base_url).map_err(|e| Error::ConfigValidation {
        field: "upstream.base_url".to_string(),
        message: format!("Invalid URL '{}': {}", base_url, e),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::ConfigValidation {
            field: "upstream.base_url".to_string(),
            message: format!("Unsupported scheme '{}'", url.scheme()),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::API_BASE;

    fn valid_config() -> Config {
        let mut config = Config::default();
        config.credentials.dev_id = "1004".to_string();
        config.credentials.auth_key = "23DF3C7E9BD14D84BF892AD206B6755C".to_string();
        config
    }

    #[test]
    fn test_valid_config() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_missing_credentials() {
        let mut config = valid_config();
        config.credentials.dev_id.clear();
        assert!(matches!(
            validate_config(&config),
            Err(Error::MissingConfig(_))
        ));

        let mut config = valid_config();
        config.credentials.auth_key.clear();
        assert!(matches!(
            validate_config(&config),
            Err(Error::MissingConfig(_))
        ));
    }

    #[test]
    fn test_non_numeric_dev_id() {
        assert!(validate_dev_id("10a4").is_err());
        assert!(validate_dev_id("1004").is_ok());
    }

    #[test]
    fn test_placeholder_auth_key() {
        assert!(validate_auth_key("REPLACEME").is_err());
        assert!(validate_auth_key("your_auth_key_here").is_err());
    }

    #[test]
    fn test_zero_port() {
        assert!(validate_port(0).is_err());
        assert!(validate_port(3000).is_ok());
    }

    #[test]
    fn test_base_url() {
        assert!(validate_base_url(API_BASE).is_ok());
        assert!(validate_base_url("https://example.com/api").is_ok());
        assert!(validate_base_url("ftp://example.com").is_err());
        assert!(validate_base_url("smiteapi.svc").is_err());
    }
}
