//! Smite API HTTP client.

use std::fmt;

use reqwest::Client;
use serde_json::Value;
use tokio::sync::RwLock;
use url::Url;

use crate::api::auth::{create_signature, Signature};
use crate::api::types::SessionResponse;
use crate::error::{Error, Result};

/// Default Smite API base URL.
pub const API_BASE: &str = "http://api.smitegame.com/smiteapi.svc";

/// Upstream method used to open a session.
const CREATE_SESSION: &str = "createsession";

/// Upstream method used to check a session.
const TEST_SESSION: &str = "testsession";

/// Developer credentials issued by Hi-Rez.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub dev_id: String,
    pub auth_key: String,
}

impl Credentials {
    pub fn new(dev_id: impl Into<String>, auth_key: impl Into<String>) -> Self {
        Self {
            dev_id: dev_id.into(),
            auth_key: auth_key.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("dev_id", &self.dev_id)
            .field("auth_key", &"<redacted>")
            .finish()
    }
}

/// Smite API client with request signing and session management.
///
/// A single instance is shared by every inbound request. The session token is
/// read on each call and only written by the session methods.
pub struct SmiteApi {
    client: Client,
    base_url: Url,
    credentials: Credentials,
    session: RwLock<Option<String>>,
}

impl SmiteApi {
    /// Create a client against the public Smite API.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_base_url(credentials, API_BASE)
    }

    /// Create a client against a custom base URL.
    pub fn with_base_url(credentials: Credentials, base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("smite-proxy/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Api(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: Url::parse(base_url)?,
            credentials,
            session: RwLock::new(None),
        })
    }

    /// Current session token, if any.
    pub async fn session(&self) -> Option<String> {
        self.session.read().await.clone()
    }

    pub async fn has_session(&self) -> bool {
        self.session.read().await.is_some()
    }

    /// Clear the stored session.
    ///
    /// The upstream only grants a new session to requests that carry none.
    pub async fn set_session_to_null(&self) {
        *self.session.write().await = None;
    }

    /// Call `createsession` and return the decoded answer without storing it.
    pub async fn get_session(&self) -> Result<SessionResponse> {
        let value = self.fetch_method(CREATE_SESSION).await?;
        serde_json::from_value(value.clone()).map_err(|e| {
            Error::Api(format!(
                "Failed to parse session response: {} - Response: {}",
                e, value
            ))
        })
    }

    /// Open a session and store its id.
    ///
    /// The id is stored only when `ret_msg` is "approved" (any case). Any other
    /// answer is logged and leaves the current session untouched; the caller
    /// gets `Ok(())` either way. Transport and decode failures are returned.
    pub async fn create_session(&self) -> Result<()> {
        let session = self.get_session().await?;

        match session.session_id {
            Some(ref id) if session.is_approved() => {
                tracing::info!(session_id = %id, "Session SUCCESS");
                *self.session.write().await = Some(id.clone());
            }
            _ => {
                tracing::warn!(
                    ret_msg = session.ret_msg.as_deref().unwrap_or("<none>"),
                    "Session FAILED"
                );
            }
        }

        Ok(())
    }

    /// Call `testsession`. Local state is not changed.
    pub async fn validate_session(&self) -> Result<Value> {
        self.fetch_method(TEST_SESSION).await
    }

    /// Build the signed request URL for a method.
    ///
    /// Layout: `{base}/{method}Json/{dev_id}/{signature}/[{session}/]{timestamp}[/{id}]`
    pub fn build_url(
        &self,
        method: &str,
        signature: &Signature,
        session: Option<&str>,
        id: Option<&str>,
    ) -> String {
        let mut url = format!(
            "{}/{}Json/{}/{}/",
            self.base_url.as_str().trim_end_matches('/'),
            method,
            self.credentials.dev_id,
            signature.signature
        );

        if let Some(session) = session {
            url.push_str(session);
            url.push('/');
        }

        url.push_str(&signature.timestamp);

        if let Some(id) = id {
            url.push('/');
            url.push_str(id);
        }

        url
    }

    /// Sign and issue a GET for `method`, returning the parsed JSON body.
    async fn fetch(&self, method: &str, id: Option<&str>) -> Result<Value> {
        let signature = create_signature(
            &self.credentials.dev_id,
            method,
            &self.credentials.auth_key,
            None,
        );
        let session = self.session().await;
        let url = self.build_url(method, &signature, session.as_deref(), id);

        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        tracing::debug!(method, "Response status: {}", response.status());

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| {
            Error::Api(format!(
                "Failed to parse {} response: {} - Response: {}",
                method,
                e,
                text.chars().take(500).collect::<String>()
            ))
        })
    }

    /// Call a method that takes no identifier.
    pub async fn fetch_method(&self, method: &str) -> Result<Value> {
        self.fetch(method, None).await
    }

    /// Call a method keyed by player id.
    pub async fn fetch_method_with_player_id(&self, method: &str, player_id: i64) -> Result<Value> {
        self.fetch(method, Some(&player_id.to_string())).await
    }

    /// Call a method keyed by match id.
    pub async fn fetch_method_with_match_id(&self, method: &str, match_id: &str) -> Result<Value> {
        self.fetch(method, Some(match_id)).await
    }

    /// Call a method keyed by player name.
    pub(crate) async fn fetch_method_with_player_name(
        &self,
        method: &str,
        player_name: &str,
    ) -> Result<Value> {
        self.fetch(method, Some(player_name)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base: &str) -> SmiteApi {
        SmiteApi::with_base_url(Credentials::new("1004", "SECRET"), base).unwrap()
    }

    fn signature() -> Signature {
        Signature {
            signature: "abc123".to_string(),
            timestamp: "20240101120000".to_string(),
        }
    }

    #[test]
    fn test_build_url_without_session() {
        let url = api(API_BASE).build_url("getmotd", &signature(), None, None);
        assert_eq!(
            url,
            "http://api.smitegame.com/smiteapi.svc/getmotdJson/1004/abc123/20240101120000"
        );
    }

    #[test]
    fn test_build_url_with_session_and_id() {
        let url = api(API_BASE).build_url("getplayer", &signature(), Some("SESSION"), Some("123"));
        assert_eq!(
            url,
            "http://api.smitegame.com/smiteapi.svc/getplayerJson/1004/abc123/SESSION/20240101120000/123"
        );
    }

    #[test]
    fn test_build_url_trims_trailing_slash() {
        let url = api("http://localhost:8080/").build_url("getmotd", &signature(), None, None);
        assert_eq!(url, "http://localhost:8080/getmotdJson/1004/abc123/20240101120000");
    }

    #[test]
    fn test_invalid_base_url() {
        let result = SmiteApi::with_base_url(Credentials::new("1004", "SECRET"), "not a url");
        assert!(matches!(result, Err(Error::UrlParse(_))));
    }

    #[test]
    fn test_credentials_debug_redacts_auth_key() {
        let debug = format!("{:?}", Credentials::new("1004", "SECRET"));
        assert!(debug.contains("1004"));
        assert!(!debug.contains("SECRET"));
    }

    #[tokio::test]
    async fn test_session_starts_empty_and_clears() {
        let api = api(API_BASE);
        assert!(!api.has_session().await);

        *api.session.write().await = Some("abc".to_string());
        assert_eq!(api.session().await.as_deref(), Some("abc"));

        api.set_session_to_null().await;
        assert!(api.session().await.is_none());
    }
}
