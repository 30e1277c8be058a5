//! Typed views over the few upstream responses the proxy inspects.
//!
//! Everything else is relayed as raw `serde_json::Value`.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// `ret_msg` value signalling a successful `createsession` call.
pub const SESSION_APPROVED: &str = "approved";

/// `privacy_flag` value marking an account as private.
pub const PRIVACY_FLAG_PRIVATE: &str = "y";

/// Response to `createsession`.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionResponse {
    pub ret_msg: Option<String>,
    pub session_id: Option<String>,
    pub timestamp: Option<String>,
}

impl SessionResponse {
    /// Whether the upstream approved the session request.
    pub fn is_approved(&self) -> bool {
        self.ret_msg
            .as_deref()
            .is_some_and(|msg| msg.eq_ignore_ascii_case(SESSION_APPROVED))
    }
}

/// One entry of the `getplayeridbyname` response array.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerIdEntry {
    pub player_id: i64,
    #[serde(default)]
    pub privacy_flag: Option<String>,
}

impl PlayerIdEntry {
    pub fn is_private(&self) -> bool {
        self.privacy_flag.as_deref() == Some(PRIVACY_FLAG_PRIVATE)
    }
}

/// Result of a privacy check for a player name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivacyStatus {
    pub is_private: bool,
    pub player_id: i64,
}

impl From<&PlayerIdEntry> for PrivacyStatus {
    fn from(entry: &PlayerIdEntry) -> Self {
        Self {
            is_private: entry.is_private(),
            player_id: entry.player_id,
        }
    }
}

/// Payload returned in place of detail data for private profiles.
pub fn private_profile() -> Value {
    json!({ "isPrivate": true })
}
