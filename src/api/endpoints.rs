//! Per-endpoint methods of the Smite API client.
//!
//! Player detail endpoints are gated on the upstream privacy flag: when the
//! account is private the detail call is skipped and the private-profile
//! sentinel is returned instead.

use serde_json::Value;

use crate::api::client::SmiteApi;
use crate::api::types::{private_profile, PlayerIdEntry, PrivacyStatus};
use crate::error::{Error, Result};

const GET_PLAYER_ID_BY_NAME: &str = "getplayeridbyname";
const GET_PLAYER: &str = "getplayer";
const GET_PLAYER_STATUS: &str = "getplayerstatus";
const GET_MATCH_HISTORY: &str = "getmatchhistory";
const GET_GOD_RANKS: &str = "getgodranks";
const GET_MOTD: &str = "getmotd";
const GET_SERVER_STATUS: &str = "gethirezserverstatus";
const GET_MATCH_DETAILS: &str = "getmatchdetails";
const GET_MATCH_PLAYER_DETAILS: &str = "getmatchplayerdetails";

impl SmiteApi {
    /// Look up a player by name. Returns the raw upstream array.
    pub async fn get_player_id_by_name(&self, player_name: &str) -> Result<Value> {
        self.fetch_method_with_player_name(GET_PLAYER_ID_BY_NAME, player_name)
            .await
    }

    /// Resolve a player name to its id and privacy setting.
    ///
    /// Only the first entry of the lookup is considered.
    pub async fn is_profile_private(&self, player_name: &str) -> Result<PrivacyStatus> {
        let value = self.get_player_id_by_name(player_name).await?;
        let players: Vec<PlayerIdEntry> = serde_json::from_value(value.clone()).map_err(|e| {
            Error::Api(format!(
                "Failed to parse player lookup: {} - Response: {}",
                e, value
            ))
        })?;

        players
            .first()
            .map(PrivacyStatus::from)
            .ok_or_else(|| Error::PlayerNotFound(player_name.to_string()))
    }

    /// Fetch a player-keyed method unless the profile is private.
    async fn fetch_public_player_detail(&self, method: &str, player_name: &str) -> Result<Value> {
        let status = self.is_profile_private(player_name).await?;
        if status.is_private {
            tracing::debug!(player = player_name, method, "Profile is private");
            return Ok(private_profile());
        }

        self.fetch_method_with_player_id(method, status.player_id)
            .await
    }

    pub async fn get_player_info(&self, player_name: &str) -> Result<Value> {
        self.fetch_public_player_detail(GET_PLAYER, player_name)
            .await
    }

    pub async fn get_match_history(&self, player_name: &str) -> Result<Value> {
        self.fetch_public_player_detail(GET_MATCH_HISTORY, player_name)
            .await
    }

    pub async fn get_god_ranks(&self, player_name: &str) -> Result<Value> {
        self.fetch_public_player_detail(GET_GOD_RANKS, player_name)
            .await
    }

    pub async fn get_player_status(&self, player_name: &str) -> Result<Value> {
        self.fetch_public_player_detail(GET_PLAYER_STATUS, player_name)
            .await
    }

    /// Message of the day.
    pub async fn get_motd(&self) -> Result<Value> {
        self.fetch_method(GET_MOTD).await
    }

    pub async fn get_server_status(&self) -> Result<Value> {
        self.fetch_method(GET_SERVER_STATUS).await
    }

    pub async fn get_match_by_match_id(&self, match_id: &str) -> Result<Value> {
        self.fetch_method_with_match_id(GET_MATCH_DETAILS, match_id)
            .await
    }

    pub async fn get_match_player_details_by_match_id(&self, match_id: &str) -> Result<Value> {
        self.fetch_method_with_match_id(GET_MATCH_PLAYER_DETAILS, match_id)
            .await
    }
}
