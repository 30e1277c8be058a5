//! Route handlers.
//!
//! Each route maps onto one client method and relays its JSON unchanged.
//! Query parameters are not validated; a missing one is forwarded upstream
//! as the literal segment `undefined`.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::Value;
use tower_http::trace::TraceLayer;

use crate::server::error::ProxyError;
use crate::server::AppState;

/// Placeholder forwarded upstream for an absent query parameter.
pub const MISSING_PARAM: &str = "undefined";

/// Greeting served on `/`.
pub const ROOT_MESSAGE: &str = "Smite Microservice is up. Try another endpoint like /motd.";

type ProxyResult = Result<Json<Value>, ProxyError>;

/// `?username=` query.
#[derive(Debug, Deserialize)]
pub struct UsernameQuery {
    pub username: Option<String>,
}

impl UsernameQuery {
    fn username(&self) -> &str {
        self.username.as_deref().unwrap_or(MISSING_PARAM)
    }
}

/// `?matchId=` query.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchIdQuery {
    pub match_id: Option<String>,
}

impl MatchIdQuery {
    fn match_id(&self) -> &str {
        self.match_id.as_deref().unwrap_or(MISSING_PARAM)
    }
}

async fn root() -> &'static str {
    ROOT_MESSAGE
}

async fn motd(State(state): State<AppState>) -> ProxyResult {
    Ok(Json(state.api.get_motd().await?))
}

async fn status(State(state): State<AppState>) -> ProxyResult {
    Ok(Json(state.api.get_server_status().await?))
}

async fn player_id(State(state): State<AppState>, Query(q): Query<UsernameQuery>) -> ProxyResult {
    Ok(Json(state.api.get_player_id_by_name(q.username()).await?))
}

async fn player_status(
    State(state): State<AppState>,
    Query(q): Query<UsernameQuery>,
) -> ProxyResult {
    Ok(Json(state.api.get_player_status(q.username()).await?))
}

async fn god_ranks(State(state): State<AppState>, Query(q): Query<UsernameQuery>) -> ProxyResult {
    Ok(Json(state.api.get_god_ranks(q.username()).await?))
}

async fn match_history(
    State(state): State<AppState>,
    Query(q): Query<UsernameQuery>,
) -> ProxyResult {
    Ok(Json(state.api.get_match_history(q.username()).await?))
}

async fn match_by_id(State(state): State<AppState>, Query(q): Query<MatchIdQuery>) -> ProxyResult {
    Ok(Json(state.api.get_match_by_match_id(q.match_id()).await?))
}

async fn match_details(
    State(state): State<AppState>,
    Query(q): Query<MatchIdQuery>,
) -> ProxyResult {
    Ok(Json(
        state
            .api
            .get_match_player_details_by_match_id(q.match_id())
            .await?,
    ))
}

async fn player_info(State(state): State<AppState>, Query(q): Query<UsernameQuery>) -> ProxyResult {
    Ok(Json(state.api.get_player_info(q.username()).await?))
}

/// Build the proxy routes.
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/motd", get(motd))
        .route("/status", get(status))
        .route("/playerId", get(player_id))
        .route("/playerStatus", get(player_status))
        .route("/godRanks", get(god_ranks))
        .route("/matchHistory", get(match_history))
        .route("/match", get(match_by_id))
        .route("/matchDetails", get(match_details))
        .route("/playerInfo", get(player_info))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
