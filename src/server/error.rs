//! Mapping of client failures onto HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// API error response.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// A failed upstream call, answered with `502 Bad Gateway`.
#[derive(Debug)]
pub struct ProxyError(pub Error);

impl From<Error> for ProxyError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "Upstream request failed");

        let body = ErrorResponse {
            error: self.0.to_string(),
        };
        (StatusCode::BAD_GATEWAY, Json(body)).into_response()
    }
}
