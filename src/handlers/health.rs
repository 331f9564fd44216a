use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use crate::AppState;

/// Health check response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// `reachable` or `unreachable`
    pub runtime: String,
}

/// Health check endpoint
///
/// The gateway itself is healthy whenever it answers; runtime reachability is
/// reported alongside rather than turned into an error status.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Server is healthy", body = HealthResponse)
    )
)]
pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    let runtime = match state.runtime.ping().await {
        Ok(()) => "reachable",
        Err(e) => {
            warn!("Container runtime health check failed: {}", e);
            "unreachable"
        }
    };

    Json(HealthResponse {
        status: "OK".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        runtime: runtime.to_string(),
    })
}
