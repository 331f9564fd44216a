// Deployment handlers. A deployment is whatever container the runtime
// reports; create/update/delete are acknowledged without touching it.
use axum::{
    extract::{Path, State},
    Json,
};
use bollard::models::ContainerSummary;
use tracing::debug;

use crate::{error::ApiResult, AppState};

pub const CREATE_ACK: &str = "Deployment POST\n";
pub const UPDATE_ACK: &str = "Deployment PATCH\n";
pub const DELETE_ACK: &str = "Deployment DELETE\n";

/// Create deployment - POST /v1/deployments
#[utoipa::path(
    post,
    path = "/v1/deployments",
    tag = "deployments",
    responses(
        (status = 200, description = "Acknowledged, no runtime action", body = String, content_type = "text/plain")
    )
)]
pub async fn create_deployment() -> &'static str {
    CREATE_ACK
}

/// List deployments - GET /v1/deployments
#[utoipa::path(
    get,
    path = "/v1/deployments",
    tag = "deployments",
    responses(
        (status = 200, description = "All containers, stopped ones included, as reported by the runtime"),
        (status = 502, description = "Container runtime request failed")
    )
)]
pub async fn list_deployments(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ContainerSummary>>> {
    let containers = state.runtime.list_containers(true).await?;
    Ok(Json(containers))
}

/// Get deployment - GET /v1/deployments/:id
///
/// Returns the same unfiltered listing as `list_deployments`; the id is not
/// used to narrow the result.
#[utoipa::path(
    get,
    path = "/v1/deployments/{id}",
    tag = "deployments",
    params(
        ("id" = String, Path, description = "Deployment id (currently ignored)")
    ),
    responses(
        (status = 200, description = "All containers, stopped ones included"),
        (status = 502, description = "Container runtime request failed")
    )
)]
pub async fn get_deployment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<ContainerSummary>>> {
    debug!("Deployment lookup for '{}' returns the full listing", id);
    list_deployments(State(state)).await
}

/// Update deployment - PATCH /v1/deployments/:id
#[utoipa::path(
    patch,
    path = "/v1/deployments/{id}",
    tag = "deployments",
    params(
        ("id" = String, Path, description = "Deployment id")
    ),
    responses(
        (status = 200, description = "Acknowledged, no runtime action", body = String, content_type = "text/plain")
    )
)]
pub async fn update_deployment(Path(id): Path<String>) -> &'static str {
    debug!("PATCH acknowledged for deployment '{}'", id);
    UPDATE_ACK
}

/// Delete deployment - DELETE /v1/deployments/:id
#[utoipa::path(
    delete,
    path = "/v1/deployments/{id}",
    tag = "deployments",
    params(
        ("id" = String, Path, description = "Deployment id")
    ),
    responses(
        (status = 200, description = "Acknowledged, no runtime action", body = String, content_type = "text/plain")
    )
)]
pub async fn delete_deployment(Path(id): Path<String>) -> &'static str {
    debug!("DELETE acknowledged for deployment '{}'", id);
    DELETE_ACK
}
