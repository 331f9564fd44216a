use crate::AppState;
use axum::Router;

/// Versioned REST API, mounted under `/v1`
pub fn api_router() -> Router<AppState> {
    Router::new()
        .nest("/images", super::images::image_router())
        .nest("/deployments", super::deployments::deployment_router())
}
