use crate::handlers::deployments;
use crate::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn deployment_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(deployments::create_deployment).get(deployments::list_deployments),
        )
        .route(
            "/:id",
            get(deployments::get_deployment)
                .patch(deployments::update_deployment)
                .delete(deployments::delete_deployment),
        )
}
