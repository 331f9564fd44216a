use utoipa::OpenApi;
use crate::handlers::{deployments, health, images};
use crate::models::ImageRecord;

/// Generate the OpenAPI documentation for the entire API
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        health::check,

        // Image endpoints
        images::list_images,

        // Deployment endpoints
        deployments::create_deployment,
        deployments::list_deployments,
        deployments::get_deployment,
        deployments::update_deployment,
        deployments::delete_deployment,
    ),
    components(
        schemas(
            health::HealthResponse,
            ImageRecord,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "images", description = "Images known to the container runtime"),
        (name = "deployments", description = "Deployments backed by runtime containers"),
    )
)]
pub struct ApiDoc;
