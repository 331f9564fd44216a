use std::sync::Arc;
use axum::Router;
use tower_http::{
    catch_panic::CatchPanicLayer,
    services::ServeFile,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod runtime;

#[derive(Clone)]
pub struct AppState {
    pub config: config::Settings,
    pub runtime: Arc<dyn runtime::ContainerRuntime>,
}

/// Create the main Axum application router
pub async fn create_app(state: AppState) -> Router {
    // Register API documentation
    let openapi = openapi::ApiDoc::openapi();
    let index = ServeFile::new(&state.config.server.index_file);

    Router::new()
        .route_service("/", index)
        .nest("/v1", routes::api::api_router())
        // Health and monitoring endpoints
        .merge(routes::health::health_router())
        // Serve Swagger UI
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi))
        .layer(CatchPanicLayer::custom(error::handle_panic))
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .layer(tower_http::cors::CorsLayer::permissive())
        .with_state(state)
}
