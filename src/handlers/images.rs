use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use tracing::debug;

use crate::{
    error::{ApiError, ApiResult},
    models::{ImageRecord, ImageSource},
    runtime::{ContainerRuntime, RuntimeError},
    AppState,
};

/// First `source` value in the query string; later repeats are ignored
fn first_source(params: &[(String, String)]) -> Option<&str> {
    params
        .iter()
        .find(|(key, _)| key == "source")
        .map(|(_, value)| value.as_str())
}

/// List images - GET /v1/images
#[utoipa::path(
    get,
    path = "/v1/images",
    tag = "images",
    params(
        ("source" = Option<String>, Query, description = "Image source; only `local` is served, other values yield an empty list. When repeated, the first value is used")
    ),
    responses(
        (status = 200, description = "One record per image tag", body = Vec<ImageRecord>),
        (status = 400, description = "Malformed query string"),
        (status = 502, description = "Container runtime request failed")
    )
)]
pub async fn list_images(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> ApiResult<Json<Vec<ImageRecord>>> {
    let Query(params) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let source = ImageSource::from_query(first_source(&params));
    debug!("source: {:?}", source);

    let images = match source {
        ImageSource::Local => list_local_images(state.runtime.as_ref()).await?,
        ImageSource::Other(name) => {
            debug!("No image listing available for source '{}'", name);
            Vec::new()
        }
    };

    Ok(Json(images))
}

/// Every tagged image held by the runtime, intermediate layers included in the query
pub async fn list_local_images(
    runtime: &dyn ContainerRuntime,
) -> Result<Vec<ImageRecord>, RuntimeError> {
    let images = runtime.list_images(true).await?;
    Ok(ImageRecord::from_summaries(images))
}
