use axum::{routing::get, Router};

use crate::{handlers::images, AppState};

pub fn image_router() -> Router<AppState> {
    Router::new().route("/", get(images::list_images))
}
