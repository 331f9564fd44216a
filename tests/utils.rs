#![allow(dead_code)]

use async_trait::async_trait;
use axum::{body::Bytes, response::Response, Router};
use bollard::models::{ContainerSummary, ImageSummary};
use std::sync::{Arc, Mutex};

use geonosis::config::Settings;
use geonosis::runtime::{ContainerRuntime, RuntimeError};
use geonosis::{create_app, AppState};

/// In-memory runtime that records which operations were requested
#[derive(Default, Clone)]
pub struct MockRuntime {
    images: Arc<Mutex<Vec<ImageSummary>>>,
    containers: Arc<Mutex<Vec<ContainerSummary>>>,
    failing: bool,
    calls: Arc<Mutex<Vec<(&'static str, bool)>>>,
}

impl MockRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    /// A runtime whose every request fails like an unreachable daemon
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn with_images(self, images: Vec<ImageSummary>) -> Self {
        *self.images.lock().unwrap() = images;
        self
    }

    pub fn with_containers(self, containers: Vec<ContainerSummary>) -> Self {
        *self.containers.lock().unwrap() = containers;
        self
    }

    pub fn calls(&self) -> Vec<(&'static str, bool)> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, operation: &'static str, all: bool) -> Result<(), RuntimeError> {
        self.calls.lock().unwrap().push((operation, all));
        if self.failing {
            return Err(RuntimeError::Request {
                operation,
                source: bollard::errors::Error::DockerResponseServerError {
                    status_code: 500,
                    message: "Cannot connect to the Docker daemon".to_string(),
                },
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ContainerRuntime for MockRuntime {
    async fn ping(&self) -> Result<(), RuntimeError> {
        self.record("ping", false)
    }

    async fn list_images(&self, all: bool) -> Result<Vec<ImageSummary>, RuntimeError> {
        self.record("list_images", all)?;
        Ok(self.images.lock().unwrap().clone())
    }

    async fn list_containers(&self, all: bool) -> Result<Vec<ContainerSummary>, RuntimeError> {
        self.record("list_containers", all)?;
        Ok(self.containers.lock().unwrap().clone())
    }
}

pub fn image(id: &str, tags: &[&str]) -> ImageSummary {
    ImageSummary {
        id: id.to_string(),
        repo_tags: tags.iter().map(|t| t.to_string()).collect(),
        ..Default::default()
    }
}

pub fn container(id: &str, image: &str, state: &str) -> ContainerSummary {
    ContainerSummary {
        id: Some(id.to_string()),
        image: Some(image.to_string()),
        state: Some(state.to_string()),
        names: Some(vec![format!("/{}", id)]),
        ..Default::default()
    }
}

pub fn test_settings() -> Settings {
    Settings::from_lookup(|key| match key {
        "DOCKER_HOST" => Some("tcp://127.0.0.1:2376".to_string()),
        "DOCKER_CERT_PATH" => Some("/tmp/geonosis-test-certs".to_string()),
        "LISTEN_ADDRESS" => Some("127.0.0.1:8080".to_string()),
        _ => None,
    })
    .expect("test settings should load")
}

pub async fn test_app(runtime: MockRuntime) -> Router {
    create_app(AppState {
        config: test_settings(),
        runtime: Arc::new(runtime),
    })
    .await
}

pub async fn body_bytes(response: Response) -> Bytes {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body")
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).expect("response body is not JSON")
}
