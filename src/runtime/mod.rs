use async_trait::async_trait;
use bollard::models::{ContainerSummary, ImageSummary};
use std::path::PathBuf;

pub mod docker;

pub use docker::DockerRuntime;

/// Errors raised while talking to the container runtime
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("Certificate file not found: {}", path.display())]
    MissingCertificate { path: PathBuf },
    #[error("Failed to create container runtime client for {host}: {source}")]
    Connect {
        host: String,
        #[source]
        source: bollard::errors::Error,
    },
    #[error("Container runtime request '{operation}' failed: {source}")]
    Request {
        operation: &'static str,
        #[source]
        source: bollard::errors::Error,
    },
}

/// Operations the gateway needs from a container runtime
#[async_trait]
pub trait ContainerRuntime: Send + Sync + 'static {
    /// Check that the runtime answers
    async fn ping(&self) -> Result<(), RuntimeError>;

    /// List images; `all` includes intermediate layers
    async fn list_images(&self, all: bool) -> Result<Vec<ImageSummary>, RuntimeError>;

    /// List containers; `all` includes stopped ones
    async fn list_containers(&self, all: bool) -> Result<Vec<ContainerSummary>, RuntimeError>;
}
