use super::{ContainerRuntime, RuntimeError};
use crate::config::DockerSettings;
use async_trait::async_trait;
use bollard::container::ListContainersOptions;
use bollard::image::ListImagesOptions;
use bollard::models::{ContainerSummary, ImageSummary};
use bollard::Docker;
use tracing::{debug, info};

/// Docker Engine client authenticated with a TLS client certificate.
///
/// Built once at startup and shared by every request; `bollard::Docker`
/// pools its own connections internally.
#[derive(Clone)]
pub struct DockerRuntime {
    docker: Docker,
}

impl DockerRuntime {
    /// Build a client from `DOCKER_HOST` / `DOCKER_CERT_PATH` style settings.
    ///
    /// No request is sent here; certificates are read and the TLS
    /// configuration is assembled, so a bad directory or malformed PEM fails
    /// immediately.
    pub fn connect(settings: &DockerSettings) -> Result<Self, RuntimeError> {
        let ca = settings.ca_file();
        let cert = settings.cert_file();
        let key = settings.key_file();

        for path in [&ca, &cert, &key] {
            if !path.is_file() {
                return Err(RuntimeError::MissingCertificate { path: path.clone() });
            }
        }

        debug!(
            "Loading TLS material - ca: {}, cert: {}, key: {}",
            ca.display(),
            cert.display(),
            key.display()
        );

        let docker = Docker::connect_with_ssl(
            &settings.host,
            &key,
            &cert,
            &ca,
            settings.timeout_seconds,
            bollard::API_DEFAULT_VERSION,
        )
        .map_err(|source| RuntimeError::Connect {
            host: settings.host.clone(),
            source,
        })?;

        info!("Container runtime client created for {}", settings.host);

        Ok(Self { docker })
    }
}

#[async_trait]
impl ContainerRuntime for DockerRuntime {
    async fn ping(&self) -> Result<(), RuntimeError> {
        self.docker
            .ping()
            .await
            .map(|_| ())
            .map_err(|source| RuntimeError::Request {
                operation: "ping",
                source,
            })
    }

    async fn list_images(&self, all: bool) -> Result<Vec<ImageSummary>, RuntimeError> {
        let options = ListImagesOptions::<String> {
            all,
            ..Default::default()
        };

        self.docker
            .list_images(Some(options))
            .await
            .map_err(|source| RuntimeError::Request {
                operation: "list_images",
                source,
            })
    }

    async fn list_containers(&self, all: bool) -> Result<Vec<ContainerSummary>, RuntimeError> {
        let options = ListContainersOptions::<String> {
            all,
            ..Default::default()
        };

        self.docker
            .list_containers(Some(options))
            .await
            .map_err(|source| RuntimeError::Request {
                operation: "list_containers",
                source,
            })
    }
}
