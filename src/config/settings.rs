use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use url::Url;
use validator::Validate;

pub const DEFAULT_LISTEN_ADDRESS: &str = "0.0.0.0:1323";
pub const DEFAULT_INDEX_FILE: &str = "public/index.html";
pub const DEFAULT_DOCKER_TIMEOUT_SECONDS: u64 = 120;

/// Environment variables the service refuses to start without
pub const REQUIRED_ENV_VARS: [&str; 2] = ["DOCKER_HOST", "DOCKER_CERT_PATH"];

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct Settings {
    #[validate]
    pub server: ServerSettings,
    #[validate]
    pub docker: DockerSettings,
}

#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
pub struct ServerSettings {
    #[validate(custom = "validate_ip_addr")]
    pub bind_address: String,
    #[validate(range(min = 1))]
    pub port: u16,
    #[validate(custom = "validate_not_blank")]
    pub index_file: String,
}

/// Connection parameters for the TLS-protected Docker Engine endpoint
#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
pub struct DockerSettings {
    #[validate(custom = "validate_docker_host")]
    pub host: String,
    /// Directory holding `ca.pem`, `cert.pem` and `key.pem`
    #[validate(custom = "validate_not_blank")]
    pub cert_path: String,
    #[validate(range(min = 1, max = 3600))]
    pub timeout_seconds: u64,
}

type Lookup<'a> = &'a dyn Fn(&str) -> Option<String>;

impl Settings {
    /// Load configuration from the process environment (and `.env` if present)
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = move |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self::check_required_vars(&lookup)?;

        let settings = Settings {
            server: ServerSettings::from_lookup(&lookup)?,
            docker: DockerSettings::from_lookup(&lookup)?,
        };

        settings
            .validate_all()
            .context("Configuration validation failed")?;

        Ok(settings)
    }

    fn check_required_vars(lookup: Lookup<'_>) -> Result<()> {
        let missing: Vec<&str> = REQUIRED_ENV_VARS
            .iter()
            .copied()
            .filter(|var| lookup(*var).is_none())
            .collect();

        if !missing.is_empty() {
            return Err(anyhow::anyhow!(
                "Missing required environment variables: {}. Please check your .env file or environment configuration.",
                missing.join(", ")
            ));
        }

        Ok(())
    }

    pub fn validate_all(&self) -> Result<(), validator::ValidationErrors> {
        self.validate()?;
        self.server.validate()?;
        self.docker.validate()?;
        Ok(())
    }
}

impl ServerSettings {
    fn from_lookup(lookup: Lookup<'_>) -> Result<Self> {
        let listen_address =
            lookup("LISTEN_ADDRESS").unwrap_or_else(|| DEFAULT_LISTEN_ADDRESS.to_string());

        let socket_addr: SocketAddr = listen_address
            .parse()
            .context("Invalid LISTEN_ADDRESS format. Expected format: 'host:port'")?;

        Ok(ServerSettings {
            bind_address: socket_addr.ip().to_string(),
            port: socket_addr.port(),
            index_file: lookup("INDEX_FILE").unwrap_or_else(|| DEFAULT_INDEX_FILE.to_string()),
        })
    }

    pub fn address(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .bind_address
            .parse()
            .with_context(|| format!("Invalid bind address: {}", self.bind_address))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Whether the index page exists; relative paths resolve against the working directory
    pub fn index_file_present(&self) -> bool {
        Path::new(&self.index_file).is_file()
    }
}

impl DockerSettings {
    fn from_lookup(lookup: Lookup<'_>) -> Result<Self> {
        let timeout_seconds = match lookup("DOCKER_TIMEOUT_SECONDS") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("Invalid DOCKER_TIMEOUT_SECONDS value: {}", raw))?,
            None => DEFAULT_DOCKER_TIMEOUT_SECONDS,
        };

        Ok(DockerSettings {
            host: lookup("DOCKER_HOST").context("DOCKER_HOST environment variable is required")?,
            cert_path: lookup("DOCKER_CERT_PATH")
                .context("DOCKER_CERT_PATH environment variable is required")?,
            timeout_seconds,
        })
    }

    pub fn ca_file(&self) -> PathBuf {
        PathBuf::from(&self.cert_path).join("ca.pem")
    }

    pub fn cert_file(&self) -> PathBuf {
        PathBuf::from(&self.cert_path).join("cert.pem")
    }

    pub fn key_file(&self) -> PathBuf {
        PathBuf::from(&self.cert_path).join("key.pem")
    }
}

fn validate_not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Err(validator::ValidationError::new("blank"));
    }
    Ok(())
}

fn validate_ip_addr(addr: &str) -> Result<(), validator::ValidationError> {
    addr.parse::<IpAddr>()
        .map(|_| ())
        .map_err(|_| validator::ValidationError::new("invalid_ip_address"))
}

fn validate_docker_host(host: &str) -> Result<(), validator::ValidationError> {
    validate_not_blank(host)?;
    Url::parse(host)
        .map(|_| ())
        .map_err(|_| validator::ValidationError::new("invalid_docker_host"))
}
