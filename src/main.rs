use anyhow::Context;
use geonosis::config::Settings;
use geonosis::runtime::{ContainerRuntime, DockerRuntime};
use geonosis::{create_app, AppState};
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "geonosis=info,tower_http=debug".into()),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    info!("Starting geonosis gateway v{}", env!("CARGO_PKG_VERSION"));

    // Missing DOCKER_HOST / DOCKER_CERT_PATH stop us here, before any request is accepted
    let settings = Settings::load().context("Failed to load application settings")?;

    let runtime = DockerRuntime::connect(&settings.docker)
        .context("Failed to create container runtime client")?;

    // A runtime that is down right now is not a configuration error
    match runtime.ping().await {
        Ok(()) => info!("Container runtime at {} is reachable", settings.docker.host),
        Err(e) => warn!("Container runtime not reachable yet: {}", e),
    }

    let app_state = AppState {
        config: settings.clone(),
        runtime: Arc::new(runtime),
    };

    let app = create_app(app_state).await;

    if !settings.server.index_file_present() {
        warn!(
            "Index page {} not found; GET / will return 404",
            settings.server.index_file
        );
    }

    let addr = settings
        .server
        .address()
        .context("Invalid server listen address")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to server address")?;

    info!("listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("geonosis shutdown completed");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received terminate signal, starting graceful shutdown");
        },
    }
}
