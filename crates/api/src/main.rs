use std::net::SocketAddr;
use std::sync::Arc;

use lumen_baas::{BaasClient, BaasConfig, ContentSource, FixtureSource};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lumen_api::config::ServerConfig;
use lumen_api::router::build_app_router;
use lumen_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lumen_api=debug,lumen_baas=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Content source ---
    let source: Arc<dyn ContentSource> = match &config.content_fixture_path {
        Some(path) => {
            let fixture = FixtureSource::from_path(path).expect("Failed to load content fixture");
            tracing::info!(path = %path.display(), "Serving content from fixture");
            Arc::new(fixture)
        }
        None => {
            let baas_config = BaasConfig::from_env();
            tracing::info!(
                endpoint = %baas_config.endpoint,
                project = %baas_config.project_id,
                database = %baas_config.database_id,
                "Serving content from document store"
            );
            Arc::new(BaasClient::new(baas_config).expect("Failed to build document store client"))
        }
    };

    if let Err(e) = source.health_check().await {
        // Not fatal: requests will report 502 until the store is reachable.
        tracing::warn!(error = %e, "Content source health check failed at startup");
    }

    // --- App state ---
    let state = AppState {
        source,
        config: Arc::new(config.clone()),
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
