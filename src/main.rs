//! Bookstore Server - books and users REST API

use std::{
    future::IntoFuture,
    net::{IpAddr, SocketAddr},
    sync::Arc,
    time::Duration,
};

use anyhow::Context;
use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tokio::{net::TcpListener, sync::Notify};

use bookstore_server::{
    api, config::AppConfig, repository::Repository, services::Services, telemetry, AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    let _log_guards = telemetry::init(&config.logging)?;

    tracing::info!("Starting Bookstore Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .context("Failed to connect to database")?;

    tracing::info!("Connected to database");

    let repository = Repository::new(pool);
    repository
        .migrate()
        .await
        .context("Failed to create database tables")?;

    tracing::info!("Database tables ready");

    let host: IpAddr = config.server.host.parse().context("Invalid host address")?;
    let addr = SocketAddr::new(host, config.server.port);
    let grace = Duration::from_secs(config.server.shutdown_grace_secs);

    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(Services::new(repository)),
    };

    let app = api::create_router(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Server listening on http://{}", addr);

    serve(listener, app, grace).await?;

    tracing::info!("Server is fully shutdown");
    Ok(())
}

/// Serve until a termination signal, then give in-flight requests `grace` to finish
async fn serve(listener: TcpListener, app: Router, grace: Duration) -> anyhow::Result<()> {
    let stopping = Arc::new(Notify::new());

    let server = axum::serve(listener, app)
        .with_graceful_shutdown({
            let stopping = stopping.clone();
            async move {
                shutdown_signal().await;
                tracing::info!("App is shutting down...");
                stopping.notify_one();
            }
        })
        .into_future();

    tokio::select! {
        result = server => result.context("Server error"),
        _ = async {
            stopping.notified().await;
            tokio::time::sleep(grace).await;
        } => {
            anyhow::bail!("in-flight requests still running after {:?}", grace)
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
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
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
