use std::time::Duration;

use anyhow::{Context, Result};
use axum::Router;
use axum::http::{Request, Response};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::field::Empty;
use tracing::{Span, info};
use video_games::VideoGamesModule;

use crate::config::{AppConfig, DatabaseConfig};

/// Open the connection pool. In-memory `SQLite` is pinned to a single
/// connection because every connection would otherwise see its own database.
///
/// # Errors
/// Returns an error if the database is unreachable.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection> {
    let max_conns = if config.is_in_memory() {
        1
    } else {
        config.max_conns
    };

    let mut options = ConnectOptions::new(config.dsn.clone());
    options
        .max_connections(max_conns)
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);

    let scheme = config.dsn.split(':').next().unwrap_or_default();
    info!(scheme, max_conns, "Connecting to database");

    Database::connect(options)
        .await
        .context("failed to connect to database")
}

/// Module routes wrapped in request-id and HTTP trace layers.
#[must_use]
pub fn build_router(module: &VideoGamesModule) -> Router {
    let router = module.register_rest(Router::new());

    router
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &Request<axum::body::Body>| {
                    let request_id = req
                        .headers()
                        .get("x-request-id")
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("n/a");

                    tracing::info_span!(
                        "http_request",
                        method = %req.method(),
                        uri = %req.uri().path(),
                        request_id = %request_id,
                        status = Empty,
                        latency_ms = Empty,
                    )
                })
                .on_response(
                    |res: &Response<axum::body::Body>, latency: Duration, span: &Span| {
                        span.record("status", res.status().as_u16());
                        span.record("latency_ms", latency.as_millis());
                    },
                ),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// Connect, migrate and serve until Ctrl+C or SIGTERM.
///
/// # Errors
/// Returns an error if any startup step fails or the listener dies.
pub async fn run(config: AppConfig) -> Result<()> {
    let db = connect(&config.database).await?;

    if config.database.run_migrations {
        VideoGamesModule::migrate(&db).await?;
    } else {
        info!("Skipping database migrations");
    }

    let module = VideoGamesModule::new(db);
    let router = build_router(&module);

    let listener = TcpListener::bind(config.server.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.server.bind_addr))?;
    info!(addr = %listener.local_addr()?, "HTTP server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server terminated")?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(%e, "Error handling Ctrl+C signal");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(%e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C signal"),
        () = terminate => info!("Received SIGTERM signal"),
    }

    info!("Shutdown signal received, initiating graceful shutdown");
}

#[cfg(test)]
#[path = "server_tests.rs"]
mod server_tests;
