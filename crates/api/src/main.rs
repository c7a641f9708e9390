use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use palette_db::{MemoryStorage, PgStorage, Storage};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use palette_api::config::{ServerConfig, StorageBackend, APP_TITLE};
use palette_api::router::build_app_router;
use palette_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Configuration ---
    let config = ServerConfig::from_env().context("Invalid server configuration")?;

    // --- Tracing ---
    let json_logs = config.environment.is_production();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "palette_api=debug,palette_db=debug,tower_http=debug".into()
            }),
        )
        .with(json_logs.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json_logs).then(tracing_subscriber::fmt::layer))
        .init();

    tracing::info!(
        environment = ?config.environment,
        host = %config.host,
        port = %config.port,
        "Loaded server configuration"
    );

    // --- Storage ---
    let storage = connect_storage(&config.storage).await?;

    if config.seed_on_startup {
        let summary = palette_db::seed::run(storage.as_ref())
            .await
            .context("Failed to seed storage")?;
        tracing::info!(project_id = summary.project_id, "Development seed applied");
    }

    // --- App state ---
    let addr = SocketAddr::new(
        config.host.parse().context("Invalid HOST address")?,
        config.port,
    );
    let state = AppState {
        storage,
        config: Arc::new(config),
    };
    let app = build_app_router(state);

    // --- Start server ---
    tracing::info!(%addr, "{APP_TITLE} is starting");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Graceful shutdown complete");
    Ok(())
}

/// Open the configured storage backend.
///
/// For PostgreSQL this creates the pool, checks connectivity and applies
/// pending migrations before handing the accessor out.
async fn connect_storage(backend: &StorageBackend) -> anyhow::Result<Arc<dyn Storage>> {
    match backend {
        StorageBackend::Postgres {
            database_url,
            max_connections,
        } => {
            let pool = palette_db::create_pool(database_url, *max_connections)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Database connection pool created");

            palette_db::health_check(&pool)
                .await
                .context("Database health check failed")?;
            tracing::info!("Database health check passed");

            palette_db::run_migrations(&pool)
                .await
                .context("Failed to run database migrations")?;
            tracing::info!("Database migrations applied");

            Ok(Arc::new(PgStorage::new(pool)))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; data is lost on restart");
            Ok(Arc::new(MemoryStorage::new()))
        }
    }
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
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
