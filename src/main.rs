//! Campus Events Backend
//!
//! Main application entry point

use std::net::SocketAddr;

use tracing::info;

use campus_events::{
    api::{build_router, AppState},
    config::Settings,
    database::{create_pool, run_migrations, PoolOptions},
    utils::logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard must outlive the server
    let _guard = logging::init_logging(&settings.logging)?;

    info!("Starting campus events backend...");

    // Initialize database connection
    info!("Connecting to database...");
    let pool = create_pool(&PoolOptions::from(&settings.database)).await?;

    // Run database migrations
    run_migrations(&pool).await?;

    // Build application state and router
    let state = AppState::new(pool.clone());
    let router = build_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(address = %addr, "Campus events backend is ready");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Campus events backend has been shut down.");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
