//! Threadline API server entry point.

use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use threadline_api::state::AppState;
use threadline_core::clock::SystemClock;
use threadline_notify::LogSender;
use threadline_store::{PgOrderRepository, PgProductRepository, PgUserRepository};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Threadline API server");

    // Read configuration from environment.
    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| "DATABASE_URL environment variable must be set")?;
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .map_err(|e| format!("PORT must be a valid u16: {e}"))?;

    // Create database connection pool.
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&database_url)
        .await?;

    sqlx::migrate!("../../migrations").run(&pool).await?;

    let app_state = AppState::new(
        Arc::new(PgUserRepository::new(pool.clone())),
        Arc::new(PgProductRepository::new(pool.clone())),
        Arc::new(PgOrderRepository::new(pool)),
        Arc::new(SystemClock),
        Arc::new(LogSender),
    );
    let app = threadline_api::app::router(app_state);

    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .map_err(|e| format!("invalid HOST:PORT combination: {e}"))?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
