//! Student API - REST service for the student resource
//!
//! Composition root: reads configuration, picks the storage repository, and
//! wires repository → persistence adapter → student service → HTTP router.

mod config;
mod dto;
mod error;
mod handlers;
mod mapper;
mod routes;
mod validation;

use anyhow::{Context, Result};
use std::sync::Arc;
use student_domain::{StudentService, StudentServicePort};
use student_postgres::{
    InMemoryStudentRepository, PgStudentRepository, StudentPersistenceAdapter, StudentRepository,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

/// Application state shared across handlers
pub struct AppState<S> {
    pub student_service: Arc<S>,
}

impl<S> AppState<S> {
    pub fn new(student_service: S) -> Self {
        Self {
            student_service: Arc::new(student_service),
        }
    }
}

// Manual impl: cloning the state must not require `S: Clone`.
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            student_service: Arc::clone(&self.student_service),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    init_tracing(&config);

    info!("Starting student API");

    match config.database_url.as_deref() {
        Some(database_url) => {
            info!(
                max_connections = config.max_connections,
                "Initializing PostgreSQL student repository"
            );
            let repository = PgStudentRepository::connect(database_url, config.max_connections)
                .await
                .context("Failed to initialize PostgreSQL storage")?;
            serve(&config, repository).await
        }
        None => {
            warn!("DATABASE_URL not set, students are kept in memory and lost on exit");
            serve(&config, InMemoryStudentRepository::new()).await
        }
    }
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if config.json_logs {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// Wire the service over `repository` and run the HTTP server until shutdown
async fn serve<R>(config: &AppConfig, repository: R) -> Result<()>
where
    R: StudentRepository + 'static,
{
    let adapter = StudentPersistenceAdapter::new(repository);
    let service = StudentService::new(adapter);

    run_http(config, AppState::new(service)).await
}

async fn run_http<S>(config: &AppConfig, state: AppState<S>) -> Result<()>
where
    S: StudentServicePort + 'static,
{
    let app = routes::create_router(state);

    let addr = config.bind_addr();
    info!(addr = %addr, "Starting HTTP server");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
