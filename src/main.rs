//! # Course Service
//!
//! REST service for managing courses.
//!
//! This is the application entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - Course store (PostgreSQL pool or in-memory)
//! - HTTP server

use anyhow::Result;
use tracing::info;

use course_service::config::Settings;
use course_service::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    course_service::telemetry::init_tracing();

    info!("Starting Course Service...");

    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        backend = %settings.storage.backend,
        environment = %settings.environment,
        "Configuration loaded"
    );

    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
