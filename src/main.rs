//! Print Studio
//!
//! Catalog of printable line-art designs with a per-visit image viewer, print
//! configuration with live cost and turnaround estimates, and a simulated
//! order submission flow, served over Actix-Web.

use actix_web::{web, App, HttpServer, middleware};
use anyhow::Context;
use chrono::{DateTime, Utc};
use tracing::info;
use tracing_actix_web::TracingLogger;
use std::sync::Arc;

mod api;
mod catalog;
mod config;
mod domain;
mod estimate;
mod order;
mod session;

use crate::catalog::{DesignCatalog, InMemoryCatalog};
use crate::config::Settings;
use crate::order::{PrintBackend, SimulatedPrintBackend};
use crate::session::Sessions;

/// Application state shared across all handlers
pub struct AppState {
    pub settings: Settings,
    pub catalog: Arc<dyn DesignCatalog>,
    pub sessions: Arc<Sessions>,
    pub backend: Arc<dyn PrintBackend>,
    pub started_at: DateTime<Utc>,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber for structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("print_studio=info,actix_web=info"))
        )
        .json()
        .init();

    let settings = Settings::load().context("Failed to load configuration")?;
    let bind_addr = format!("{}:{}", settings.server.host, settings.server.port);

    info!(
        "Starting Print Studio v{} on {}",
        env!("CARGO_PKG_VERSION"),
        bind_addr
    );

    let catalog: Arc<dyn DesignCatalog> = match &settings.catalog.path {
        Some(path) => Arc::new(
            InMemoryCatalog::load_file(path)
                .await
                .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        ),
        None => {
            info!("No catalog path configured, using built-in designs");
            Arc::new(InMemoryCatalog::builtin())
        }
    };
    info!("Loaded {} designs", catalog.len());

    let backend: Arc<dyn PrintBackend> =
        Arc::new(SimulatedPrintBackend::new(settings.print.submission_delay()));

    let sessions = Arc::new(Sessions::new());
    Arc::clone(&sessions).spawn_sweeper(
        settings.session.sweep_interval(),
        settings.session.idle_ttl(),
    );

    let workers = settings.worker_count();

    // Create shared application state
    let app_state = web::Data::new(AppState {
        settings,
        catalog,
        sessions,
        backend,
        started_at: Utc::now(),
    });

    // Configure and start HTTP server
    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(TracingLogger::default())
            .wrap(middleware::Compress::default())
            .wrap(
                middleware::DefaultHeaders::new()
                    .add(("X-Service", "print-studio"))
                    .add(("X-Version", env!("CARGO_PKG_VERSION")))
            )
            .configure(api::configure_routes)
    })
    .workers(workers)
    .bind(&bind_addr)
    .with_context(|| format!("Failed to bind {}", bind_addr))?
    .run()
    .await
    .context("HTTP server failed")
}
