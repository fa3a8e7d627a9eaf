//! packer-monitor server entry point.
//!
//! Starts the Axum HTTP server with the REST API and static dashboard.

use std::sync::Arc;

use axum::http::HeaderValue;
use sqlx::sqlite::SqlitePoolOptions;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use packer_monitor::api;
use packer_monitor::app_state::AppState;
use packer_monitor::config::MonitorConfig;
use packer_monitor::domain::{Detector, EfficiencyCalculator, MockDetector};
use packer_monitor::persistence::MIGRATOR;
use packer_monitor::persistence::sqlite::SqliteEventStore;
use packer_monitor::service::MonitorService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = MonitorConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting packer-monitor");

    // Connect to the store and apply migrations
    let pool = SqlitePoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await?;
    MIGRATOR.run(&pool).await?;

    // Build domain and service layers
    let store = SqliteEventStore::new(pool);
    let calculator = EfficiencyCalculator::new(config.window_minutes);
    let service = Arc::new(MonitorService::new(store, calculator));
    let detector: Arc<dyn Detector> = Arc::new(MockDetector::default());

    // Warm the detection stub so readiness is logged before traffic.
    let shape = detector.warmup();
    tracing::info!(width = shape.width, height = shape.height, "detector warmed up");

    // Build application state
    let app_state = AppState { service, detector };

    // Build router
    let app = api::build_router()
        .fallback_service(ServeDir::new(&config.static_dir).append_index_html_on_directories(true))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config))
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the CORS layer from configured origins; `*` allows any origin.
fn cors_layer(config: &MonitorConfig) -> CorsLayer {
    if config.cors_allows_any() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}
