use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use nav_api::{
    handlers::{health, nav, session},
    state::AppState,
};
use nav_core::domain::default_catalog;
use nav_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize telemetry
    nav_shared::telemetry::init_telemetry();

    info!("StaffHub navigation server starting...");

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Build the immutable menu catalog
    let catalog = default_catalog()?;
    info!(
        "Menu catalog loaded with {} top-level destinations",
        catalog.destinations().len()
    );

    // Create App State
    let state = AppState::new(catalog, config.clone());

    // Build router
    let app = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Session lifecycle
        .route(
            "/api/v1/nav/session",
            post(session::create).delete(session::destroy),
        )
        .route("/api/v1/nav/logout", post(session::logout))
        // Menu rendering and interaction
        .route("/api/v1/nav/menu", get(nav::menu))
        .route("/api/v1/nav/toggle-group", post(nav::toggle_group))
        .route("/api/v1/nav/toggle-layout", post(nav::toggle_layout))
        .route("/api/v1/nav/activate", post(nav::activate))
        // Add State
        .with_state(state)
        // Add CORS
        .layer(
            CorsLayer::new()
                .allow_origin("http://localhost:5173".parse::<axum::http::HeaderValue>()?)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::DELETE,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([axum::http::header::CONTENT_TYPE, axum::http::header::AUTHORIZATION]),
        );

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
