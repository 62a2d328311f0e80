//! # Slotbook API
//!
//! The API crate provides the web server for the slot-reservation service.
//! Clients list the open slots of a day and claim one.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Decode requests and call into `slotbook-core`
//! - **Middleware**: Map domain errors to HTTP responses
//! - **Config**: Handle environment and application configuration
//!
//! The API uses Axum as the web framework. Storage is reached only through the
//! [`BookingStore`] trait, so the same router runs against PostgreSQL in
//! production and against the in-memory store in tests.

/// Configuration module for API settings
pub mod config;
/// Request handlers for slots and bookings
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{Router, error_handling::HandleErrorLayer};
use eyre::Result;
use slotbook_core::store::BookingStore;
use tokio::net::TcpListener;
use tower::{ServiceBuilder, timeout::TimeoutLayer};
use tower_http::trace::TraceLayer;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
///
/// Holds no mutable data of its own. Every coordination between concurrent
/// requests happens inside the store.
pub struct ApiState {
    pub store: Arc<dyn BookingStore>,
}

/// Installs the global tracing subscriber
pub fn init_tracing(level: Level) -> Result<()> {
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Builds the application router without any transport-level layers
pub fn build_router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Availability endpoints
        .merge(routes::slots::routes())
        // Booking endpoints
        .merge(routes::bookings::routes())
        // Attach shared state to all routes
        .with_state(state)
}

/// Bounds every request by `timeout`, answering `408` with a JSON error body
pub fn with_timeout(app: Router, timeout: Duration) -> Router {
    app.layer(
        ServiceBuilder::new()
            .layer(HandleErrorLayer::new(
                middleware::error_handling::handle_layer_error,
            ))
            .layer(TimeoutLayer::new(timeout)),
    )
}

/// Starts the API server with the provided configuration and store
///
/// # Arguments
///
/// * `config` - API configuration including host, port, and other settings
/// * `store` - Booking store all handlers share
pub async fn start_server(config: config::ApiConfig, store: Arc<dyn BookingStore>) -> Result<()> {
    let state = Arc::new(ApiState { store });
    let app = build_router(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let origins = origins
            .iter()
            .map(|origin| origin.parse())
            .collect::<Result<Vec<axum::http::HeaderValue>, _>>()?;
        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(origins);

        app.layer(cors)
    } else {
        app
    };

    // A timed-out claim may still commit in the store
    let app = with_timeout(app, Duration::from_secs(config.request_timeout))
        .layer(TraceLayer::new_for_http());

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
