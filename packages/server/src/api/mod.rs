//! HTTP API for the roadmap store
//!
//! This module wires the roadmap REST surface onto a [`RoadmapService`]
//! instance:
//!
//! - `roadmap_endpoints`: the CRUD/branch handlers and the static index page
//! - `http_error`: the shared JSON error envelope
//!
//! # Concurrency
//!
//! The store assumes a single writer at a time. `AppState` therefore holds
//! the service behind one `RwLock`; every mutating handler takes the write
//! lock for the duration of its logical operation, reads take the read
//! lock. Handlers never await while holding the lock, so each operation is
//! atomic with respect to the others.

use std::sync::{Arc, RwLock};

use axum::{
    http::{header, Method},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use roadmap_core::RoadmapService;

mod http_error;
mod roadmap_endpoints;

// Re-export for use by endpoint modules and tests
pub use http_error::ApiError;

/// Type alias for the shared roadmap store.
///
/// Mutating operations take the write lock once per logical operation;
/// `GET /api/roadmap` only needs the read lock.
type SharedService<T> = Arc<RwLock<T>>;

/// Application state shared across all endpoints.
///
/// The store is injectable rather than process-global: each test constructs
/// its own `AppState` (and thus its own isolated store), while the binary
/// constructs exactly one for the process lifetime.
#[derive(Clone, Default)]
pub struct AppState {
    pub roadmap: SharedService<RoadmapService>,
}

impl AppState {
    /// Create state around an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(roadmap_endpoints::routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}

/// Create the CORS layer.
///
/// The rendering UI is served same-origin, so CORS only matters for local
/// tooling. By default any origin may call the JSON API; set
/// `CORS_ALLOW_ORIGIN` to restrict it to a single origin.
fn cors_layer() -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(origin) => layer.allow_origin(
            origin
                .parse::<header::HeaderValue>()
                .expect("Invalid CORS_ALLOW_ORIGIN - must be a valid HTTP origin"),
        ),
        Err(_) => layer.allow_origin(Any),
    }
}

/// Start the HTTP server.
///
/// Binds `0.0.0.0:<port>` and serves until the process exits.
///
/// # Errors
///
/// Returns an error if the listener fails to bind or the server fails to
/// start.
pub async fn start_server(state: AppState, port: u16) -> anyhow::Result<()> {
    let app = create_router(state);

    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("🚀 Roadmap server starting on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
