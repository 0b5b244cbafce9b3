//! Roadmap Server Binary
//!
//! Standalone binary that serves the roadmap REST API and the rendering UI
//! from a single in-memory store. State lives for the process lifetime;
//! there is no persistence.
//!
//! # Usage
//!
//! ```bash
//! # Start with default settings (port 5000)
//! cargo run --bin roadmap-server
//!
//! # Custom port
//! ROADMAP_PORT=8080 cargo run --bin roadmap-server
//! ```
//!
//! # Environment Variables
//!
//! - `ROADMAP_PORT`: Server port (default: 5000)
//! - `CORS_ALLOW_ORIGIN`: Restrict CORS to a single origin (default: any)
//! - `RUST_LOG`: Logging level (e.g., "info", "debug", "trace")

use std::env;

use roadmap_server::api::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("🗺️  Roadmap Server");

    // Get server port from environment or use default
    let port = env::var("ROADMAP_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(5000);

    tracing::info!("📡 Port: {}", port);

    // One store for the process lifetime
    let state = AppState::new();

    api::start_server(state, port).await
}
