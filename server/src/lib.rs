//! # Story Fun
//!
//! Minimal story-sharing service. Anyone can paste a story, which is
//! persisted as one file under the uploads directory with a random
//! `story_<stem>.txt` name; the directory listing is the whole index.
//!
//!
//!
//! # Endpoints
//!
//! - `GET /`: upload form plus the list of stored stories
//! - `POST /stories`: form field `story`, saves and links the new file
//! - `GET /stories/view?filename=`: render one story
//! - `GET /random_story?filter=`: redirect to a random (optionally
//!   substring-filtered) story
//! - `GET /admin_dashboard?username=`: gated by the external admin check
//!
//!
//!
//! # Configuration
//!
//! Everything comes from environment variables with defaults; see
//! [`config::Config`]. The secret directory holds the external
//! `is_admin.exe` check and receives the obfuscated debug pin
//! (`pin.txt`) on every start.
//!
//!
//!
//! # Notes
//!
//! - Stories are immutable once uploaded; nothing deletes them. Disk growth
//!   is bounded per upload (`MAX_STORY_BYTES`) but not in total.
//! - The admin check is an untrusted external binary judged purely by its
//!   exit code. See [`admin`] for the fail-closed contract.
use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use signal::{
    ctrl_c,
    unix::{signal, SignalKind},
};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

pub mod admin;
pub mod config;
pub mod error;
pub mod naming;
pub mod pages;
pub mod routes;
pub mod secret;
pub mod select;
pub mod state;
pub mod store;

use routes::{admin_handler, index_handler, random_handler, upload_handler, view_handler};
pub use state::AppState;

/// Extra room for the urlencoded form framing around a maximum-size story.
const BODY_LIMIT_SLACK: usize = 1024;

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = AppState::new().await;

    info!("Starting server...");
    let app = build_router(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("Server shutting down...");
}

pub fn build_router(state: Arc<AppState>) -> Router {
    let body_limit = state.config.max_story_bytes + BODY_LIMIT_SLACK;

    Router::new()
        .route("/", get(index_handler))
        .route("/stories", post(upload_handler))
        .route("/stories/view", get(view_handler))
        .route("/random_story", get(random_handler))
        .route("/admin_dashboard", get(admin_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
