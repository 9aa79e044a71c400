//! HTTP surface over the emergency feed.
//!
//! # Routes
//! - `GET /emergencies?selected=<id>`: cards sorted most urgent first
//! - `GET /emergencies/{id}`: one card
//! - `GET /map?selected=<id>`: map framing plus the marker of the selected report
//! - `GET /status`: last known feed state, never triggers a fetch
//!
//! Every data route loads through [`feed::EmergencyFeed::load`], so concurrent
//! requests share a single query against Nhost. A failed load answers `502`
//! with the normalized message as the body.
use std::{io, sync::Arc, time::Duration};

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::get,
};

use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::CorsLayer;
use tracing::{error, info};

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod views;

use routes::{emergencies_handler, emergency_handler, map_handler, status_handler};
use state::AppState;

pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/emergencies", get(emergencies_handler))
        .route("/emergencies/{id}", get(emergency_handler))
        .route("/map", get(map_handler))
        .route("/status", get(status_handler))
        .layer(cors)
        .with_state(state)
}

pub async fn start_server(state: Arc<AppState>) -> io::Result<()> {
    info!("Starting server...");

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutting down...");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
