// SPDX-FileCopyrightText: 2026 Hearth contributors
//
// SPDX-License-Identifier: Apache-2.0

//! The Hearth REST server.
//!
//! Users, to-dos, and routines live in the `hearth-core` store; this crate
//! is the HTTP surface on top: routing, principal resolution, and the
//! mapping from core errors to status codes. Session handling is expected
//! to run in front of the server and hand over the user id per request.

use std::time::Duration;

use axum::http::{Method, header::CONTENT_TYPE};
use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod auth;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use state::AppState;

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = AppState::new().await;

    info!("Starting server...");

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE, auth::USER_ID_HEADER.clone()])
        .max_age(Duration::from_secs(60 * 60));

    let app = routes::router(state.clone()).layer(cors);

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.expect("Failed to bind");
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    info!("Server shutting down...");
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
