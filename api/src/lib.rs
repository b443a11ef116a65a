//! HTTP boundary for the App Builder backend.
//!
//! Exposes a root liveness route and `POST /api/generate`, which delegates
//! to the `llm-codegen-service` pipeline. Startup is fail-fast: if the
//! OpenAI credential is missing or invalid the server never starts
//! listening.

use std::{env, error::Error, sync::Arc};

mod core;
mod error_handler;
mod routes;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::signal;

use crate::{
    core::app_state::AppState,
    routes::{generate::generate_route::generate_app, health_route::health},
};

pub async fn start() -> Result<(), Box<dyn Error>> {
    // Build the shared LLM client first so a bad credential aborts startup.
    let state = Arc::new(AppState::from_env()?);

    let host_url = env::var("API_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3001".into());

    let app = Router::new()
        .route("/", get(health))
        .route("/api/generate", post(generate_app))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&host_url).await?;
    tracing::info!(address = %host_url, "App Builder API listening");

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Returns a future that resolves when Ctrl+C is pressed
async fn shutdown_signal() {
    signal::ctrl_c()
        .await
        .expect("Failed to listen for shutdown signal");
}
