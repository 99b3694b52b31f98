// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Antkeeper Contributors

//! antkeeperd - the HTTP process hosting `/webhook` and `/slack_event`.

use std::sync::Arc;

use anyhow::Context as _;
use tracing::info;

use antkeeper_engine::{Registry, RegistryConfig};
use antkeeper_server::{router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_logging();

    let mut registry = Registry::new(RegistryConfig::from_env());
    antkeeper_server::registrations::register_all(&mut registry);
    let state = AppState::new(Arc::new(registry));

    let addr = std::env::var("ANTKEEPER_LISTEN_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding to {addr}"))?;
    info!(%addr, "antkeeperd listening");

    axum::serve(listener, router(state)).await.context("serving antkeeperd")?;
    Ok(())
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();
}
