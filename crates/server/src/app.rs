// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Antkeeper Contributors

//! Axum app: shared state and route table, grounded on the same
//! `Router::new().route(...).with_state(state)` shape other example repos
//! in the pack use for their own small axum surfaces.

use std::sync::Arc;

use axum::routing::post;
use axum::Router;

use antkeeper_coalescer::Coalescer;
use antkeeper_engine::Registry;

use crate::slack_event::handle_slack_event;
use crate::webhook::handle_webhook;

/// Shared application state: one handler registry and one coalescer per
/// process, both cheap to clone (each is itself `Arc`-backed internally).
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<Registry>,
    pub coalescer: Arc<Coalescer>,
}

impl AppState {
    pub fn new(registry: Arc<Registry>) -> Self {
        let coalescer = Arc::new(Coalescer::new(Arc::clone(&registry)));
        Self { registry, coalescer }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/webhook", post(handle_webhook))
        .route("/slack_event", post(handle_slack_event))
        .with_state(state)
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
