// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Antkeeper Contributors

//! `POST /webhook` (spec.md §4.4, §6): validate, dispatch in the
//! background, return the run id synchronously.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State as AxumState;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use antkeeper_channels::WebhookChannel;
use antkeeper_core::State;
use antkeeper_engine::Runner;

use crate::app::AppState;

#[derive(Debug, Deserialize)]
pub struct WebhookRequest {
    pub workflow_name: String,
    #[serde(default)]
    pub initial_state: State,
}

pub async fn handle_webhook(
    AxumState(state): AxumState<AppState>,
    payload: Result<Json<WebhookRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "detail": rejection.to_string() })),
            )
                .into_response();
        }
    };

    if !state.registry.contains(&request.workflow_name) {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "detail": format!("Unknown workflow: {}", request.workflow_name) })),
        )
            .into_response();
    }

    let channel: Arc<dyn antkeeper_channels::Channel> = Arc::new(WebhookChannel::new(
        request.workflow_name.clone(),
        request.initial_state,
    ));

    match Runner::new(Arc::clone(&state.registry), channel) {
        Ok(mut runner) => {
            let run_id = runner.id().as_str().to_string();
            tokio::task::spawn_blocking(move || {
                if let Err(err) = runner.run() {
                    if !err.is_failed() {
                        tracing::error!(error = %err, "workflow faulted during webhook dispatch");
                    }
                }
            });
            (StatusCode::OK, Json(json!({ "run_id": run_id }))).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to construct runner for webhook dispatch");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "detail": "failed to start run" })),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
#[path = "webhook_tests.rs"]
mod tests;
