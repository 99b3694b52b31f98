// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Antkeeper Contributors

//! `POST /slack_event` (spec.md §4.5, §6): delegates routing entirely to
//! [`antkeeper_coalescer::Coalescer`]; this module is just the HTTP
//! response-shape mapping.

use axum::extract::rejection::JsonRejection;
use axum::extract::State as AxumState;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use antkeeper_coalescer::{CoalescerError, EventEnvelope, EventResponse};

use crate::app::AppState;

pub async fn handle_slack_event(
    AxumState(state): AxumState<AppState>,
    payload: Result<Json<EventEnvelope>, JsonRejection>,
) -> Response {
    let Json(envelope) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "detail": rejection.to_string() })),
            )
                .into_response();
        }
    };

    match state.coalescer.handle_event(envelope).await {
        Ok(EventResponse::Challenge(challenge)) => {
            (StatusCode::OK, Json(json!({ "challenge": challenge }))).into_response()
        }
        Ok(EventResponse::Ok) => (StatusCode::OK, Json(json!({ "ok": true }))).into_response(),
        Err(CoalescerError::Config(err)) => {
            (StatusCode::UNPROCESSABLE_ENTITY, Json(json!({ "detail": err.to_string() }))).into_response()
        }
    }
}

#[cfg(test)]
#[path = "slack_event_tests.rs"]
mod tests;
