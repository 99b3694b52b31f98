// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Antkeeper Contributors

//! The coalescer itself: the pending map, its timers, and event routing
//! (spec.md §4.5).
//!
//! The map is guarded by a plain [`parking_lot::Mutex`] rather than an
//! async one: every critical section below is synchronous map-mutation
//! only (matching spec.md §5's "no coalescer operation yields within a
//! critical section") — outbound HTTP calls always happen after the guard
//! is dropped.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;

use antkeeper_channels::slack::{self, AddReactionRequest, PostMessageRequest};
use antkeeper_channels::{Channel, ThreadReplyChannel};
use antkeeper_core::State;
use antkeeper_engine::{Registry, Runner};

use crate::config::CoalescerConfig;
use crate::error::CoalescerError;
use crate::event::{self, EventEnvelope, EventResponse, InnerEvent};
use crate::pending::{PendingKey, PendingMessage};

struct PendingEntry {
    message: PendingMessage,
    token: Arc<CancellationToken>,
}

/// The debounced event coalescer. Cheap to clone: every field is an `Arc`
/// or a pooled client, so a clone can be moved into a spawned timer task.
#[derive(Clone)]
pub struct Coalescer {
    registry: Arc<Registry>,
    pending: Arc<Mutex<HashMap<PendingKey, PendingEntry>>>,
    http: reqwest::Client,
    base_url: String,
}

impl Coalescer {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self::with_base_url(registry, slack::DEFAULT_BASE_URL)
    }

    /// Construct against a non-default chat API base URL — used by tests to
    /// point outbound calls at a local mock server.
    pub fn with_base_url(registry: Arc<Registry>, base_url: impl Into<String>) -> Self {
        Self {
            registry,
            pending: Arc::new(Mutex::new(HashMap::new())),
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Number of pending entries currently tracked. Exposed for tests.
    pub fn pending_count(&self) -> usize {
        self.pending.lock().len()
    }

    pub fn contains_pending(&self, key: &PendingKey) -> bool {
        self.pending.lock().contains_key(key)
    }

    /// Route one event envelope, following spec.md §4.5's fixed clause
    /// order. Every branch responds 200 except the environment-precondition
    /// failure, which the caller maps to 422.
    pub async fn handle_event(&self, envelope: EventEnvelope) -> Result<EventResponse, CoalescerError> {
        // 1. Verification handshake — exempt from the environment check.
        if envelope.envelope_type == "url_verification" {
            return Ok(EventResponse::Challenge(envelope.challenge.unwrap_or_default()));
        }

        let config = CoalescerConfig::from_env()?;

        // 2. Missing `event` field.
        let Some(event) = envelope.event else {
            return Ok(EventResponse::Ok);
        };

        // 3. Bot self-filter.
        if event.bot_id.is_some() {
            return Ok(EventResponse::Ok);
        }

        // 4. Thread reply detection.
        if let Some(outcome) = self.try_handle_thread_reply(&event, &config).await {
            return Ok(outcome);
        }

        // 5. Edit.
        if event.subtype.as_deref() == Some("message_changed") {
            self.handle_edit(&event, &config);
            return Ok(EventResponse::Ok);
        }

        // 6. Delete.
        if event.subtype.as_deref() == Some("message_deleted") {
            self.handle_delete(&event);
            return Ok(EventResponse::Ok);
        }

        // 7. New mention.
        if is_new_mention_candidate(&event) {
            if let Some(outcome) = self.try_handle_new_mention(&event, &config).await {
                return Ok(outcome);
            }
        }

        // 8. Fallthrough.
        Ok(EventResponse::Ok)
    }

    async fn try_handle_thread_reply(
        &self,
        event: &InnerEvent,
        config: &CoalescerConfig,
    ) -> Option<EventResponse> {
        let thread_ts = event.thread_ts.as_ref()?;
        let ts = event.ts.as_ref()?;
        if thread_ts == ts {
            return None;
        }
        let channel = event.channel.clone().unwrap_or_default();
        let key = PendingKey::new(channel.clone(), thread_ts.clone());

        let new_token = {
            let mut pending = self.pending.lock();
            let entry = pending.get_mut(&key)?;
            if let Some(reply_text) = &event.text {
                entry.message.text.push('\n');
                entry.message.text.push_str(reply_text);
            }
            if let Some(files) = &event.files {
                entry.message.files.extend(files.iter().cloned());
            }
            entry.token.cancel();
            let fresh = Arc::new(CancellationToken::new());
            entry.token = Arc::clone(&fresh);
            fresh
        };

        self.start_timer(key, new_token, config.cooldown);
        self.post_reaction(config, &channel, ts).await;
        Some(EventResponse::Ok)
    }

    fn handle_edit(&self, event: &InnerEvent, config: &CoalescerConfig) {
        let Some(edited) = &event.message else {
            return;
        };
        let (Some(edited_ts), Some(channel)) = (&edited.ts, &event.channel) else {
            return;
        };
        let Some(new_text) = &edited.text else {
            return;
        };
        let Some(stripped) = event::strip_mention(new_text, &config.bot_user_id) else {
            return;
        };

        let key = PendingKey::new(channel.clone(), edited_ts.clone());
        let new_token = {
            let mut pending = self.pending.lock();
            let Some(entry) = pending.get_mut(&key) else {
                return;
            };
            entry.message.text = stripped;
            entry.token.cancel();
            let fresh = Arc::new(CancellationToken::new());
            entry.token = Arc::clone(&fresh);
            fresh
        };
        self.start_timer(key, new_token, config.cooldown);
    }

    fn handle_delete(&self, event: &InnerEvent) {
        let (Some(deleted_ts), Some(channel)) = (&event.deleted_ts, &event.channel) else {
            return;
        };
        let key = PendingKey::new(channel.clone(), deleted_ts.clone());
        let mut pending = self.pending.lock();
        if let Some(entry) = pending.remove(&key) {
            entry.token.cancel();
        }
    }

    async fn try_handle_new_mention(
        &self,
        event: &InnerEvent,
        config: &CoalescerConfig,
    ) -> Option<EventResponse> {
        let text = event.text.as_ref()?;
        let stripped = event::strip_mention(text, &config.bot_user_id)?;
        let (workflow_name, _) = event::split_workflow_and_prompt(&stripped);

        let channel = event.channel.clone().unwrap_or_default();
        let ts = event.ts.clone().unwrap_or_default();
        let key = PendingKey::new(channel.clone(), ts.clone());

        let token = {
            let mut pending = self.pending.lock();
            if pending.contains_key(&key) {
                // Duplicate delivery of the same mention: skip per spec.md
                // §4.5 step 7.
                return Some(EventResponse::Ok);
            }
            let token = Arc::new(CancellationToken::new());
            pending.insert(
                key.clone(),
                PendingEntry {
                    message: PendingMessage {
                        channel: channel.clone(),
                        ts: ts.clone(),
                        workflow_name,
                        text: stripped.clone(),
                        user: event.user.clone().unwrap_or_default(),
                        files: event.files.clone().unwrap_or_default(),
                    },
                    token: Arc::clone(&token),
                },
            );
            token
        };

        self.start_timer(key, token, config.cooldown);
        self.post_reaction(config, &channel, &ts).await;
        Some(EventResponse::Ok)
    }

    fn start_timer(&self, key: PendingKey, token: Arc<CancellationToken>, cooldown: Duration) {
        let coalescer = self.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    return;
                }
                _ = tokio::time::sleep(cooldown) => {}
            }
            coalescer.fire_timer(key, token).await;
        });
    }

    /// Timer expiry (spec.md §4.5's "Timer expiry"). Re-checks the map
    /// before acting, because cancellation can race with the sleep
    /// completing — the entry may already be gone, or rebound to a newer
    /// timer handle.
    async fn fire_timer(&self, key: PendingKey, token: Arc<CancellationToken>) {
        let message = {
            let mut pending = self.pending.lock();
            match pending.get(&key) {
                Some(entry) if Arc::ptr_eq(&entry.token, &token) => pending.remove(&key).map(|e| e.message),
                _ => None,
            }
        };
        let Some(message) = message else {
            return;
        };

        let config = match CoalescerConfig::from_env() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(error = %err, "coalescer config unavailable at timer expiry");
                return;
            }
        };

        self.post_text(&config, &message.channel, &message.ts, "Processing your request…")
            .await;

        if self.registry.resolve(&message.workflow_name).is_err() {
            let detail = format!("Unknown workflow: {}", message.workflow_name);
            self.post_text(&config, &message.channel, &message.ts, &detail).await;
            return;
        }

        self.dispatch(message, config);
    }

    /// Build the Thread-reply `Channel` and `Runner` and execute on a
    /// worker thread, per spec.md §4.5 steps 4-5: the scheduler's own
    /// single-threaded event loop must never block on workflow execution.
    fn dispatch(&self, message: PendingMessage, config: CoalescerConfig) {
        let registry = Arc::clone(&self.registry);
        tokio::task::spawn_blocking(move || {
            let mut initial_state = State::from_pairs([
                ("prompt", serde_json::Value::String(message.text.clone())),
                ("slack_user", serde_json::Value::String(message.user.clone())),
            ]);
            if !message.files.is_empty() {
                initial_state.insert("files", serde_json::Value::Array(message.files.clone()));
            }

            let channel: Arc<dyn Channel> = Arc::new(ThreadReplyChannel::new(
                config.bot_token.clone(),
                message.channel.clone(),
                message.ts.clone(),
                message.workflow_name.clone(),
                initial_state,
            ));

            match Runner::new(registry, channel) {
                Ok(mut runner) => {
                    if let Err(err) = runner.run() {
                        if !err.is_failed() {
                            tracing::error!(error = %err, "workflow faulted during coalesced dispatch");
                        }
                    }
                }
                Err(err) => {
                    tracing::error!(error = %err, "failed to construct runner for coalesced dispatch");
                }
            }
        });
    }

    async fn post_text(&self, config: &CoalescerConfig, channel: &str, thread_ts: &str, text: &str) {
        let request = PostMessageRequest { channel, thread_ts, text };
        let result = self
            .http
            .post(slack::post_message_url(&self.base_url))
            .bearer_auth(&config.bot_token)
            .json(&request)
            .send()
            .await;
        log_outbound_result(result, channel, "chat.postMessage");
    }

    async fn post_reaction(&self, config: &CoalescerConfig, channel: &str, ts: &str) {
        let request = AddReactionRequest {
            channel,
            timestamp: ts,
            name: "thumbsup",
        };
        let result = self
            .http
            .post(slack::add_reaction_url(&self.base_url))
            .bearer_auth(&config.bot_token)
            .json(&request)
            .send()
            .await;
        log_outbound_result(result, channel, "reactions.add");
    }
}

fn log_outbound_result(result: Result<reqwest::Response, reqwest::Error>, channel: &str, api: &str) {
    match result {
        Ok(response) if !response.status().is_success() => {
            tracing::warn!(status = %response.status(), channel, api, "chat API call returned a non-success status");
        }
        Err(err) => {
            tracing::warn!(error = %err, channel, api, "chat API call failed");
        }
        Ok(_) => {}
    }
}

/// Whether `event` could be a fresh mention per spec.md §4.5 step 7's type
/// gate (the mention-token check happens separately, inside
/// `try_handle_new_mention`).
fn is_new_mention_candidate(event: &InnerEvent) -> bool {
    match event.event_type.as_deref() {
        Some("app_mention") => true,
        Some("message") => matches!(event.subtype.as_deref(), None | Some("file_share")),
        _ => false,
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
