// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Antkeeper Contributors

//! The thread-reply boundary: progress and error reports become posts in
//! the originating chat thread.
//!
//! Runs on the worker thread the `Runner` was dispatched onto (spec.md
//! §4.7), so it uses a blocking HTTP client directly rather than bridging
//! back to the async scheduler. HTTP faults are caught, logged, and
//! swallowed — they must never reach the handler.

use antkeeper_core::{RunId, State};

use crate::channel::{format_error_tagged, format_progress, Channel, ChannelKind};
use crate::slack::{self, PostMessageRequest};

pub struct ThreadReplyChannel {
    token: String,
    channel_id: String,
    thread_ts: String,
    workflow_name: String,
    initial_state: State,
    base_url: String,
    http: reqwest::blocking::Client,
}

impl ThreadReplyChannel {
    pub fn new(
        token: impl Into<String>,
        channel_id: impl Into<String>,
        thread_ts: impl Into<String>,
        workflow_name: impl Into<String>,
        initial_state: State,
    ) -> Self {
        Self::with_base_url(
            token,
            channel_id,
            thread_ts,
            workflow_name,
            initial_state,
            slack::DEFAULT_BASE_URL,
        )
    }

    /// Construct against a non-default base URL — used by tests to point at
    /// a local mock server instead of the real chat API.
    pub fn with_base_url(
        token: impl Into<String>,
        channel_id: impl Into<String>,
        thread_ts: impl Into<String>,
        workflow_name: impl Into<String>,
        initial_state: State,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            token: token.into(),
            channel_id: channel_id.into(),
            thread_ts: thread_ts.into(),
            workflow_name: workflow_name.into(),
            initial_state,
            base_url: base_url.into(),
            http: reqwest::blocking::Client::new(),
        }
    }

    pub fn channel_id(&self) -> &str {
        &self.channel_id
    }

    pub fn thread_ts(&self) -> &str {
        &self.thread_ts
    }

    fn post(&self, text: &str) {
        let request = PostMessageRequest {
            channel: &self.channel_id,
            thread_ts: &self.thread_ts,
            text,
        };
        let result = self
            .http
            .post(slack::post_message_url(&self.base_url))
            .bearer_auth(&self.token)
            .json(&request)
            .send();

        match result {
            Ok(response) if !response.status().is_success() => {
                tracing::warn!(
                    status = %response.status(),
                    channel = %self.channel_id,
                    "chat.postMessage returned a non-success status"
                );
            }
            Err(err) => {
                tracing::warn!(error = %err, channel = %self.channel_id, "chat.postMessage failed");
            }
            Ok(_) => {}
        }
    }
}

impl Channel for ThreadReplyChannel {
    fn kind(&self) -> ChannelKind {
        ChannelKind::ThreadReply
    }

    fn workflow_name(&self) -> &str {
        &self.workflow_name
    }

    fn initial_state(&self) -> State {
        self.initial_state.clone()
    }

    fn report_progress(&self, run_id: &RunId, message: &str) {
        self.post(&format_progress(&self.workflow_name, run_id, message));
    }

    fn report_error(&self, run_id: &RunId, message: &str) {
        self.post(&format_error_tagged(&self.workflow_name, run_id, message));
    }
}

#[cfg(test)]
#[path = "thread_reply_tests.rs"]
mod tests;
