// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Antkeeper Contributors

//! The minimal shape of the chat API this system talks to (spec.md §4.5,
//! §4.7): two POST endpoints, both authenticated with a bearer token. This
//! is not a client for the third-party API in general — just the two calls
//! antkeeper makes, shared between the blocking [`crate::thread_reply`]
//! channel and the coalescer's async outbound calls.

use serde::Serialize;

pub const DEFAULT_BASE_URL: &str = "https://slack.com/api";

#[derive(Debug, Serialize)]
pub struct PostMessageRequest<'a> {
    pub channel: &'a str,
    pub thread_ts: &'a str,
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
pub struct AddReactionRequest<'a> {
    pub channel: &'a str,
    pub timestamp: &'a str,
    pub name: &'a str,
}

pub fn post_message_url(base_url: &str) -> String {
    format!("{base_url}/chat.postMessage")
}

pub fn add_reaction_url(base_url: &str) -> String {
    format!("{base_url}/reactions.add")
}

#[cfg(test)]
#[path = "slack_tests.rs"]
mod tests;
