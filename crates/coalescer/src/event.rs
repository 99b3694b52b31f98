// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Antkeeper Contributors

//! The JSON event envelope shape (spec.md §4.5's "Inputs").

use serde::Deserialize;

/// The outer envelope POSTed to `/slack_event`.
#[derive(Debug, Clone, Deserialize)]
pub struct EventEnvelope {
    #[serde(rename = "type")]
    pub envelope_type: String,
    #[serde(default)]
    pub challenge: Option<String>,
    #[serde(default)]
    pub event: Option<InnerEvent>,
}

/// The nested `event` object for `event_callback` envelopes.
///
/// Only the fields spec.md §4.5 names. `message` carries the post-edit
/// content for a `message_changed` event: its own `ts`/`text` are the
/// edited message's, distinct from the outer event's own `ts`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InnerEvent {
    #[serde(rename = "type", default)]
    pub event_type: Option<String>,
    #[serde(default)]
    pub subtype: Option<String>,
    #[serde(default)]
    pub ts: Option<String>,
    #[serde(default)]
    pub thread_ts: Option<String>,
    #[serde(default)]
    pub deleted_ts: Option<String>,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub files: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub bot_id: Option<String>,
    #[serde(default)]
    pub message: Option<Box<InnerEvent>>,
}

/// What a coalesced `handle_event` call answers the caller with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResponse {
    /// The URL verification handshake: echo `body.challenge` back.
    Challenge(String),
    /// Everything else, successfully routed (including no-ops and drops).
    Ok,
}

/// The bot mention token for `bot_user_id`, e.g. `<@U0123ABC>`.
pub fn mention_token(bot_user_id: &str) -> String {
    format!("<@{bot_user_id}>")
}

/// Remove the bot's mention token from `text` and trim the result.
///
/// Returns `None` if `text` does not contain the mention.
pub fn strip_mention(text: &str, bot_user_id: &str) -> Option<String> {
    let token = mention_token(bot_user_id);
    if !text.contains(&token) {
        return None;
    }
    Some(text.replacen(&token, "", 1).trim().to_string())
}

/// Split `stripped` into its first whitespace-delimited token (the
/// workflow name) and the remainder (the prompt), per spec.md §4.5 step 7.
pub fn split_workflow_and_prompt(stripped: &str) -> (String, String) {
    match stripped.split_once(char::is_whitespace) {
        Some((name, rest)) => (name.to_string(), rest.trim_start().to_string()),
        None => (stripped.to_string(), String::new()),
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
