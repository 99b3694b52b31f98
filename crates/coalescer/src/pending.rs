// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Antkeeper Contributors

//! The pending-map key and value (spec.md §4.5's `pending: (channel_id, ts)
//! → PendingMessage`).

use serde_json::Value;

/// The key a mention is tracked under: its channel and its own `ts` (never
/// the thread's `thread_ts`, which is only used to look a mention up).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PendingKey {
    pub channel: String,
    pub ts: String,
}

impl PendingKey {
    pub fn new(channel: impl Into<String>, ts: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            ts: ts.into(),
        }
    }
}

/// The accumulated content of one logical request, growing as edits and
/// thread replies arrive before the cooldown timer fires.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingMessage {
    pub channel: String,
    pub ts: String,
    pub workflow_name: String,
    pub text: String,
    pub user: String,
    pub files: Vec<Value>,
}

#[cfg(test)]
#[path = "pending_tests.rs"]
mod tests;
