// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Antkeeper Contributors

//! Ambient configuration read fresh at every event (spec.md §5: "read at
//! event-handling time, not cached — this lets tests perturb it freely"),
//! unlike `antkeeper_engine::RegistryConfig`, which is read once.

use std::time::Duration;
use thiserror::Error;

const DEFAULT_COOLDOWN_SECONDS: u64 = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Carries a comma-joined list of the missing variable names, in the
    /// exact shape spec.md §6 asks the `/slack_event` 422 detail to carry:
    /// `"Missing required environment variables: X[, Y]"`.
    #[error("Missing required environment variables: {0}")]
    MissingVars(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoalescerConfig {
    pub bot_token: String,
    pub bot_user_id: String,
    pub cooldown: Duration,
}

impl CoalescerConfig {
    /// Read `BOT_TOKEN`, `BOT_USER_ID`, and `COOLDOWN_SECONDS` from the
    /// process environment. Fails if either of the first two is unset or
    /// empty; `COOLDOWN_SECONDS` falls back to 30 if unset or unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bot_token = non_empty_env("BOT_TOKEN");
        let bot_user_id = non_empty_env("BOT_USER_ID");

        let mut missing = Vec::new();
        if bot_token.is_none() {
            missing.push("BOT_TOKEN");
        }
        if bot_user_id.is_none() {
            missing.push("BOT_USER_ID");
        }

        let (Some(bot_token), Some(bot_user_id)) = (bot_token, bot_user_id) else {
            return Err(ConfigError::MissingVars(missing.join(", ")));
        };

        let cooldown = std::env::var("COOLDOWN_SECONDS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_COOLDOWN_SECONDS);

        Ok(Self {
            bot_token,
            bot_user_id,
            cooldown: Duration::from_secs(cooldown),
        })
    }
}

fn non_empty_env(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
