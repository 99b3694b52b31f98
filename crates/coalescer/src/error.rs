// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Antkeeper Contributors

use thiserror::Error;

use crate::config::ConfigError;

/// Failure surfaced by [`crate::store::Coalescer::handle_event`].
///
/// The only variant: the ambient `BOT_TOKEN` / `BOT_USER_ID` precondition
/// wasn't met for a non-verification event (spec.md §4.5's environment
/// preconditions). The server crate maps this to HTTP 422.
#[derive(Debug, Error)]
pub enum CoalescerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
}
