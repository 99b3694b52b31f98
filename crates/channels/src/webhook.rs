// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Antkeeper Contributors

//! The webhook boundary: same stdout/stderr sinks as line-cli (spec.md
//! §4.7's table gives them identical formats), kept as its own type because
//! it's a distinct trigger with its own construction path (the dispatcher),
//! not a CLI invocation.

use antkeeper_core::{RunId, State};

use crate::channel::{format_progress, Channel, ChannelKind};

pub struct WebhookChannel {
    workflow_name: String,
    initial_state: State,
}

impl WebhookChannel {
    pub fn new(workflow_name: impl Into<String>, initial_state: State) -> Self {
        Self {
            workflow_name: workflow_name.into(),
            initial_state,
        }
    }
}

impl Channel for WebhookChannel {
    fn kind(&self) -> ChannelKind {
        ChannelKind::Webhook
    }

    fn workflow_name(&self) -> &str {
        &self.workflow_name
    }

    fn initial_state(&self) -> State {
        self.initial_state.clone()
    }

    fn report_progress(&self, run_id: &RunId, message: &str) {
        println!("{}", format_progress(&self.workflow_name, run_id, message));
    }

    fn report_error(&self, run_id: &RunId, message: &str) {
        eprintln!("{}", format_progress(&self.workflow_name, run_id, message));
    }
}

#[cfg(test)]
#[path = "webhook_tests.rs"]
mod tests;
