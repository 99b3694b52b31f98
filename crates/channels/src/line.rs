// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Antkeeper Contributors

//! The line-cli boundary: progress to stdout, errors to stderr.

use antkeeper_core::{RunId, State};

use crate::channel::{format_progress, Channel, ChannelKind};

pub struct LineChannel {
    workflow_name: String,
    initial_state: State,
}

impl LineChannel {
    pub fn new(workflow_name: impl Into<String>, initial_state: State) -> Self {
        Self {
            workflow_name: workflow_name.into(),
            initial_state,
        }
    }
}

impl Channel for LineChannel {
    fn kind(&self) -> ChannelKind {
        ChannelKind::LineCli
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
#[path = "line_tests.rs"]
mod tests;
