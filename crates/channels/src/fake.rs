// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Antkeeper Contributors

//! A recording [`Channel`] for deterministic tests, mirroring the teacher's
//! `FakeAgentAdapter`/`FakeSessionAdapter` pattern (`crates/adapters/src/agent/fake.rs`):
//! wrap shared state in a `Mutex`, record every call, expose it for
//! assertions.

use antkeeper_core::{RunId, State};
use parking_lot::Mutex;
use std::sync::Arc;

use crate::channel::{Channel, ChannelKind};

/// One recorded `report_progress`/`report_error` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeReport {
    pub run_id: String,
    pub message: String,
    pub is_error: bool,
}

/// A channel that records every report instead of sending it anywhere.
#[derive(Clone)]
pub struct FakeChannel {
    workflow_name: String,
    initial_state: State,
    kind: ChannelKind,
    reports: Arc<Mutex<Vec<FakeReport>>>,
}

impl FakeChannel {
    pub fn new(workflow_name: impl Into<String>, initial_state: State) -> Self {
        Self::with_kind(workflow_name, initial_state, ChannelKind::LineCli)
    }

    pub fn with_kind(
        workflow_name: impl Into<String>,
        initial_state: State,
        kind: ChannelKind,
    ) -> Self {
        Self {
            workflow_name: workflow_name.into(),
            initial_state,
            kind,
            reports: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// All reports recorded so far, in call order.
    pub fn reports(&self) -> Vec<FakeReport> {
        self.reports.lock().clone()
    }
}

impl Channel for FakeChannel {
    fn kind(&self) -> ChannelKind {
        self.kind
    }

    fn workflow_name(&self) -> &str {
        &self.workflow_name
    }

    fn initial_state(&self) -> State {
        self.initial_state.clone()
    }

    fn report_progress(&self, run_id: &RunId, message: &str) {
        self.reports.lock().push(FakeReport {
            run_id: run_id.as_str().to_string(),
            message: message.to_string(),
            is_error: false,
        });
    }

    fn report_error(&self, run_id: &RunId, message: &str) {
        self.reports.lock().push(FakeReport {
            run_id: run_id.as_str().to_string(),
            message: message.to_string(),
            is_error: true,
        });
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
