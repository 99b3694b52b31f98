// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Antkeeper Contributors

//! The `Channel` capability set shared by every I/O boundary.

use antkeeper_core::{RunId, State};

/// Which concrete boundary a [`Channel`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    LineCli,
    Webhook,
    ThreadReply,
}

/// An I/O boundary: carries the initial state and the workflow name in, and
/// accepts progress/error reports keyed by run id on the way out.
///
/// Formatting and the actual sink (stdout/stderr, an HTTP call) are each
/// implementation's concern — see spec.md §4.7's table. Implementations are
/// `Send + Sync` so a `Runner` can hold one behind an `Arc<dyn Channel>`
/// across a `spawn_blocking` boundary.
pub trait Channel: Send + Sync {
    fn kind(&self) -> ChannelKind;

    fn workflow_name(&self) -> &str;

    /// The state this channel was constructed with. Cloned out because the
    /// `Runner` owns the authoritative copy once it starts a run.
    fn initial_state(&self) -> State;

    fn report_progress(&self, run_id: &RunId, message: &str);

    fn report_error(&self, run_id: &RunId, message: &str);
}

/// `[<workflow>, <run_id>] <msg>` — the progress format shared by line-cli,
/// webhook, and (for progress only) thread-reply.
pub(crate) fn format_progress(workflow_name: &str, run_id: &RunId, message: &str) -> String {
    format!("[{workflow_name}, {run_id}] {message}")
}

/// `[<workflow>, <run_id>] [ERROR] <msg>` — thread-reply's error format.
pub(crate) fn format_error_tagged(workflow_name: &str, run_id: &RunId, message: &str) -> String {
    format!("[{workflow_name}, {run_id}] [ERROR] {message}")
}
