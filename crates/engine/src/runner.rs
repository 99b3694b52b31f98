// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Antkeeper Contributors

//! The per-invocation execution context (spec.md §4.2).

use antkeeper_core::{time_fmt::format_run_stamp, RunId, State, WorkflowError};
use chrono::Local;
use std::path::PathBuf;
use std::sync::Arc;

use antkeeper_channels::channel::Channel;
use antkeeper_storage::{paths, snapshot};

use crate::registry::Registry;
use crate::run_logger::RunLogger;

/// A single run: a fresh `run_id`, a dedicated log file, and a recorded
/// state-snapshot path, bound to the `Registry` it was resolved from and the
/// `Channel` that triggered it.
pub struct Runner {
    id: RunId,
    channel: Arc<dyn Channel>,
    registry: Arc<Registry>,
    logger: RunLogger,
    log_path: PathBuf,
    state_path: PathBuf,
    closed: std::sync::atomic::AtomicBool,
}

impl Runner {
    /// Build a fresh `Runner`: generates the `run_id`, creates `log_dir` and
    /// `state_dir` if missing, and opens the per-run log sink. The state
    /// snapshot path is recorded but the file itself is not created yet —
    /// the first write happens in [`Runner::run`].
    pub fn new(registry: Arc<Registry>, channel: Arc<dyn Channel>) -> Result<Self, WorkflowError> {
        let id = RunId::generate();
        let stamp = format_run_stamp(Local::now());

        std::fs::create_dir_all(registry.log_dir())
            .map_err(|e| WorkflowError::Fault(anyhow::anyhow!(e).context("creating log_dir")))?;
        std::fs::create_dir_all(registry.state_dir())
            .map_err(|e| WorkflowError::Fault(anyhow::anyhow!(e).context("creating state_dir")))?;

        let log_path = paths::log_path(registry.log_dir(), &stamp, id.as_str());
        let state_path = paths::state_path(registry.state_dir(), &stamp, id.as_str());

        let logger = RunLogger::open(&log_path, id.as_str())
            .map_err(|e| WorkflowError::Fault(anyhow::anyhow!(e).context("opening run logger")))?;

        Ok(Self {
            id,
            channel,
            registry,
            logger,
            log_path,
            state_path,
            closed: std::sync::atomic::AtomicBool::new(false),
        })
    }

    pub fn id(&self) -> &RunId {
        &self.id
    }

    pub fn logger(&self) -> &RunLogger {
        &self.logger
    }

    pub fn log_path(&self) -> &std::path::Path {
        &self.log_path
    }

    pub fn state_path(&self) -> &std::path::Path {
        &self.state_path
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Execute this run to completion: resolve the handler by
    /// `channel.workflow_name()`, assemble and snapshot the initial state,
    /// invoke the handler, snapshot the result, then close the run logger.
    pub fn run(&mut self) -> Result<State, WorkflowError> {
        let workflow_name = self.channel.workflow_name().to_string();
        let result = self.run_inner(&workflow_name);
        self.close();
        result
    }

    fn run_inner(&self, workflow_name: &str) -> Result<State, WorkflowError> {
        let overlay = State::reserved(self.id.as_str(), workflow_name);
        let state = self.channel.initial_state().overlaid_with(&overlay);

        self.snapshot(&state)?;

        let handler = self.registry.resolve(workflow_name)?;

        self.logger.info(&format!("dispatching workflow '{workflow_name}'"));
        let result = (handler)(self, state)?;

        self.snapshot(&result)?;
        Ok(result)
    }

    /// Write `state` to this run's snapshot file.
    pub fn snapshot(&self, state: &State) -> Result<(), WorkflowError> {
        snapshot::write_snapshot(&self.state_path, state)
            .map_err(|e| WorkflowError::Fault(anyhow::anyhow!(e).context("writing snapshot")))
    }

    pub fn report_progress(&self, message: &str) {
        self.logger.info(message);
        self.channel.report_progress(&self.id, message);
    }

    pub fn report_error(&self, message: &str) {
        self.logger.error(message);
        self.channel.report_error(&self.id, message);
    }

    /// Log at ERROR and build a [`WorkflowError::Failed`] carrying `message`.
    ///
    /// Mirrors spec.md's `fail(message)`: the caller is expected to
    /// `return Err(runner.fail(message))` immediately — this method never
    /// itself unwinds.
    pub fn fail(&self, message: impl Into<String>) -> WorkflowError {
        let message = message.into();
        self.logger.error(&message);
        WorkflowError::Failed(message)
    }

    fn close(&self) {
        if !self.closed.swap(true, std::sync::atomic::Ordering::SeqCst) {
            self.logger.close();
        }
    }
}

impl Drop for Runner {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
