// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Antkeeper Contributors

//! The process-scoped handler registry (spec.md §4.1).

use antkeeper_core::{State, WorkflowError};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

use crate::runner::Runner;

/// A registered workflow: `(Runner, State) -> Result<State, WorkflowError>`.
///
/// `Arc`-wrapped so a single registration can be resolved and invoked from
/// more than one run concurrently without cloning the closure itself.
pub type Handler = Arc<dyn Fn(&Runner, State) -> Result<State, WorkflowError> + Send + Sync>;

/// Wrap a plain closure as a [`Handler`].
pub fn handler_fn<F>(f: F) -> Handler
where
    F: Fn(&Runner, State) -> Result<State, WorkflowError> + Send + Sync + 'static,
{
    Arc::new(f)
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("handler already registered: {0}")]
    AlreadyRegistered(String),
    #[error("unknown handler: {0}")]
    NotFound(String),
}

impl From<RegistryError> for WorkflowError {
    fn from(err: RegistryError) -> Self {
        WorkflowError::Failed(err.to_string())
    }
}

/// The filesystem paths a `Runner` needs to create per-run artifacts.
///
/// Read once at construction from `ANTKEEPER_LOG_DIR` / `ANTKEEPER_STATE_DIR`
/// / `ANTKEEPER_WORKTREE_DIR`, falling back to relative defaults — this
/// config is not re-read per call, unlike the coalescer's environment
/// variables (see spec.md §5).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    pub log_dir: PathBuf,
    pub state_dir: PathBuf,
    pub worktree_dir: PathBuf,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

impl RegistryConfig {
    /// Build from environment variables, falling back to relative defaults.
    pub fn from_env() -> Self {
        Self {
            log_dir: env_path_or("ANTKEEPER_LOG_DIR", "./antkeeper/logs"),
            state_dir: env_path_or("ANTKEEPER_STATE_DIR", "./antkeeper/state"),
            worktree_dir: env_path_or("ANTKEEPER_WORKTREE_DIR", "./antkeeper/worktrees"),
        }
    }
}

fn env_path_or(var: &str, default: &str) -> PathBuf {
    std::env::var(var).map(PathBuf::from).unwrap_or_else(|_| PathBuf::from(default))
}

/// A process-scoped mapping from handler name to [`Handler`], plus the
/// configured directories every `Runner` built from this registry shares.
///
/// Carries no behavior beyond lookup: multiple boundaries (CLI, webhook,
/// coalescer) share one `Registry` so they dispatch the same handler
/// universe.
pub struct Registry {
    handlers: HashMap<String, Handler>,
    config: RegistryConfig,
}

impl Registry {
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            handlers: HashMap::new(),
            config,
        }
    }

    /// Insert a handler under `name`.
    ///
    /// Fails with [`RegistryError::AlreadyRegistered`] if the name is
    /// already taken — re-registration is a hard error, not a silent
    /// override (see DESIGN.md for the reasoning behind this choice).
    pub fn register(&mut self, name: impl Into<String>, handler: Handler) -> Result<(), RegistryError> {
        let name = name.into();
        if self.handlers.contains_key(&name) {
            return Err(RegistryError::AlreadyRegistered(name));
        }
        self.handlers.insert(name, handler);
        Ok(())
    }

    pub fn resolve(&self, name: &str) -> Result<Handler, RegistryError> {
        self.handlers
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    pub fn log_dir(&self) -> &std::path::Path {
        &self.config.log_dir
    }

    pub fn state_dir(&self) -> &std::path::Path {
        &self.config.state_dir
    }

    pub fn worktree_dir(&self) -> &std::path::Path {
        &self.config.worktree_dir
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
