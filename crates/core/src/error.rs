// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Antkeeper Contributors

//! The failure plumbing described in spec.md §7: exactly two kinds of
//! workflow failure, distinguished so each I/O boundary can render them
//! differently.

use thiserror::Error;

/// A workflow either failed in a way the handler (or the framework, on its
/// behalf — an unknown handler name) expected and reported, or it faulted
/// unexpectedly.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// Raised by `Runner::fail(msg)`, or synthesized by the framework when a
    /// workflow name doesn't resolve in the registry. Expected, recoverable,
    /// and safe to show an end user.
    #[error("{0}")]
    Failed(String),

    /// Anything else: a panic caught at a boundary, an I/O error propagated
    /// out of persistence, a bug in a handler. Surfaced loudly at the
    /// line-cli boundary, logged-and-swallowed at background boundaries.
    #[error(transparent)]
    Fault(#[from] anyhow::Error),
}

impl WorkflowError {
    /// True for [`WorkflowError::Failed`].
    pub fn is_failed(&self) -> bool {
        matches!(self, WorkflowError::Failed(_))
    }

    /// The message to show a human, regardless of which variant this is.
    pub fn message(&self) -> String {
        match self {
            WorkflowError::Failed(msg) => msg.clone(),
            WorkflowError::Fault(err) => err.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
