// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Antkeeper Contributors

//! `run_workflow`: the composition fold (spec.md §4.3).

use antkeeper_core::{State, WorkflowError};

use crate::registry::Handler;
use crate::runner::Runner;

/// One named step of a composed workflow.
#[derive(Clone)]
pub struct WorkflowStep {
    pub name: String,
    pub handler: Handler,
}

impl WorkflowStep {
    pub fn new(name: impl Into<String>, handler: Handler) -> Self {
        Self {
            name: name.into(),
            handler,
        }
    }
}

/// Left fold `steps` over `state`, snapshotting after each step.
///
/// Composition is plain function application, not a separate scheduling
/// entity: a handler that wants to reuse these steps can also be registered
/// under its own name in the registry independently.
pub fn run_workflow(
    runner: &Runner,
    mut state: State,
    steps: &[WorkflowStep],
) -> Result<State, WorkflowError> {
    for step in steps {
        runner.logger().info(&format!("step '{}'", step.name));
        state = (step.handler)(runner, state)?;
        runner.snapshot(&state)?;
        let keys: Vec<&str> = state.keys().collect();
        runner
            .logger()
            .debug(&format!("state keys after '{}': {:?}", step.name, keys));
    }
    Ok(state)
}

#[cfg(test)]
#[path = "workflow_tests.rs"]
mod tests;
