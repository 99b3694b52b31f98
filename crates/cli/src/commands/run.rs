// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Antkeeper Contributors

//! The `run` subcommand: the line-cli boundary from spec.md §4.7, driven
//! straight off process arguments and standard input.

use std::io::{IsTerminal, Read};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;

use antkeeper_channels::LineChannel;
use antkeeper_core::WorkflowError;
use antkeeper_engine::{Registry, RegistryConfig, Runner};

use crate::args::build_initial_state;
use crate::exit_error::ExitError;
use crate::registrations;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Name of the registered workflow to run.
    pub workflow: String,

    /// Prompt file(s). Contents are concatenated with no separator into
    /// `initial_state["prompt"]`. If omitted and standard input is not a
    /// terminal, the prompt is read from standard input instead.
    pub files: Vec<PathBuf>,

    /// Additional initial-state entries, each `key=value`. May be repeated.
    #[arg(long = "initial-state", value_name = "KEY=VALUE")]
    pub initial_state: Vec<String>,

    /// Set `initial_state["model"]`.
    #[arg(long)]
    pub model: Option<String>,
}

/// Run one workflow to completion and report its outcome the way
/// `main` expects: `Ok(())` on success, an [`ExitError`] for a workflow
/// failure (exit code 1), and any other error for a fault (exit code 2).
pub fn run(args: RunArgs) -> Result<()> {
    let mut registry = Registry::new(RegistryConfig::from_env());
    registrations::register_all(&mut registry);
    run_with_registry(args, Arc::new(registry))
}

fn run_with_registry(args: RunArgs, registry: Arc<Registry>) -> Result<()> {
    let stdin_is_terminal = std::io::stdin().is_terminal();
    let initial_state = build_initial_state(
        &args.files,
        &args.initial_state,
        args.model.as_deref(),
        stdin_is_terminal,
        read_stdin_to_string,
    )?;

    let channel = Arc::new(LineChannel::new(args.workflow.clone(), initial_state));
    let mut runner = Runner::new(registry, channel)?;

    match runner.run() {
        Ok(_state) => Ok(()),
        Err(WorkflowError::Failed(message)) => Err(ExitError::new(1, message).into()),
        Err(WorkflowError::Fault(err)) => Err(err.context("workflow faulted")),
    }
}

fn read_stdin_to_string() -> std::io::Result<String> {
    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
