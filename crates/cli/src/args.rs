// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Antkeeper Contributors

//! Turning `run` subcommand arguments into the initial [`State`] a
//! [`antkeeper_channels::LineChannel`] is constructed with, per spec.md
//! §6's External Interfaces contract for the CLI.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use antkeeper_core::State;
use serde_json::json;

/// Build the initial state from prompt file paths, repeated
/// `--initial-state key=value` pairs, and an optional `--model` value.
///
/// If `files` is non-empty, their contents are read and concatenated with
/// no separator into `"prompt"`. Otherwise, if `stdin_is_terminal` is
/// false, `read_stdin` is called once to fill `"prompt"`. `read_stdin` is
/// a parameter (rather than a direct `std::io::stdin()` read) so tests can
/// supply canned input without a real terminal.
pub fn build_initial_state<P: AsRef<Path>>(
    files: &[P],
    initial_state_pairs: &[String],
    model: Option<&str>,
    stdin_is_terminal: bool,
    read_stdin: impl FnOnce() -> std::io::Result<String>,
) -> Result<State> {
    let mut state = State::new();

    if !files.is_empty() {
        let mut prompt = String::new();
        for path in files {
            let path = path.as_ref();
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("reading prompt file '{}'", path.display()))?;
            prompt.push_str(&contents);
        }
        state.insert("prompt", json!(prompt));
    } else if !stdin_is_terminal {
        let prompt = read_stdin().context("reading prompt from standard input")?;
        state.insert("prompt", json!(prompt));
    }

    for pair in initial_state_pairs {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| anyhow!("invalid --initial-state entry '{pair}', expected key=value"))?;
        state.insert(key, json!(value));
    }

    if let Some(model) = model {
        state.insert("model", json!(model));
    }

    Ok(state)
}

#[cfg(test)]
#[path = "args_tests.rs"]
mod tests;
