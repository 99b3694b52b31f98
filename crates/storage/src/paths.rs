// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Antkeeper Contributors

//! Path builders for per-run artifacts.
//!
//! Structure: `{dir}/{stamp}-{run_id}.{ext}`. Used by both the writer
//! (`Runner`) and any operator tooling that globs a run's log next to its
//! state snapshot by stem.

use std::path::{Path, PathBuf};

/// Build the path to a run's log file: `{log_dir}/{stamp}-{run_id}.log`.
pub fn log_path(log_dir: &Path, stamp: &str, run_id: &str) -> PathBuf {
    log_dir.join(format!("{stamp}-{run_id}.log"))
}

/// Build the path to a run's state snapshot: `{state_dir}/{stamp}-{run_id}.json`.
pub fn state_path(state_dir: &Path, stamp: &str, run_id: &str) -> PathBuf {
    state_dir.join(format!("{stamp}-{run_id}.json"))
}

#[cfg(test)]
#[path = "paths_tests.rs"]
mod tests;
