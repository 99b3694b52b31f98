// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Antkeeper Contributors

use super::*;
use crate::registry::{handler_fn, RegistryConfig};
use antkeeper_channels::FakeChannel;
use antkeeper_core::State;
use serde_json::json;
use tempfile::tempdir;

fn test_registry(dir: &std::path::Path) -> Registry {
    Registry::new(RegistryConfig {
        log_dir: dir.join("logs"),
        state_dir: dir.join("state"),
        worktree_dir: dir.join("worktrees"),
    })
}

#[test]
fn new_creates_log_and_state_dirs_and_opens_logger() {
    let dir = tempdir().expect("tempdir");
    let registry = Arc::new(test_registry(dir.path()));
    let channel = Arc::new(FakeChannel::new("echo", State::new()));

    let runner = Runner::new(registry, channel).expect("new runner");

    assert!(dir.path().join("logs").is_dir());
    assert!(dir.path().join("state").is_dir());
    assert!(runner.log_path().exists());
}

#[test]
fn run_resolves_handler_injects_reserved_keys_and_snapshots_twice() {
    let dir = tempdir().expect("tempdir");
    let mut registry = test_registry(dir.path());
    registry
        .register(
            "echo",
            handler_fn(|_runner, mut state| {
                state.insert("handled", json!(true));
                Ok(state)
            }),
        )
        .expect("register");
    let registry = Arc::new(registry);
    let channel = Arc::new(FakeChannel::new("echo", State::from_pairs([("input", json!("hi"))])));

    let mut runner = Runner::new(registry, channel).expect("new runner");
    let state_path = runner.state_path().to_path_buf();
    let result = runner.run().expect("run");

    assert_eq!(result.get("input"), Some(&json!("hi")));
    assert_eq!(result.get("handled"), Some(&json!(true)));
    assert_eq!(result.get("run_id"), Some(&json!(runner.id().as_str())));
    assert_eq!(result.get("workflow_name"), Some(&json!("echo")));

    let on_disk = antkeeper_storage::read_snapshot(&state_path).expect("read snapshot");
    assert_eq!(on_disk, result);
}

#[test]
fn run_with_unknown_workflow_name_fails() {
    let dir = tempdir().expect("tempdir");
    let registry = Arc::new(test_registry(dir.path()));
    let channel = Arc::new(FakeChannel::new("nope", State::new()));

    let mut runner = Runner::new(registry, channel).expect("new runner");
    let err = runner.run().expect_err("should fail");
    assert!(err.is_failed());
}

#[test]
fn fail_returns_a_failed_error_and_logs_it() {
    let dir = tempdir().expect("tempdir");
    let registry = Arc::new(test_registry(dir.path()));
    let channel = Arc::new(FakeChannel::new("echo", State::new()));
    let runner = Runner::new(registry, channel).expect("new runner");

    let err = runner.fail("unrecoverable");
    assert!(err.is_failed());
    assert_eq!(err.message(), "unrecoverable");
}

#[test]
fn report_progress_and_error_delegate_to_the_channel() {
    let dir = tempdir().expect("tempdir");
    let registry = Arc::new(test_registry(dir.path()));
    let channel = Arc::new(FakeChannel::new("echo", State::new()));
    let runner = Runner::new(registry, Arc::clone(&channel) as Arc<dyn antkeeper_channels::Channel>)
        .expect("new runner");

    runner.report_progress("working");
    runner.report_error("oops");

    let reports = channel.reports();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].message, "working");
    assert!(!reports[0].is_error);
    assert_eq!(reports[1].message, "oops");
    assert!(reports[1].is_error);
}

#[test]
fn run_closes_the_logger_so_a_second_close_is_a_no_op() {
    let dir = tempdir().expect("tempdir");
    let mut registry = test_registry(dir.path());
    registry.register("echo", handler_fn(|_r, s| Ok(s))).expect("register");
    let registry = Arc::new(registry);
    let channel = Arc::new(FakeChannel::new("echo", State::new()));

    let mut runner = Runner::new(registry, channel).expect("new runner");
    runner.run().expect("run");
    // Dropping an already-closed runner must not panic or double-close.
    drop(runner);
}
