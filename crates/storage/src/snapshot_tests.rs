// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Antkeeper Contributors

use super::*;
use antkeeper_core::State;
use serde_json::json;
use tempfile::tempdir;

#[test]
fn write_then_read_round_trips() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("20260305081409-cafebabe.json");

    let mut state = State::new();
    state.insert("run_id", json!("cafebabe"));
    state.insert("nested", json!({"a": [1, 2, 3]}));

    write_snapshot(&path, &state).expect("write");
    let read_back = read_snapshot(&path).expect("read");

    assert_eq!(state, read_back);
}

#[test]
fn write_creates_parent_directories() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("nested/deeper/run.json");

    write_snapshot(&path, &State::new()).expect("write");
    assert!(path.exists());
}

#[test]
fn write_leaves_no_tmp_file_behind() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("run.json");

    write_snapshot(&path, &State::new()).expect("write");

    let tmp_exists = std::fs::read_dir(dir.path())
        .expect("read_dir")
        .filter_map(Result::ok)
        .any(|entry| entry.path().extension().map(|e| e == "tmp").unwrap_or(false));
    assert!(!tmp_exists);
}

#[test]
fn overwrite_replaces_previous_content() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("run.json");

    let mut first = State::new();
    first.insert("step", json!("a"));
    write_snapshot(&path, &first).expect("write first");

    let mut second = State::new();
    second.insert("step", json!("b"));
    write_snapshot(&path, &second).expect("write second");

    let read_back = read_snapshot(&path).expect("read");
    assert_eq!(read_back.get("step"), Some(&json!("b")));
}
