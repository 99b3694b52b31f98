// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Antkeeper Contributors

use super::*;
use std::path::Path;

#[test]
fn log_and_state_paths_share_a_stem() {
    let dir = Path::new("/tmp/antkeeper");
    let log = log_path(dir, "20260305081409", "cafebabe");
    let state = state_path(dir, "20260305081409", "cafebabe");

    assert_eq!(log.file_stem(), state.file_stem());
    assert_eq!(log.extension().unwrap(), "log");
    assert_eq!(state.extension().unwrap(), "json");
}
