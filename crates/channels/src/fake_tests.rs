// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Antkeeper Contributors

use super::*;
use antkeeper_core::RunId;

#[test]
fn records_progress_and_error_in_call_order() {
    let channel = FakeChannel::new("echo", State::new());
    let run_id = RunId::new("cafebabe");

    channel.report_progress(&run_id, "first");
    channel.report_error(&run_id, "second");

    let reports = channel.reports();
    assert_eq!(reports.len(), 2);
    assert!(!reports[0].is_error);
    assert_eq!(reports[0].message, "first");
    assert!(reports[1].is_error);
    assert_eq!(reports[1].message, "second");
}

#[test]
fn clone_shares_the_same_recording() {
    let channel = FakeChannel::new("echo", State::new());
    let clone = channel.clone();
    clone.report_progress(&RunId::new("x"), "via clone");

    assert_eq!(channel.reports().len(), 1);
}
