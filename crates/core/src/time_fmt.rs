// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Antkeeper Contributors

//! Timestamp formatting shared by persistence (file stems) and the per-run
//! log line format.

use chrono::{DateTime, Local};

/// Format a moment as `YYYYMMDDhhmmss`, local time — the `T` in
/// `{log_dir}/{T}-{run_id}.log` from spec.md §4.2.
pub fn format_run_stamp(when: DateTime<Local>) -> String {
    when.format("%Y%m%d%H%M%S").to_string()
}

/// Format a moment as `YYYY-MM-DD HH:MM:SS,mmm`, local time — the timestamp
/// prefix of a per-run log line from spec.md §4.2.
pub fn format_log_timestamp(when: DateTime<Local>) -> String {
    when.format("%Y-%m-%d %H:%M:%S%.3f").to_string().replacen('.', ",", 1)
}

#[cfg(test)]
#[path = "time_fmt_tests.rs"]
mod tests;
