// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Antkeeper Contributors

//! The per-run log sink, named `antkeeper.run.<id>`.
//!
//! Modeled on the teacher's `WorkerLogger` (`crates/engine/src/worker_logger.rs`):
//! a dedicated file writer that formats its own lines rather than going
//! through the ambient `tracing` subscriber, because each run needs its own
//! file and its own exact format (`YYYY-MM-DD HH:MM:SS,mmm [LEVEL]
//! antkeeper.run.<id> - <message>`) regardless of how the process's ambient
//! logging is configured.

use chrono::Local;
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use antkeeper_core::time_fmt::format_log_timestamp;

pub struct RunLogger {
    name: String,
    path: PathBuf,
    file: Mutex<Option<File>>,
}

impl RunLogger {
    /// Open (creating if needed) the log file at `path`, attached to logger
    /// name `antkeeper.run.<run_id>`.
    pub fn open(path: &Path, run_id: &str) -> io::Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            name: format!("antkeeper.run.{run_id}"),
            path: path.to_path_buf(),
            file: Mutex::new(Some(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn debug(&self, message: &str) {
        self.write_line("DEBUG", message);
    }

    pub fn info(&self, message: &str) {
        self.write_line("INFO", message);
    }

    pub fn error(&self, message: &str) {
        self.write_line("ERROR", message);
    }

    fn write_line(&self, level: &str, message: &str) {
        let mut guard = self.file.lock();
        let Some(file) = guard.as_mut() else {
            return;
        };
        let line = format!(
            "{} [{}] {} - {}\n",
            format_log_timestamp(Local::now()),
            level,
            self.name,
            message
        );
        if let Err(err) = file.write_all(line.as_bytes()) {
            tracing::warn!(error = %err, path = %self.path.display(), "failed to write run log line");
        }
    }

    /// Flush and drop the underlying file handle. Safe to call more than
    /// once; subsequent writes after `close()` are silently dropped.
    pub fn close(&self) {
        if let Some(mut file) = self.file.lock().take() {
            let _ = file.flush();
        }
    }
}

#[cfg(test)]
#[path = "run_logger_tests.rs"]
mod tests;
