// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Antkeeper Contributors

//! Whole-file JSON snapshots of a [`State`], written atomically.
//!
//! Mirrors the teacher's `Snapshot::save`: write to a sibling `.tmp` path,
//! `sync_all`, then rename over the real path. A reader never observes a
//! partially-written file.

use antkeeper_core::State;
use serde::Serialize as _;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::StorageError;

/// Overwrite `path` with `state`, two-space-indented JSON, UTF-8.
///
/// Fails with [`StorageError::Serialize`] if `state` holds a value that
/// isn't JSON-representable — per spec.md §4.6 this is treated as a caller
/// (handler) bug, not a framework bug.
pub fn write_snapshot(path: &Path, state: &State) -> Result<(), StorageError> {
    write_snapshot_inner(path, state).inspect_err(|err| {
        tracing::error!(path = %path.display(), error = %err, "failed to write state snapshot");
    })
}

fn write_snapshot_inner(path: &Path, state: &State) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = path.with_extension("json.tmp");
    {
        let file = File::create(&tmp_path)?;
        let mut writer = BufWriter::new(file);
        let mut serializer = serde_json::Serializer::with_formatter(
            &mut writer,
            serde_json::ser::PrettyFormatter::with_indent(b"  "),
        );
        state.serialize(&mut serializer)?;
        writer.flush()?;
        let file = writer.into_inner().map_err(|e| e.into_error())?;
        file.sync_all()?;
    }
    fs::rename(&tmp_path, path)?;
    Ok(())
}

/// Read back a previously-written snapshot.
pub fn read_snapshot(path: &Path) -> Result<State, StorageError> {
    read_snapshot_inner(path).inspect_err(|err| {
        tracing::warn!(path = %path.display(), error = %err, "failed to read state snapshot");
    })
}

fn read_snapshot_inner(path: &Path) -> Result<State, StorageError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let state = serde_json::from_reader(reader)?;
    Ok(state)
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
