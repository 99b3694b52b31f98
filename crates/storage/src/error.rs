// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Antkeeper Contributors

use thiserror::Error;

/// Errors from writing or reading a state snapshot.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("state is not JSON-representable: {0}")]
    Serialize(#[from] serde_json::Error),
}
