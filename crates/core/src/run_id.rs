// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Antkeeper Contributors

//! Run identifiers: 8 lowercase hex characters, unique enough within a
//! single process lifetime.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An 8-character lowercase hex run identifier.
///
/// Drawn from a [`uuid::Uuid::new_v4`] (itself backed by a CSPRNG), truncated
/// to its first 8 hex characters. Collisions are negligible within a
/// process's lifetime; no cross-process uniqueness guarantee is made or
/// needed — see spec.md §4.2.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunId(String);

impl RunId {
    /// Generate a fresh run id.
    pub fn generate() -> Self {
        let uuid = uuid::Uuid::new_v4();
        Self(uuid.simple().to_string()[..8].to_string())
    }

    /// Wrap an existing string, e.g. one read back from a snapshot file.
    ///
    /// Does not validate length or charset — callers that need that
    /// (parsing operator input) should do so themselves.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for RunId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[path = "run_id_tests.rs"]
mod tests;
