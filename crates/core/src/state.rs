// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Antkeeper Contributors

//! The dynamically-typed state map threaded through every handler.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Key the [`crate::run_id::RunId`] is injected under. Framework-owned: a
/// handler's own `run_id` entry, if any, is always overwritten.
pub const RESERVED_RUN_ID: &str = "run_id";

/// Key the handler/workflow name is injected under. Framework-owned, same
/// override rule as [`RESERVED_RUN_ID`].
pub const RESERVED_WORKFLOW_NAME: &str = "workflow_name";

/// An ordered, string-keyed, dynamically-typed mapping.
///
/// `State` is the unit of data flow through handlers: a handler receives one
/// and returns a new one. Nothing in this crate mutates a `State` in place
/// from the outside — `insert`/`remove` take `&mut self` for the owner
/// building a fresh value, but a handler is expected to construct its result
/// by cloning and extending, never by reaching into a borrowed state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct State(IndexMap<String, Value>);

impl State {
    /// An empty state.
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Wrap an already-built map.
    pub fn from_map(map: IndexMap<String, Value>) -> Self {
        Self(map)
    }

    /// Build a state from `(key, value)` pairs, in order.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let mut map = IndexMap::new();
        for (k, v) in pairs {
            map.insert(k.into(), v.into());
        }
        Self(map)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &IndexMap<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> IndexMap<String, Value> {
        self.0
    }

    /// Merge `overrides` on top of `self`, returning a new `State`.
    ///
    /// Keys present in both win for `overrides` — this is the rule the
    /// `Runner` uses to inject `run_id`/`workflow_name` on top of whatever a
    /// `Channel`'s initial state already contained.
    pub fn overlaid_with(&self, overrides: &State) -> State {
        let mut merged = self.0.clone();
        for (k, v) in overrides.0.iter() {
            merged.insert(k.clone(), v.clone());
        }
        State(merged)
    }

    /// Build the reserved `run_id` / `workflow_name` overlay the `Runner`
    /// applies on top of a channel's initial state.
    pub fn reserved(run_id: &str, workflow_name: &str) -> State {
        State::from_pairs([
            (RESERVED_RUN_ID, Value::String(run_id.to_string())),
            (RESERVED_WORKFLOW_NAME, Value::String(workflow_name.to_string())),
        ])
    }
}

impl FromIterator<(String, Value)> for State {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        State(IndexMap::from_iter(iter))
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
