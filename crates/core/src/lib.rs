// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Antkeeper Contributors

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! antkeeper-core: domain primitives shared by every other antkeeper crate.
//!
//! This crate is deliberately thin: it holds the [`State`] value, the
//! [`RunId`] identifier, the [`WorkflowError`] failure type, and a couple of
//! timestamp formatters. Nothing here knows about handlers, channels, or
//! persistence — those live in the crates that depend on this one.

pub mod error;
pub mod run_id;
pub mod state;
pub mod time_fmt;

pub use error::WorkflowError;
pub use run_id::RunId;
pub use state::{State, RESERVED_RUN_ID, RESERVED_WORKFLOW_NAME};
