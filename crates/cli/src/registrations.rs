// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Antkeeper Contributors

//! The one place handler authors wire their workflows into the binary.
//!
//! Handler bodies themselves are out of scope here; this function is the
//! explicit `Register(name, fn)` call a deployment fills in, left empty by
//! default.

use antkeeper_engine::Registry;

pub fn register_all(_registry: &mut Registry) {}
