// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Antkeeper Contributors

//! Where a deployment wires its workflow handlers into `antkeeperd`. Empty
//! by default — handler bodies are out of scope here (see
//! [`antkeeper_engine::registry`]).

use antkeeper_engine::Registry;

pub fn register_all(_registry: &mut Registry) {}
