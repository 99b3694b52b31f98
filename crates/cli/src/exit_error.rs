// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Antkeeper Contributors

//! A marker error carrying the process exit code `main` should use,
//! distinct from the message `anyhow`'s `Display` chain already renders.

use std::fmt;

#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExitError {}
