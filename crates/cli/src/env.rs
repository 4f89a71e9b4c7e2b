// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by piramide are defined here.
//! Use these accessors instead of calling `std::env::var()` directly.

/// Generated env var name constants.
mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

// Re-export name constants for callers that need the raw name string.
pub use names::*;

/// `PIRAMIDE_MAX_HEIGHT` — Raw upper bound for accepted heights.
pub fn max_height() -> Option<String> {
    std::env::var(names::PIRAMIDE_MAX_HEIGHT).ok()
}

/// Parse a maximum height; zero and non-numeric values are rejected.
pub fn parse_max_height(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|max| *max > 0)
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
