// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::fmt;
use std::num::NonZeroU32;

use crate::error::HeightError;

/// Upper bound used when no override is configured.
pub const DEFAULT_MAX_HEIGHT: u32 = 1000;

/// Hard ceiling for any configured maximum; keeps `2h - 1` within `u32`.
pub const MAX_HEIGHT_LIMIT: u32 = 1 << 16;

/// A validated pyramid height in `1..=max`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Height(NonZeroU32);

impl Height {
    /// Validate `value` against `max` (clamped to [`MAX_HEIGHT_LIMIT`]).
    pub fn new(value: i64, max: u32) -> Result<Self, HeightError> {
        let max = max.min(MAX_HEIGHT_LIMIT);
        if value < 1 {
            return Err(HeightError::NotPositive(value));
        }
        if value > i64::from(max) {
            return Err(HeightError::TooLarge { value, max });
        }
        u32::try_from(value)
            .ok()
            .and_then(NonZeroU32::new)
            .map(Self)
            .ok_or(HeightError::TooLarge { value, max })
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Number of rows in the pattern (`2h - 1`).
    pub fn row_count(self) -> u32 {
        2 * self.get() - 1
    }
}

impl TryFrom<i64> for Height {
    type Error = HeightError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value, DEFAULT_MAX_HEIGHT)
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
#[path = "height_tests.rs"]
mod tests;
