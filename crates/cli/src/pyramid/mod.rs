// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pyramid rendering.
//!
//! A pyramid of height `h` has `2h - 1` rows. Row `i` (1-based) holds
//! `h - |h - i|` asterisks, rising from 1 to `h` and falling back to 1.
//! The inverse orientation pads each row with spaces to a width of `h`.
//!
//! Two iteration strategies produce the row profile: a closed-form counted
//! loop and a rise-then-fall counter. They yield identical rows.

mod height;
mod render;
mod rows;

pub use height::{Height, DEFAULT_MAX_HEIGHT, MAX_HEIGHT_LIMIT};
pub use render::{render, render_to_string, render_upright, render_upright_inverse};
pub use rows::{column_height, rows, CountedRows, Phase, RiseFallRows, Rows};

/// Horizontal alignment of the pattern.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    /// Left-aligned
    #[default]
    Upright,
    /// Right-aligned, padded with spaces to the full height
    Inverse,
}

impl Orientation {
    /// Parse the orientation keyword used on the command line.
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "inverse" => Some(Self::Inverse),
            _ => None,
        }
    }
}

/// How the row sequence is produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Closed-form row index (`for`)
    #[default]
    Counted,
    /// Counter that climbs to the peak and back down (`while`)
    RiseThenFall,
}

impl Strategy {
    /// Parse the strategy keyword used on the command line.
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "for" => Some(Self::Counted),
            "while" => Some(Self::RiseThenFall),
            _ => None,
        }
    }

    /// Command-line keyword for this strategy.
    pub fn word(self) -> &'static str {
        match self {
            Self::Counted => "for",
            Self::RiseThenFall => "while",
        }
    }
}

/// Full rendering configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Style {
    pub orientation: Orientation,
    pub strategy: Strategy,
}

impl Style {
    pub fn new(orientation: Orientation, strategy: Strategy) -> Self {
        Self {
            orientation,
            strategy,
        }
    }

    /// Label shown in the verbose implementation banner.
    pub fn describe(&self) -> String {
        let prefix = match self.orientation {
            Orientation::Upright => "regular",
            Orientation::Inverse => "inverse",
        };
        format!("{} {} loop", prefix, self.strategy.word())
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
