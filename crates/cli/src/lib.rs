// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pyramid printer
//!
//! Prints a triangular pattern of asterisks whose rows rise from one star to
//! the chosen height and fall back to one. The pattern can be left-aligned
//! (upright) or right-aligned (inverse), and produced by either a closed-form
//! counted loop or a rise-then-fall counter; both yield identical output.
//!
//! ```
//! use piramide::pyramid::{render_to_string, Height, Orientation, Strategy, Style};
//!
//! let height = Height::try_from(3_i64).unwrap();
//! let style = Style::new(Orientation::Inverse, Strategy::RiseThenFall);
//! assert_eq!(render_to_string(height, style), "  *\n **\n***\n **\n  *\n");
//! ```

pub mod cli;
pub mod env;
pub mod error;
pub mod input;
pub mod output_diagnostic;
pub mod pyramid;
pub mod runtime;
