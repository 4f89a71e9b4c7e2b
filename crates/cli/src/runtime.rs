// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Single-invocation runtime: resolve the style, obtain a height, render.

use std::io::{BufRead, Write};

use crate::cli::{Cli, USAGE_HINT};
use crate::env;
use crate::error::RunError;
use crate::input::{parse_height, read_height};
use crate::output_diagnostic::{print_info, print_warning};
use crate::pyramid::{render, DEFAULT_MAX_HEIGHT};

/// Settings sourced from the environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Largest height accepted from `--height` or the prompt
    pub max_height: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_height: DEFAULT_MAX_HEIGHT,
        }
    }
}

impl Settings {
    /// Read settings from the environment, warning about unusable values.
    pub fn from_env() -> Self {
        Self::from_raw(env::max_height().as_deref())
    }

    fn from_raw(max_height: Option<&str>) -> Self {
        let Some(raw) = max_height else {
            return Self::default();
        };
        match env::parse_max_height(raw) {
            Some(max_height) => Self { max_height },
            None => {
                print_warning(format_args!(
                    "ignoring {}={:?}, using {}",
                    env::PIRAMIDE_MAX_HEIGHT,
                    raw,
                    DEFAULT_MAX_HEIGHT
                ));
                Self::default()
            }
        }
    }
}

/// Run one invocation against explicit input and output streams.
///
/// Argument errors are reported before any prompt is shown.
pub fn run<R, W>(cli: &Cli, settings: &Settings, input: R, output: &mut W) -> Result<(), RunError>
where
    R: BufRead,
    W: Write + ?Sized,
{
    let style = cli.style()?;
    if cli.uses_defaults() {
        print_info(USAGE_HINT);
    }

    // An empty `PIRAMIDE_HEIGHT` counts as unset.
    let given = cli.height.as_deref().filter(|text| !text.trim().is_empty());
    let height = match given {
        Some(text) => parse_height(text, settings.max_height)?,
        None => read_height(input, output, settings.max_height)?,
    };

    if cli.verbose {
        print_info(format_args!("Implementation: {}", style.describe()));
    }

    render(output, height, style)?;
    output.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "runtime_tests.rs"]
mod tests;
