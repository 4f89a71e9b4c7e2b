// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Interactive height prompt.

use std::io::{BufRead, Write};

use crate::error::{HeightError, RunError};
use crate::pyramid::Height;

/// Prompt written before reading a height from stdin.
pub const PROMPT: &str = "Hoe groot? ";

/// Parse and validate a height typed by the user or passed via `--height`.
///
/// Only the first whitespace-separated token counts, and it must be a whole
/// number on its own (`"3"` is accepted, `"3abc"` is not).
pub fn parse_height(text: &str, max: u32) -> Result<Height, HeightError> {
    let token = text
        .split_whitespace()
        .next()
        .ok_or(HeightError::MissingInput)?;
    let value: i64 = token
        .parse()
        .map_err(|_| HeightError::NotANumber(token.to_string()))?;
    Height::new(value, max)
}

/// Write [`PROMPT`] to `output` and read a height from `input`.
///
/// Blank lines are skipped; end of input before any token is
/// [`HeightError::MissingInput`].
pub fn read_height<R, W>(mut input: R, output: &mut W, max: u32) -> Result<Height, RunError>
where
    R: BufRead,
    W: Write + ?Sized,
{
    output.write_all(PROMPT.as_bytes())?;
    output.flush()?;

    let mut line = Vec::new();
    loop {
        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            return Err(HeightError::MissingInput.into());
        }
        // Undecodable bytes become U+FFFD and fail as not-a-number.
        let text = String::from_utf8_lossy(&line);
        if !text.trim().is_empty() {
            return Ok(parse_height(&text, max)?);
        }
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
