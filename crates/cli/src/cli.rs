// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing and mode dispatch.

use clap::Parser;

use crate::error::ArgumentError;
use crate::pyramid::{Orientation, Strategy, Style};

/// Hint shown when no mode words are given.
pub const USAGE_HINT: &str = "commandline arguments: for/while (inverse)";

/// Pyramid printer
#[derive(Parser, Clone, Debug)]
#[command(name = "piramide", version, about = "Print a pyramid of asterisks")]
pub struct Cli {
    /// Iteration strategy (`for` or `while`), optionally followed by `inverse`
    #[arg(value_name = "ARGS")]
    pub args: Vec<String>,

    /// Height of the pyramid; prompted for on stdin when omitted
    #[arg(long, env = "PIRAMIDE_HEIGHT", allow_negative_numbers = true)]
    pub height: Option<String>,

    /// Print which implementation renders the pattern
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve the positional words into a rendering style.
    pub fn style(&self) -> Result<Style, ArgumentError> {
        dispatch(&self.args)
    }

    /// True when no mode words were given and defaults apply.
    pub fn uses_defaults(&self) -> bool {
        self.args.is_empty()
    }
}

/// Map positional words to a style.
///
/// `[]` is upright/counted, `[strategy]` is upright, `[strategy, "inverse"]`
/// is inverse. The orientation word is checked before the strategy word.
pub fn dispatch<S: AsRef<str>>(args: &[S]) -> Result<Style, ArgumentError> {
    match args {
        [] => Ok(Style::default()),
        [strategy] => Ok(Style::new(
            Orientation::Upright,
            parse_strategy(strategy.as_ref())?,
        )),
        [strategy, orientation] => {
            let orientation = orientation.as_ref();
            let orientation = Orientation::from_word(orientation)
                .ok_or_else(|| ArgumentError::UnknownArgument(orientation.to_string()))?;
            Ok(Style::new(orientation, parse_strategy(strategy.as_ref())?))
        }
        _ => Err(ArgumentError::TooManyArguments(args.len())),
    }
}

fn parse_strategy(word: &str) -> Result<Strategy, ArgumentError> {
    Strategy::from_word(word).ok_or_else(|| ArgumentError::UnknownArgument(word.to_string()))
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
