// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for argument dispatch, height input, and the runtime.

use thiserror::Error;

/// Errors produced while interpreting positional arguments.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("unknown argument \"{0}\"")]
    UnknownArgument(String),

    #[error("expected at most 2 arguments, got {0} (usage: for/while (inverse))")]
    TooManyArguments(usize),
}

/// Errors produced while reading or validating a height.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum HeightError {
    #[error("no height given")]
    MissingInput,

    #[error("height must be a whole number, got \"{0}\"")]
    NotANumber(String),

    #[error("height must be at least 1, got {0}")]
    NotPositive(i64),

    #[error("height {value} exceeds the maximum of {max}")]
    TooLarge { value: i64, max: u32 },
}

/// Top-level failure of a single invocation.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    #[error(transparent)]
    Height(#[from] HeightError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
