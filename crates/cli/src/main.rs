// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pyramid printer binary entry point.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use clap::Parser;

use piramide::cli::Cli;
use piramide::output_diagnostic::print_error;
use piramide::runtime::{run, Settings};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let settings = Settings::from_env();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match run(&cli, &settings, stdin.lock(), &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Keep whatever was already written (e.g. the prompt) ahead of the error.
            let _ = out.flush();
            print_error(e);
            ExitCode::FAILURE
        }
    }
}
