// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Recorder simulator binary entry point.

use clap::Parser;

use codegenless::cli::Cli;
use codegenless::recorder::{exit_codes, Recorder};
use codegenless::report::print_error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut recorder = match Recorder::from_cli(&cli).await {
        Ok(recorder) => recorder,
        Err(e) => {
            print_error(e);
            std::process::exit(exit_codes::ERROR);
        }
    };

    match recorder.run().await {
        Ok(exit_codes::SUCCESS) => Ok(()),
        Ok(code) => std::process::exit(code),
        Err(e) => {
            print_error(e);
            std::process::exit(exit_codes::ERROR);
        }
    }
}
