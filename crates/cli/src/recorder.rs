// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Recorder run loop: stream generated code while the driver acts.
//!
//! The preamble is written before any action arrives and the teardown only
//! after the session ends, so every intermediate state of the script is
//! observable on stdout. Each block is flushed as soon as it is emitted.

use std::path::PathBuf;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::actions::Action;
use crate::cli::Cli;
use crate::devices;
use crate::report::print_warning;
use crate::script::{action_block, page_open_block, ScriptOptions};
use crate::storage::{StorageError, StorageState};

/// Exit codes matching the recorder's CLI conventions
pub mod exit_codes {
    /// Orderly session close
    pub const SUCCESS: i32 = 0;
    /// Startup or runtime error
    pub const ERROR: i32 = 1;
    /// Interrupted by signal (Ctrl+C)
    pub const INTERRUPTED: i32 = 130;
}

/// Errors that abort a recording session.
#[derive(Debug, thiserror::Error)]
pub enum RecorderError {
    /// `--device` named a profile that does not exist.
    #[error("unknown device \"{name}\" (known devices: {known})")]
    UnknownDevice {
        /// The requested name.
        name: String,
        /// Comma-separated known profile names.
        known: String,
    },

    /// A storage-state file could not be loaded or saved.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// IO error on stdout or the output file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// One recording session: emits script text as the driver acts.
#[derive(Debug)]
pub struct Recorder {
    options: ScriptOptions,
    start_url: Option<String>,
    output: Option<PathBuf>,
    save_storage: Option<PathBuf>,
    storage: StorageState,
    /// Everything emitted so far, persisted verbatim when `--output` is set.
    script: String,
}

impl Recorder {
    /// Validate CLI arguments and load preconditions.
    ///
    /// Device names are checked against the registry and storage state is
    /// parsed up front, so bad inputs fail before any script text is
    /// emitted.
    pub async fn from_cli(cli: &Cli) -> Result<Self, RecorderError> {
        if let Some(ref name) = cli.device {
            if devices::find(name).is_none() {
                return Err(RecorderError::UnknownDevice {
                    name: name.clone(),
                    known: devices::known_names(),
                });
            }
        }

        let storage = match cli.load_storage {
            Some(ref path) => StorageState::load(path).await?,
            None => StorageState::default(),
        };

        let options = ScriptOptions {
            browser: cli.browser,
            channel: cli.channel.clone(),
            color_scheme: cli.color_scheme,
            device: cli.device.clone(),
            load_storage: cli.load_storage.as_ref().map(|p| p.display().to_string()),
            save_storage: cli.save_storage.as_ref().map(|p| p.display().to_string()),
        };

        Ok(Self {
            options,
            start_url: cli.url.clone(),
            output: cli.output.clone(),
            save_storage: cli.save_storage.clone(),
            storage,
            script: String::new(),
        })
    }

    /// Everything emitted so far.
    pub fn script(&self) -> &str {
        &self.script
    }

    /// Append `text` to the script and write it through, flushed.
    async fn emit<W>(&mut self, writer: &mut W, text: &str) -> Result<(), std::io::Error>
    where
        W: AsyncWriteExt + Unpin,
    {
        self.script.push_str(text);
        writer.write_all(text.as_bytes()).await?;
        writer.flush().await
    }

    /// Run the session to completion and return the exit code.
    ///
    /// Reads driver commands from stdin until `close`, end-of-input, or
    /// Ctrl+C, then emits the teardown block, saves storage state if
    /// requested, and persists the full script when `--output` is set.
    pub async fn run(&mut self) -> Result<i32, RecorderError> {
        let mut stdout = tokio::io::stdout();

        let preamble = self.options.preamble();
        self.emit(&mut stdout, &preamble).await?;
        self.emit(&mut stdout, page_open_block()).await?;
        if let Some(url) = self.start_url.clone() {
            let block = action_block(&Action::Goto { url });
            self.emit(&mut stdout, &block).await?;
        }

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut lineno = 0u64;
        let interrupted = loop {
            let line = tokio::select! {
                line = lines.next_line() => line?,
                _ = tokio::signal::ctrl_c() => break true,
            };
            let Some(line) = line else {
                break false; // driver closed stdin
            };
            lineno += 1;
            match Action::parse(&line) {
                Ok(None) => {}
                Ok(Some(Action::Close)) => break false,
                Ok(Some(action)) => {
                    let block = action_block(&action);
                    self.emit(&mut stdout, &block).await?;
                }
                // Bad driver lines are reported but do not end the session.
                Err(e) => print_warning(format_args!("line {}: {}", lineno, e)),
            }
        };

        let teardown = self.options.teardown();
        self.emit(&mut stdout, &teardown).await?;

        if let Some(path) = self.save_storage.clone() {
            self.storage.save(&path).await?;
        }
        if let Some(path) = self.output.clone() {
            tokio::fs::write(&path, &self.script).await?;
        }

        Ok(if interrupted {
            exit_codes::INTERRUPTED
        } else {
            exit_codes::SUCCESS
        })
    }
}

#[cfg(test)]
#[path = "recorder_tests.rs"]
mod tests;
