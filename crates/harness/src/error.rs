// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error taxonomy surfaced to awaiting test assertions.

use std::path::PathBuf;
use std::time::Duration;

/// Errors that can occur while driving the tool under test.
///
/// Nothing is swallowed: matcher and exit-tracker failures propagate to the
/// assertion that awaited them. Teardown noise (terminating an
/// already-exited process) is not represented here at all, so it can never
/// mask the original failure.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    /// The subprocess could not be started. Fatal to the test case.
    #[error("failed to launch `{command}`: {source}")]
    Launch {
        /// The program that failed to spawn.
        command: String,
        /// The underlying spawn error.
        #[source]
        source: std::io::Error,
    },

    /// A `wait_for` deadline elapsed without the snippet appearing.
    ///
    /// Carries the full buffer captured at failure time so the test output
    /// shows exactly what the tool had produced so far.
    #[error(
        "timed out after {timeout:?} waiting for:\n{snippet}\n--- output at timeout ---\n{buffer}"
    )]
    MatchTimeout {
        /// The snippet that never appeared.
        snippet: String,
        /// Buffer contents at the moment the deadline elapsed.
        buffer: String,
        /// The deadline that elapsed.
        timeout: Duration,
    },

    /// The subprocess exited while a match was still pending.
    #[error(
        "process exited with status {status} before the output appeared:\n{snippet}\n--- output at exit ---\n{buffer}"
    )]
    UnexpectedExit {
        /// Exit status of the subprocess.
        status: i32,
        /// The snippet that was still pending.
        snippet: String,
        /// Buffer contents at exit.
        buffer: String,
    },

    /// A persisted output file differs from the expected script.
    #[error("output file {} does not match the expected content:\n{diff}", .path.display())]
    OutputMismatch {
        /// The file that was checked.
        path: PathBuf,
        /// Unified diff, expected vs. actual.
        diff: String,
    },

    /// A suite configuration file could not be parsed.
    #[error("invalid suite config: {0}")]
    Config(String),

    /// An environment provider failed to set up.
    #[error("environment `{name}` failed to set up: {message}")]
    EnvSetup {
        /// Name of the failing provider.
        name: String,
        /// Provider-supplied failure description.
        message: String,
    },

    /// IO error during read/write.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
