// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-test fixture factory for launching the tool under test.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::HarnessError;
use crate::process::{CliSession, LaunchOptions};

/// Factory producing launched sessions, scoped to one test case.
///
/// Holds the program path plus launch configuration; each [`run_cli`] call
/// spawns a fresh process. Sessions kill their process on drop, so teardown
/// happens on every exit path, assertion failure included.
///
/// [`run_cli`]: CliRunner::run_cli
#[derive(Clone, Debug)]
pub struct CliRunner {
    program: PathBuf,
    base_args: Vec<String>,
    options: LaunchOptions,
}

impl CliRunner {
    /// Create a runner for `program`.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            base_args: Vec::new(),
            options: LaunchOptions::default(),
        }
    }

    /// Arguments prepended to every `run_cli` invocation.
    pub fn base_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.base_args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Working directory for spawned processes.
    pub fn cwd(mut self, dir: impl Into<PathBuf>) -> Self {
        self.options.cwd = Some(dir.into());
        self
    }

    /// Add an environment variable override.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.env.push((key.into(), value.into()));
        self
    }

    /// Rewrite positional file-path arguments to `file://` URLs.
    pub fn convert_file_paths(mut self, convert: bool) -> Self {
        self.options.convert_file_paths = convert;
        self
    }

    /// Default deadline for `wait_for` calls on launched sessions.
    pub fn wait_timeout(mut self, deadline: Duration) -> Self {
        self.options.wait_timeout = deadline;
        self
    }

    /// The program this runner launches.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Launch the tool with `args` appended to the base arguments.
    pub fn run_cli<I, S>(&self, args: I) -> Result<CliSession, HarnessError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut all_args = self.base_args.clone();
        all_args.extend(args.into_iter().map(Into::into));
        CliSession::launch(&self.program, &all_args, &self.options)
    }
}
