// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Subprocess launch, stdout capture, and exit tracking.
//!
//! A launched session runs two background tasks: a reader that drains the
//! child's stdout into the shared [`OutputBuffer`] until end-of-stream, and a
//! supervisor that reaps the child. The supervisor resolves the exit signal
//! only after the reader finishes, so buffer completeness happens-before
//! exit-signal resolution.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::process::{ChildStdin, Command};
use tokio::sync::{watch, Mutex, Notify};
use tokio::time::timeout;
use url::Url;

use crate::buffer::OutputBuffer;
use crate::error::HarnessError;
use crate::matcher::{self, WaitOutcome, DEFAULT_WAIT_TIMEOUT};

/// Options applied when launching the tool under test.
#[derive(Clone, Debug)]
pub struct LaunchOptions {
    /// Working directory for the spawned process.
    pub cwd: Option<PathBuf>,
    /// Extra environment variables.
    pub env: Vec<(String, String)>,
    /// Rewrite positional arguments naming existing files to `file://` URLs.
    ///
    /// Only arguments that do not begin with `-` are considered; flag values
    /// must use the `--flag=value` form to stay untouched.
    pub convert_file_paths: bool,
    /// Default deadline for `wait_for` calls on this session.
    pub wait_timeout: Duration,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            cwd: None,
            env: Vec::new(),
            convert_file_paths: false,
            wait_timeout: DEFAULT_WAIT_TIMEOUT,
        }
    }
}

/// Handle to a launched tool under test.
///
/// Owned by exactly one test case. The OS process is killed when the handle
/// drops if it has not already exited, so a failing assertion never leaks a
/// process across test runs.
#[derive(Debug)]
pub struct CliSession {
    command: String,
    buffer: OutputBuffer,
    stdin: Mutex<Option<ChildStdin>>,
    exit: watch::Receiver<Option<i32>>,
    kill: Arc<Notify>,
    wait_timeout: Duration,
}

impl CliSession {
    /// Spawn `program` with `args`.
    ///
    /// Stdout is captured incrementally; stderr passes through for
    /// debugging; stdin is piped so a scripted driver can act. A spawn
    /// failure surfaces as [`HarnessError::Launch`], distinct from any
    /// runtime failure of the tool itself.
    pub fn launch(
        program: &Path,
        args: &[String],
        options: &LaunchOptions,
    ) -> Result<Self, HarnessError> {
        let command = program.display().to_string();
        let launch_error = |source: std::io::Error| HarnessError::Launch {
            command: command.clone(),
            source,
        };

        let args: Vec<String> = if options.convert_file_paths {
            args.iter().map(|a| convert_arg(a)).collect()
        } else {
            args.to_vec()
        };

        let mut cmd = Command::new(program);
        cmd.args(&args);
        for (key, value) in &options.env {
            cmd.env(key, value);
        }
        if let Some(ref cwd) = options.cwd {
            cmd.current_dir(cwd);
        }
        cmd.stdin(Stdio::piped());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::inherit());
        // Backstop for tests that bail without an orderly shutdown.
        cmd.kill_on_drop(true);

        let mut child = cmd.spawn().map_err(&launch_error)?;

        let stdin = child.stdin.take();
        let mut stdout = child.stdout.take().ok_or_else(|| {
            launch_error(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "stdout pipe unavailable",
            ))
        })?;

        let buffer = OutputBuffer::new();
        let (exit_tx, exit_rx) = watch::channel(None);
        let kill = Arc::new(Notify::new());

        // Reader: drain stdout to end-of-stream. Chunk boundaries are
        // whatever the pipe delivers; the buffer reassembles split UTF-8.
        let reader = {
            let buffer = buffer.clone();
            tokio::spawn(async move {
                let mut chunk = [0u8; 4096];
                loop {
                    match stdout.read(&mut chunk).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => buffer.append(&chunk[..n]),
                    }
                }
            })
        };

        // Supervisor: reap the child, on request or natural exit. The exit
        // signal resolves only after the reader has drained everything.
        {
            let buffer = buffer.clone();
            let kill = kill.clone();
            tokio::spawn(async move {
                let status = tokio::select! {
                    status = child.wait() => status,
                    _ = kill.notified() => {
                        let _ = child.start_kill();
                        child.wait().await
                    }
                };
                let _ = reader.await;
                buffer.close();
                let code = status.map(exit_code).unwrap_or(-1);
                let _ = exit_tx.send(Some(code));
            });
        }

        Ok(Self {
            command,
            buffer,
            stdin: Mutex::new(stdin),
            exit: exit_rx,
            kill,
            wait_timeout: options.wait_timeout,
        })
    }

    /// The program this session launched, for error reports.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Current accumulated stdout. Pure read.
    pub fn text(&self) -> String {
        self.buffer.snapshot()
    }

    /// The underlying append-only buffer.
    pub fn buffer(&self) -> &OutputBuffer {
        &self.buffer
    }

    /// Suspend until `snippet` appears in the output, with the session's
    /// default deadline.
    pub async fn wait_for(&self, snippet: &str) -> Result<(), HarnessError> {
        self.wait_for_timeout(snippet, self.wait_timeout).await
    }

    /// Suspend until `snippet` appears in the output.
    ///
    /// Returns immediately when the snippet is already present. An elapsed
    /// deadline fails only this assertion; the subprocess keeps running. If
    /// the tool exits before the snippet appears, the failure is
    /// [`HarnessError::UnexpectedExit`] with the exit status and the partial
    /// buffer.
    pub async fn wait_for_timeout(
        &self,
        snippet: &str,
        deadline: Duration,
    ) -> Result<(), HarnessError> {
        match matcher::wait_for(&self.buffer, snippet, deadline).await {
            WaitOutcome::Matched => Ok(()),
            WaitOutcome::Timeout(buffer) => Err(HarnessError::MatchTimeout {
                snippet: snippet.to_string(),
                buffer,
                timeout: deadline,
            }),
            WaitOutcome::Closed(buffer) => Err(HarnessError::UnexpectedExit {
                status: self.exit_status_soon().await,
                snippet: snippet.to_string(),
                buffer,
            }),
        }
    }

    /// Exit status for a stream that already closed. A tool lingering with
    /// stdout closed is terminated rather than hanging the assertion.
    async fn exit_status_soon(&self) -> i32 {
        match timeout(Duration::from_secs(1), self.exited()).await {
            Ok(code) => code,
            Err(_) => {
                self.terminate();
                self.exited().await
            }
        }
    }

    /// Await process termination and return the exit status.
    ///
    /// Resolves exactly once internally; awaiting it again (including after
    /// resolution) yields the same cached status. All output is already in
    /// the buffer by the time this resolves. Signal-terminated processes
    /// report `128 + signal` on Unix.
    pub async fn exited(&self) -> i32 {
        let mut rx = self.exit.clone();
        let result = match rx.wait_for(|code| code.is_some()).await {
            Ok(code) => code.unwrap_or(-1),
            // Supervisor dropped without reporting; runtime is shutting down.
            Err(_) => -1,
        };
        result
    }

    /// Send a termination signal to the subprocess.
    ///
    /// Safe to call repeatedly or after natural exit; both are no-ops.
    pub fn terminate(&self) {
        self.kill.notify_one();
    }

    /// Terminate and await the exit status.
    pub async fn shutdown(&self) -> i32 {
        self.terminate();
        self.exited().await
    }

    /// Write one line to the tool's stdin, flushing immediately.
    pub async fn write_line(&self, line: &str) -> Result<(), HarnessError> {
        let mut guard = self.stdin.lock().await;
        let stdin = guard.as_mut().ok_or_else(|| {
            HarnessError::Io(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "stdin already closed",
            ))
        })?;
        stdin.write_all(line.as_bytes()).await?;
        stdin.write_all(b"\n").await?;
        stdin.flush().await?;
        Ok(())
    }

    /// Close stdin, signalling the end of the scripted session.
    pub async fn close_stdin(&self) {
        self.stdin.lock().await.take();
    }
}

impl Drop for CliSession {
    /// Scoped-resource discipline: a session dropped mid-test (assertion
    /// failure included) still terminates its process.
    fn drop(&mut self) {
        self.kill.notify_one();
    }
}

/// Convert a filesystem path to a `file://` URL string.
///
/// Returns `None` when the path cannot be made absolute.
pub fn file_url(path: &Path) -> Option<String> {
    let absolute = std::fs::canonicalize(path).ok()?;
    Url::from_file_path(&absolute).ok().map(|u| u.to_string())
}

/// Rewrite a positional argument naming an existing file to a `file://` URL;
/// anything else passes through unchanged.
fn convert_arg(arg: &str) -> String {
    if arg.starts_with('-') {
        return arg.to_string();
    }
    let path = Path::new(arg);
    if !path.exists() {
        return arg.to_string();
    }
    file_url(path).unwrap_or_else(|| arg.to_string())
}

fn exit_code(status: std::process::ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    -1
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
