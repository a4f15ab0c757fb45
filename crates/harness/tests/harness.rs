// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! End-to-end harness tests against shell-scripted subprocesses.
//!
//! `sh` stands in for the tool under test: it can stage output over time,
//! hold the stream open, and exit with chosen codes, which is everything the
//! harness has to cope with.

use std::path::Path;
use std::time::Duration;

use codegenless_harness::{CliRunner, HarnessError, LaunchOptions};

fn sh(script: &str) -> CliRunner {
    CliRunner::new("sh").base_args(["-c", script])
}

#[tokio::test]
async fn test_wait_for_observes_transient_output() {
    // The marker is printed, then more text follows; a late reader would
    // still find it, but the wait must resolve while the process runs.
    let cli = sh("printf 'preamble\\n'; sleep 0.5; printf 'teardown\\n'")
        .run_cli::<_, String>([])
        .unwrap();

    cli.wait_for("preamble").await.unwrap();
    assert!(!cli.text().contains("teardown"));

    cli.wait_for("teardown").await.unwrap();
    assert_eq!(cli.exited().await, 0);
}

#[tokio::test]
async fn test_wait_for_returns_immediately_when_present() {
    let cli = sh("printf 'already here\\n'; sleep 5")
        .run_cli::<_, String>([])
        .unwrap();
    cli.wait_for("already here").await.unwrap();

    let start = std::time::Instant::now();
    cli.wait_for("already").await.unwrap();
    assert!(start.elapsed() < Duration::from_millis(100));

    cli.terminate();
}

#[tokio::test]
async fn test_match_timeout_reports_snippet_and_buffer() {
    let cli = sh("printf 'some output\\n'; sleep 5")
        .wait_timeout(Duration::from_millis(300))
        .run_cli::<_, String>([])
        .unwrap();

    let err = cli.wait_for("never appears").await.unwrap_err();
    match err {
        HarnessError::MatchTimeout {
            snippet, buffer, ..
        } => {
            assert_eq!(snippet, "never appears");
            assert!(buffer.contains("some output"));
        }
        other => panic!("expected timeout, got {:?}", other),
    }

    // A timed-out assertion must not have killed the process.
    cli.wait_for("some output").await.unwrap();
    cli.terminate();
}

#[tokio::test]
async fn test_unexpected_exit_reports_status_and_partial_buffer() {
    let cli = sh("printf 'partial\\n'; exit 7")
        .run_cli::<_, String>([])
        .unwrap();

    let err = cli.wait_for("never appears").await.unwrap_err();
    match err {
        HarnessError::UnexpectedExit { status, buffer, .. } => {
            assert_eq!(status, 7);
            assert!(buffer.contains("partial"));
        }
        other => panic!("expected unexpected-exit, got {:?}", other),
    }
}

#[tokio::test]
async fn test_exited_is_idempotent_and_cached() {
    let cli = sh("exit 3").run_cli::<_, String>([]).unwrap();
    assert_eq!(cli.exited().await, 3);
    assert_eq!(cli.exited().await, 3);
}

#[tokio::test]
async fn test_output_flushed_before_exit_resolves() {
    let cli = sh("printf 'last words'").run_cli::<_, String>([]).unwrap();
    assert_eq!(cli.exited().await, 0);
    // Everything written before exit is already in the buffer.
    assert!(cli.text().contains("last words"));
}

#[cfg(unix)]
#[tokio::test]
async fn test_terminate_unblocks_exited() {
    let cli = sh("sleep 30").run_cli::<_, String>([]).unwrap();
    cli.terminate();
    // SIGKILL surfaces as 128 + 9.
    assert_eq!(cli.exited().await, 137);
}

#[tokio::test]
async fn test_terminate_after_exit_is_a_no_op() {
    let cli = sh("exit 0").run_cli::<_, String>([]).unwrap();
    assert_eq!(cli.exited().await, 0);
    cli.terminate();
    cli.terminate();
    assert_eq!(cli.exited().await, 0);
}

#[tokio::test]
async fn test_shutdown_terminates_and_reports() {
    let cli = sh("sleep 30").run_cli::<_, String>([]).unwrap();
    let status = cli.shutdown().await;
    assert_ne!(status, 0);
}

#[tokio::test]
async fn test_launch_error_for_missing_executable() {
    let runner = CliRunner::new("/no/such/binary-anywhere");
    let err = runner.run_cli(["--help"]).unwrap_err();
    match err {
        HarnessError::Launch { command, .. } => {
            assert!(command.contains("binary-anywhere"));
        }
        other => panic!("expected launch error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_env_and_cwd_options() {
    let dir = tempfile::tempdir().unwrap();
    let cli = CliRunner::new("sh")
        .base_args(["-c", "printf '%s %s' \"$GREETING\" \"$(pwd)\""])
        .env("GREETING", "hello")
        .cwd(dir.path())
        .run_cli::<_, String>([])
        .unwrap();

    assert_eq!(cli.exited().await, 0);
    let text = cli.text();
    assert!(text.contains("hello"), "got {}", text);
    let cwd = std::fs::canonicalize(dir.path()).unwrap();
    assert!(
        text.contains(cwd.to_str().unwrap()),
        "got {} want {}",
        text,
        cwd.display()
    );
}

#[tokio::test]
async fn test_positional_path_converted_to_file_url() {
    use std::io::Write;

    let mut page = tempfile::NamedTempFile::with_suffix(".html").unwrap();
    page.write_all(b"<html></html>").unwrap();

    let cli = CliRunner::new("sh")
        .base_args(["-c", "printf '%s' \"$1\"", "sh"])
        .convert_file_paths(true)
        .run_cli([page.path().to_str().unwrap()])
        .unwrap();

    assert_eq!(cli.exited().await, 0);
    let text = cli.text();
    assert!(text.starts_with("file://"), "got {}", text);
}

#[tokio::test]
async fn test_stdin_scripting() {
    let cli = CliRunner::new("sh")
        .base_args(["-c", "while read line; do printf 'got %s\\n' \"$line\"; done"])
        .run_cli::<_, String>([])
        .unwrap();

    cli.write_line("first").await.unwrap();
    cli.wait_for("got first").await.unwrap();

    cli.write_line("second").await.unwrap();
    cli.wait_for("got second").await.unwrap();

    cli.close_stdin().await;
    assert_eq!(cli.exited().await, 0);
}

#[tokio::test]
async fn test_multibyte_output_across_pipe_chunks() {
    // Emit a multi-byte character in two writes; the snapshot never shows a
    // torn sequence.
    let cli = sh("printf '\\342\\202'; sleep 0.1; printf '\\254 done'")
        .run_cli::<_, String>([])
        .unwrap();

    cli.wait_for("€ done").await.unwrap();
    assert_eq!(cli.exited().await, 0);
}

#[tokio::test]
async fn test_launch_options_default_timeout() {
    let options = LaunchOptions::default();
    assert_eq!(options.wait_timeout, codegenless_harness::DEFAULT_WAIT_TIMEOUT);
    assert!(!options.convert_file_paths);
}

#[tokio::test]
async fn test_file_url_helper() {
    let page = tempfile::NamedTempFile::with_suffix(".html").unwrap();
    let url = codegenless_harness::file_url(page.path()).unwrap();
    assert!(url.starts_with("file://"));
    assert!(Path::new(page.path()).exists());
}
