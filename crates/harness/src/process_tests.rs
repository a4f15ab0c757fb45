// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use std::io::Write;

use super::*;

#[test]
fn test_file_url_for_existing_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"<html></html>").unwrap();

    let converted = file_url(file.path()).unwrap();
    assert!(converted.starts_with("file://"), "got {}", converted);
    assert!(converted.ends_with(file.path().file_name().unwrap().to_str().unwrap()));
}

#[test]
fn test_convert_arg_leaves_flags_alone() {
    assert_eq!(convert_arg("--color-scheme=light"), "--color-scheme=light");
    assert_eq!(convert_arg("-b"), "-b");
}

#[test]
fn test_convert_arg_leaves_missing_paths_alone() {
    assert_eq!(
        convert_arg("https://example.com/page"),
        "https://example.com/page"
    );
    assert_eq!(convert_arg("no/such/file.html"), "no/such/file.html");
}

#[test]
fn test_convert_arg_rewrites_existing_paths() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let arg = file.path().to_str().unwrap();
    assert!(convert_arg(arg).starts_with("file://"));
}

#[test]
fn test_exit_code_passthrough() {
    let status = std::process::Command::new("sh")
        .args(["-c", "exit 3"])
        .status()
        .unwrap();
    assert_eq!(exit_code(status), 3);
}

#[cfg(unix)]
#[test]
fn test_exit_code_reports_signal_as_128_plus() {
    let status = std::process::Command::new("sh")
        .args(["-c", "kill -9 $$"])
        .status()
        .unwrap();
    assert_eq!(exit_code(status), 137);
}
