// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Shared helpers for recorder integration tests.

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;

use codegenless_harness::CliRunner;
use tempfile::NamedTempFile;

/// Path to the codegenless binary under test.
pub fn codegenless_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_codegenless"))
}

/// Fixture factory scoped to one test case.
pub fn runner() -> CliRunner {
    CliRunner::new(codegenless_bin())
}

/// Write an empty HTML page and return it with its `file://` URL.
pub fn blank_page() -> (NamedTempFile, String) {
    let mut file = tempfile::Builder::new()
        .suffix(".html")
        .tempfile()
        .unwrap();
    file.write_all(b"<html></html>").unwrap();
    file.flush().unwrap();
    let url = codegenless_harness::file_url(file.path()).unwrap();
    (file, url)
}

/// Launch-option lines as they appear in the generated script.
pub fn launch_options(channel: Option<&str>) -> String {
    match channel {
        Some(channel) => format!("headless: false,\n    channel: '{}'", channel),
        None => "headless: false".to_string(),
    }
}

/// Import + launch lines up to (but excluding) the context-creation call.
pub fn expected_preamble(imports: &str, browser: &str, channel: Option<&str>) -> String {
    format!(
        "const {{ {} }} = require('playwright');\n\n(async () => {{\n  const browser = await {}.launch({{\n    {}\n  }});\n",
        imports,
        browser,
        launch_options(channel)
    )
}
