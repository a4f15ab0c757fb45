// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Byte-for-byte comparison of persisted output files.

use std::path::Path;

use similar::TextDiff;

use crate::error::HarnessError;

/// Assert that the file at `path` equals `expected`, byte for byte.
///
/// This checks the tool's second output obligation: when an output file is
/// requested, the persisted script must match the streamed text exactly. On
/// mismatch the error carries a unified diff (expected vs. actual).
pub async fn expect_file_content(path: &Path, expected: &str) -> Result<(), HarnessError> {
    let actual = tokio::fs::read_to_string(path).await?;
    if actual == expected {
        return Ok(());
    }
    Err(HarnessError::OutputMismatch {
        path: path.to_path_buf(),
        diff: unified_diff(expected, &actual),
    })
}

/// Unified diff of two texts, expected on the left.
pub fn unified_diff(expected: &str, actual: &str) -> String {
    TextDiff::from_lines(expected, actual)
        .unified_diff()
        .context_radius(3)
        .header("expected", "actual")
        .to_string()
}

#[cfg(test)]
#[path = "compare_tests.rs"]
mod tests;
