// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Suite-level runner configuration.
//!
//! Constructed once at suite startup and passed by reference into fixture
//! composition. CI adjustments are explicit transformations, not mutations
//! of global state.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::HarnessError;

fn default_workers() -> usize {
    1
}

fn default_timeout_ms() -> u64 {
    120_000
}

fn default_global_timeout_ms() -> u64 {
    7_200_000
}

/// Runner configuration for one suite.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SuiteConfig {
    /// Worker parallelism.
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Per-test retry count. Retries are the runner's job; the harness
    /// itself never retries.
    #[serde(default)]
    pub retries: u32,

    /// Fail the run when a focused test is committed.
    #[serde(default)]
    pub forbid_only: bool,

    /// Per-test timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Whole-run timeout in milliseconds.
    #[serde(default = "default_global_timeout_ms")]
    pub global_timeout_ms: u64,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            retries: 0,
            forbid_only: false,
            timeout_ms: default_timeout_ms(),
            global_timeout_ms: default_global_timeout_ms(),
        }
    }
}

impl SuiteConfig {
    /// Parse a TOML configuration document.
    pub fn from_toml(source: &str) -> Result<Self, HarnessError> {
        toml::from_str(source).map_err(|e| HarnessError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file.
    pub async fn load(path: &Path) -> Result<Self, HarnessError> {
        let source = tokio::fs::read_to_string(path).await?;
        Self::from_toml(&source)
    }

    /// Overrides applied under continuous integration: focused tests become
    /// errors and failing tests get one retry. Multiple retries are too slow
    /// on the emulated platforms this suite targets.
    pub fn with_ci_overrides(mut self) -> Self {
        self.forbid_only = true;
        self.retries = self.retries.max(1);
        self
    }

    /// Apply [`with_ci_overrides`] when the `CI` environment variable is
    /// set, as continuous-integration runners do.
    ///
    /// [`with_ci_overrides`]: SuiteConfig::with_ci_overrides
    pub fn for_current_env(self) -> Self {
        if is_ci() {
            self.with_ci_overrides()
        } else {
            self
        }
    }

    /// Per-test timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Whole-run timeout.
    pub fn global_timeout(&self) -> Duration {
        Duration::from_millis(self.global_timeout_ms)
    }
}

/// Whether the current process runs under continuous integration.
pub fn is_ci() -> bool {
    std::env::var_os("CI").is_some_and(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "suite_tests.rs"]
mod tests;
