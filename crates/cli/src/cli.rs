// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing matching the recorder's interface.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Browser-recorder codegen simulator
#[derive(Parser, Clone, Debug)]
#[command(name = "codegenless", version, about = "Browser-recorder codegen simulator")]
pub struct Cli {
    /// Starting URL (or `file://` target) to open
    #[arg(value_name = "URL")]
    pub url: Option<String>,

    /// Browser to record with
    #[arg(short = 'b', long, value_enum, default_value = "chromium", env = "CODEGENLESS_BROWSER")]
    pub browser: BrowserName,

    /// Browser distribution channel (e.g. `chrome`, `msedge`)
    #[arg(long, env = "CODEGENLESS_CHANNEL")]
    pub channel: Option<String>,

    /// Emulate a color scheme
    #[arg(long, value_enum)]
    pub color_scheme: Option<ColorScheme>,

    /// Emulate a named device profile
    #[arg(long, value_name = "NAME")]
    pub device: Option<String>,

    /// Also persist the finished script to this file
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Load browser storage state from this JSON file
    #[arg(long, value_name = "PATH")]
    pub load_storage: Option<PathBuf>,

    /// Save browser storage state to this JSON file on close
    #[arg(long, value_name = "PATH")]
    pub save_storage: Option<PathBuf>,
}

/// Browser identities the recorder can drive.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BrowserName {
    /// Chromium-based browsers
    Chromium,
    /// Firefox
    Firefox,
    /// WebKit / Safari
    Webkit,
}

impl BrowserName {
    /// The identifier as it appears in generated code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chromium => "chromium",
            Self::Firefox => "firefox",
            Self::Webkit => "webkit",
        }
    }
}

impl std::fmt::Display for BrowserName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Color-scheme emulation values.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorScheme {
    /// Prefer light mode
    Light,
    /// Prefer dark mode
    Dark,
}

impl ColorScheme {
    /// The value as it appears in generated code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
