// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test harness for CLI tools that stream generated code to stdout.
//!
//! The tool under test emits source text incrementally: a preamble appears
//! before any action is performed, per-action blocks follow as a scripted
//! driver acts, and a teardown block appears only at shutdown. A one-shot
//! "read everything, then compare" strategy cannot observe those transient
//! intermediate states, so this crate launches the tool as a subprocess,
//! accumulates its stdout into an append-only buffer, and lets tests suspend
//! until an exact substring appears ([`CliSession::wait_for`]) or the process
//! exits ([`CliSession::exited`]).
//!
//! The harness never parses the generated code. Raw accumulating text plus
//! timing is the whole contract.

pub mod buffer;
pub mod compare;
pub mod env;
pub mod error;
pub mod fixture;
pub mod matcher;
pub mod process;
pub mod suite;

pub use buffer::OutputBuffer;
pub use compare::expect_file_content;
pub use env::{ContextFragment, EnvProvider, EnvStack};
pub use error::HarnessError;
pub use fixture::CliRunner;
pub use matcher::DEFAULT_WAIT_TIMEOUT;
pub use process::{file_url, CliSession, LaunchOptions};
pub use suite::SuiteConfig;
